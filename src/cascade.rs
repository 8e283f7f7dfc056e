//! Cascading Selection State
//!
//! State behind the itinerary dashboard: agency -> user -> itinerary ->
//! details. Each transition clears everything downstream before handing back
//! the request the view should run. Requests carry a per-level generation so
//! a response that arrives after its selection changed is dropped.

use crate::api::{parse_id, ApiResult, DashboardApi};
use crate::models::{Agency, Itinerary, ItineraryDetails, User};

/// Data bucket of the cascade, in drill-down order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Agencies,
    Users,
    Itineraries,
    Details,
}

impl Level {
    fn index(self) -> usize {
        match self {
            Level::Agencies => 0,
            Level::Users => 1,
            Level::Itineraries => 2,
            Level::Details => 3,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Level::Agencies => "agencies",
            Level::Users => "users",
            Level::Itineraries => "itineraries",
            Level::Details => "itinerary details",
        }
    }
}

/// One loading flag per bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub agencies: bool,
    pub users: bool,
    pub itineraries: bool,
    pub details: bool,
}

impl LoadingFlags {
    pub fn get(&self, level: Level) -> bool {
        match level {
            Level::Agencies => self.agencies,
            Level::Users => self.users,
            Level::Itineraries => self.itineraries,
            Level::Details => self.details,
        }
    }

    fn set(&mut self, level: Level, value: bool) {
        match level {
            Level::Agencies => self.agencies = value,
            Level::Users => self.users = value,
            Level::Itineraries => self.itineraries = value,
            Level::Details => self.details = value,
        }
    }

    pub fn any(&self) -> bool {
        self.agencies || self.users || self.itineraries || self.details
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub level: Level,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Agencies,
    Users { agency_id: u32 },
    Itineraries { user_id: u32 },
    Details { itinerary_id: u32 },
}

impl FetchTarget {
    pub fn level(&self) -> Level {
        match self {
            FetchTarget::Agencies => Level::Agencies,
            FetchTarget::Users { .. } => Level::Users,
            FetchTarget::Itineraries { .. } => Level::Itineraries,
            FetchTarget::Details { .. } => Level::Details,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub target: FetchTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Agencies(Vec<Agency>),
    Users(Vec<User>),
    Itineraries(Vec<Itinerary>),
    Details(ItineraryDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub ticket: Ticket,
    pub result: ApiResult<Payload>,
}

/// Selections, fetched data and loading flags of the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeState {
    pub selected_agency: String,
    pub selected_user: String,
    pub selected_itinerary: String,
    pub agencies: Vec<Agency>,
    pub users: Vec<User>,
    pub itineraries: Vec<Itinerary>,
    pub details: Option<ItineraryDetails>,
    pub loading: LoadingFlags,
    generations: [u64; 4],
}

impl CascadeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial agency load
    pub fn mount(&mut self) -> FetchRequest {
        self.issue(FetchTarget::Agencies)
    }

    pub fn select_agency(&mut self, value: String) -> Option<FetchRequest> {
        self.selected_agency = value;
        self.reset_users();
        let agency_id = parse_selection(Level::Users, &self.selected_agency)?;
        Some(self.issue(FetchTarget::Users { agency_id }))
    }

    pub fn select_user(&mut self, value: String) -> Option<FetchRequest> {
        self.selected_user = value;
        self.reset_itineraries();
        let user_id = parse_selection(Level::Itineraries, &self.selected_user)?;
        Some(self.issue(FetchTarget::Itineraries { user_id }))
    }

    pub fn select_itinerary(&mut self, value: String) -> Option<FetchRequest> {
        self.selected_itinerary = value;
        self.reset_details();
        let itinerary_id = parse_selection(Level::Details, &self.selected_itinerary)?;
        Some(self.issue(FetchTarget::Details { itinerary_id }))
    }

    /// Apply a finished request. Returns false when the outcome was stale.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> bool {
        let level = outcome.ticket.level;
        if !self.is_current(outcome.ticket) {
            log::debug!(
                "[ItineraryInterface] Dropping stale {} response (generation {})",
                level.noun(),
                outcome.ticket.generation
            );
            return false;
        }
        self.loading.set(level, false);

        match outcome.result {
            Ok(Payload::Agencies(agencies)) if level == Level::Agencies => self.agencies = agencies,
            Ok(Payload::Users(users)) if level == Level::Users => self.users = users,
            Ok(Payload::Itineraries(itineraries)) if level == Level::Itineraries => self.itineraries = itineraries,
            Ok(Payload::Details(details)) if level == Level::Details => self.details = Some(details),
            Ok(_) => {
                log::warn!("[ItineraryInterface] Payload does not match {} request", level.noun());
                return false;
            }
            Err(e) => {
                log::error!("[ItineraryInterface] Error fetching {}: {}", level.noun(), e);
            }
        }
        true
    }

    /// Make every in-flight request stale, e.g. when the view unmounts
    pub fn invalidate_all(&mut self) {
        for level in [Level::Agencies, Level::Users, Level::Itineraries, Level::Details] {
            self.invalidate(level);
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generations[ticket.level.index()] == ticket.generation
    }

    // ========================
    // Rendering Rules
    // ========================

    pub fn show_user_select(&self) -> bool {
        !self.selected_agency.is_empty()
    }

    pub fn show_itinerary_select(&self) -> bool {
        !self.selected_user.is_empty()
    }

    /// Details are shown only once the selected itinerary has resolved
    pub fn visible_details(&self) -> Option<&ItineraryDetails> {
        if self.selected_itinerary.is_empty() {
            return None;
        }
        self.details.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.any()
    }

    // ========================
    // Internals
    // ========================

    fn issue(&mut self, target: FetchTarget) -> FetchRequest {
        let level = target.level();
        let generation = self.bump(level);
        self.loading.set(level, true);
        FetchRequest { ticket: Ticket { level, generation }, target }
    }

    fn bump(&mut self, level: Level) -> u64 {
        let slot = &mut self.generations[level.index()];
        *slot += 1;
        *slot
    }

    fn invalidate(&mut self, level: Level) {
        self.bump(level);
        self.loading.set(level, false);
    }

    fn reset_users(&mut self) {
        self.selected_user.clear();
        self.users.clear();
        self.invalidate(Level::Users);
        self.reset_itineraries();
    }

    fn reset_itineraries(&mut self) {
        self.selected_itinerary.clear();
        self.itineraries.clear();
        self.invalidate(Level::Itineraries);
        self.reset_details();
    }

    fn reset_details(&mut self) {
        self.details = None;
        self.invalidate(Level::Details);
    }
}

/// The placeholder option (or anything non-numeric) means "nothing selected"
fn parse_selection(level: Level, value: &str) -> Option<u32> {
    match parse_id(value) {
        Ok(id) => Some(id),
        Err(_) => {
            log::debug!("[ItineraryInterface] No selection, skipping {} fetch", level.noun());
            None
        }
    }
}

/// Run one request against the backend
pub async fn run_fetch<A: DashboardApi + ?Sized>(api: &A, request: FetchRequest) -> FetchOutcome {
    let result = match request.target {
        FetchTarget::Agencies => api.list_agencies().await.map(Payload::Agencies),
        FetchTarget::Users { agency_id } => api.list_agency_users(agency_id).await.map(Payload::Users),
        FetchTarget::Itineraries { user_id } => api.list_user_itineraries(user_id).await.map(Payload::Itineraries),
        FetchTarget::Details { itinerary_id } => api.get_itinerary_details(itinerary_id).await.map(Payload::Details),
    };
    FetchOutcome { ticket: request.ticket, result }
}
