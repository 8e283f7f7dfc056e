//! UI Components
//!
//! Reusable Leptos components.

mod select_field;
mod agency_select;
mod user_select;
mod itinerary_select;
mod trips_table;
mod lodgings_table;
mod itinerary_interface;
mod create_itinerary;
mod delete_confirm_button;
mod view_tab_bar;
mod recent_log_panel;

pub use select_field::SelectField;
pub use agency_select::AgencySelect;
pub use user_select::UserSelect;
pub use itinerary_select::ItinerarySelect;
pub use trips_table::TripsTable;
pub use lodgings_table::LodgingsTable;
pub use itinerary_interface::ItineraryInterface;
pub use create_itinerary::CreateItinerary;
pub use delete_confirm_button::DeleteConfirmButton;
pub use view_tab_bar::ViewTabBar;
pub use recent_log_panel::RecentLogPanel;
