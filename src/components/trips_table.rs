//! Trips Table Component
//!
//! Fixed-column table of the movement segments of one itinerary.

use leptos::prelude::*;

use crate::models::Trip;

/// Display values for one trip row
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub date: String,
    pub from: String,
    pub to: String,
    pub mode: String,
    pub transporter: String,
}

impl From<&Trip> for TripRow {
    fn from(trip: &Trip) -> Self {
        Self {
            date: trip.date_start.clone(),
            from: trip.location_start.clone(),
            to: trip.location_end.clone(),
            mode: trip.mode.clone().unwrap_or_default(),
            transporter: trip.transporter.clone().unwrap_or_default(),
        }
    }
}

pub fn trip_rows(trips: &[Trip]) -> Vec<TripRow> {
    trips.iter().map(TripRow::from).collect()
}

#[component]
pub fn TripsTable(trips: Vec<Trip>) -> impl IntoView {
    let rows = trip_rows(&trips);

    view! {
        <div class="detail-table trips-table">
            <h3>"Trips"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"From"</th>
                        <th>"To"</th>
                        <th>"Mode"</th>
                        <th>"Transporter"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td class="nowrap">{row.date}</td>
                            <td>{row.from}</td>
                            <td>{row.to}</td>
                            <td>{row.mode}</td>
                            <td>{row.transporter}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
