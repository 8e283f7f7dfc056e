//! Lodgings Table Component

use leptos::prelude::*;

use crate::models::Lodging;

/// Display values for one lodging row
#[derive(Debug, Clone, PartialEq)]
pub struct LodgingRow {
    pub dates: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub rooms: String,
}

impl From<&Lodging> for LodgingRow {
    fn from(lodging: &Lodging) -> Self {
        Self {
            dates: format!("{} - {}", lodging.date_start, lodging.date_end),
            name: lodging.name.clone(),
            address: lodging.address.clone().unwrap_or_default(),
            phone: lodging.phone.clone().unwrap_or_default(),
            rooms: lodging.room_count.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

pub fn lodging_rows(lodgings: &[Lodging]) -> Vec<LodgingRow> {
    lodgings.iter().map(LodgingRow::from).collect()
}

#[component]
pub fn LodgingsTable(lodgings: Vec<Lodging>) -> impl IntoView {
    let rows = lodging_rows(&lodgings);

    view! {
        <div class="detail-table lodgings-table">
            <h3>"Lodgings"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"Dates"</th>
                        <th>"Name"</th>
                        <th>"Address"</th>
                        <th>"Phone"</th>
                        <th>"Rooms"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td class="nowrap">{row.dates}</td>
                            <td>{row.name}</td>
                            <td>{row.address}</td>
                            <td>{row.phone}</td>
                            <td>{row.rooms}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lodging_row_formats_date_range() {
        let lodging = Lodging {
            id: 2,
            date_start: "2024-01-02".into(),
            date_end: "2024-01-05".into(),
            name: "Casa".into(),
            address: None,
            phone: Some("+51 1 555".into()),
            room_count: Some(2),
            itinerary_id: 9,
        };

        let row = LodgingRow::from(&lodging);
        assert_eq!(row.dates, "2024-01-02 - 2024-01-05");
        assert_eq!(row.address, "");
        assert_eq!(row.phone, "+51 1 555");
        assert_eq!(row.rooms, "2");
    }

    #[test]
    fn test_unknown_room_count_is_blank() {
        let lodging = Lodging {
            id: 1,
            date_start: "2024-01-01".into(),
            date_end: "2024-01-02".into(),
            name: "Hut".into(),
            address: None,
            phone: None,
            room_count: None,
            itinerary_id: 1,
        };
        assert_eq!(LodgingRow::from(&lodging).rooms, "");
    }
}
