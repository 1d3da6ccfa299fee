//! Establishment display model

use serde::Serialize;
use tabled::Tabled;

use super::or_dash;
use crate::client::models::Establishment;

/// Establishment display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EstablishmentDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "CITY")]
    pub city: String,

    #[tabled(rename = "DIRECTOR")]
    pub director: String,
}

impl From<Establishment> for EstablishmentDisplay {
    fn from(e: Establishment) -> Self {
        Self {
            id: e.id,
            name: e.name,
            code: or_dash(e.code),
            kind: or_dash(e.kind),
            city: or_dash(e.city),
            director: or_dash(e.director_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_render_as_dash() {
        let display = EstablishmentDisplay::from(Establishment {
            id: 7,
            name: "Collège Sud".to_string(),
            code: Some("CS-07".to_string()),
            city: None,
            kind: Some("".to_string()),
            director_name: None,
        });

        assert_eq!(display.code, "CS-07");
        assert_eq!(display.city, "--");
        assert_eq!(display.kind, "--");
        assert_eq!(display.director, "--");
    }
}
