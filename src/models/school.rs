use serde::{Deserialize, Serialize};

/// A stored school record, as persisted and as returned by the listing
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A school submission that has passed validation and is ready to insert.
/// Constructed only by `validation::parse_new_school`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_serializes_with_flat_fields() {
        let school = School {
            id: 7,
            name: "Ridgemont High".to_string(),
            address: "1212 Vermont Ave".to_string(),
            latitude: 34.05,
            longitude: -118.24,
        };

        let value = serde_json::to_value(&school).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "name": "Ridgemont High",
                "address": "1212 Vermont Ave",
                "latitude": 34.05,
                "longitude": -118.24,
            })
        );
    }
}
