//! Wire types for the activities API.
//!
//! The list endpoint returns a JSON object keyed by activity name; a
//! `BTreeMap` keeps the card order deterministic across fetches.

use serde::Deserialize;
use std::collections::BTreeMap;

pub type ActivityCollection = BTreeMap<String, Activity>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Tennis Club": {
            "description": "Practice serves and play friendly matches",
            "schedule": "Tuesdays, 4:00 PM - 5:30 PM",
            "max_participants": 10,
            "participants": []
        },
        "Drama Club": {
            "description": "Act, direct, and produce plays and performances",
            "schedule": "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
            "max_participants": 20,
            "participants": ["ella@mergington.edu"]
        }
    }"#;

    #[test]
    fn parses_the_list_payload() {
        let acts: ActivityCollection = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(acts.len(), 3);

        let chess = &acts["Chess Club"];
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );

        assert!(acts["Tennis Club"].participants.is_empty());
    }

    #[test]
    fn unknown_server_fields_are_ignored() {
        let json = r#"{
            "Art Studio": {
                "description": "Painting and sculpture",
                "schedule": "Thursdays, 3:30 PM - 5:00 PM",
                "max_participants": 15,
                "participants": [],
                "room": "B12"
            }
        }"#;
        let acts: ActivityCollection = serde_json::from_str(json).unwrap();
        assert_eq!(acts["Art Studio"].max_participants, 15);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let json = r#"{ "Chess Club": { "description": "x", "schedule": "y" } }"#;
        assert!(serde_json::from_str::<ActivityCollection>(json).is_err());
    }
}
