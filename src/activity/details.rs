use serde::Deserialize;

/// One activity as the client knows it: the name it is keyed by on the
/// server plus the details carried under that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Wire shape of the value stored under each activity name.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ActivityRecord {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl ActivityRecord {
    pub(crate) fn into_activity(self, name: String) -> Activity {
        Activity {
            name,
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

impl Activity {
    /// Remaining capacity. Negative when the server has over-filled the roster.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            name: "Chess Club".to_string(),
            description: "Learn chess".to_string(),
            schedule: "Fridays".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_subtracts_roster_from_capacity() {
        let activity = create_activity(10, &["a@x.com"]);
        assert_eq!(activity.spots_left(), 9);
    }

    #[test]
    fn spots_left_goes_negative_when_over_filled() {
        let activity = create_activity(1, &["a@x.com", "b@x.com"]);
        assert_eq!(activity.spots_left(), -1);
        assert!(activity.is_full());
    }

    #[test]
    fn empty_roster_is_not_full() {
        let activity = create_activity(5, &[]);
        assert!(!activity.is_full());
        assert!(create_activity(1, &["a@x.com"]).is_full());
    }

    #[test]
    fn record_keeps_participant_order() {
        let record: ActivityRecord = serde_json::from_str(
            r#"{"description":"d","schedule":"s","max_participants":3,"participants":["z@x.com","a@x.com"]}"#,
        )
        .unwrap();
        let activity = record.into_activity("Art".to_string());

        assert_eq!(activity.name, "Art");
        assert_eq!(activity.participants, vec!["z@x.com", "a@x.com"]);
    }

    #[test]
    fn record_without_participants_is_rejected() {
        let result: Result<ActivityRecord, _> = serde_json::from_str(
            r#"{"description":"d","schedule":"s","max_participants":3}"#,
        );
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn spots_left_matches_capacity_minus_roster(max in 0u32..500, count in 0usize..50) {
            let participants: Vec<String> = (0..count).map(|i| format!("p{i}@x.com")).collect();
            let activity = Activity {
                name: "n".to_string(),
                description: String::new(),
                schedule: String::new(),
                max_participants: max,
                participants,
            };
            prop_assert_eq!(activity.spots_left(), i64::from(max) - count as i64);
        }
    }
}
