use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};

use super::details::{Activity, ActivityRecord};

/// The activity collection in the order the server listed it.
///
/// The server answers with a JSON object keyed by activity name. Decoding goes
/// through an `IndexMap` so that key order survives; a repeated key keeps its
/// first position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityBoard {
    activities: IndexMap<String, Activity>,
}

impl ActivityBoard {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: activities
                .into_iter()
                .map(|activity| (activity.name.clone(), activity))
                .collect(),
        }
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    pub fn get_index(&self, index: usize) -> Option<&Activity> {
        self.activities.get_index(index).map(|(_, activity)| activity)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ActivityBoard {
    type Item = &'a Activity;
    type IntoIter = indexmap::map::Values<'a, String, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.values()
    }
}

impl<'de> Deserialize<'de> for ActivityBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = IndexMap::<String, ActivityRecord>::deserialize(deserializer)?;
        let activities = records
            .into_iter()
            .map(|(name, record)| (name.clone(), record.into_activity(name)))
            .collect();
        Ok(Self { activities })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHESS_ONLY: &str = r#"{"Chess Club": {"description":"Learn chess","schedule":"Fridays","max_participants":10,"participants":["a@x.com"]}}"#;

    #[test]
    fn decodes_single_activity() {
        let board = ActivityBoard::from_json(CHESS_ONLY).unwrap();

        assert_eq!(board.len(), 1);
        let chess = board.get_index(0).unwrap();
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.description, "Learn chess");
        assert_eq!(chess.schedule, "Fridays");
        assert_eq!(chess.spots_left(), 9);
        assert_eq!(chess.participants, vec!["a@x.com"]);
    }

    #[test]
    fn keeps_server_key_order() {
        let body = r#"{
            "Zumba": {"description":"d","schedule":"s","max_participants":1,"participants":[]},
            "Art Club": {"description":"d","schedule":"s","max_participants":1,"participants":[]},
            "Math Olympiad": {"description":"d","schedule":"s","max_participants":1,"participants":[]}
        }"#;

        let board = ActivityBoard::from_json(body).unwrap();
        let names: Vec<&str> = board.names().collect();

        assert_eq!(names, vec!["Zumba", "Art Club", "Math Olympiad"]);
    }

    #[test]
    fn repeated_key_keeps_first_position_with_last_value() {
        let body = r#"{
            "Chess": {"description":"old","schedule":"s","max_participants":1,"participants":[]},
            "Drama": {"description":"d","schedule":"s","max_participants":1,"participants":[]},
            "Chess": {"description":"new","schedule":"s","max_participants":1,"participants":[]}
        }"#;

        let board = ActivityBoard::from_json(body).unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board.get_index(0).unwrap().description, "new");
        assert_eq!(board.get_index(1).unwrap().name, "Drama");
    }

    #[test]
    fn new_board_collapses_repeated_names() {
        let activity = |name: &str, schedule: &str| Activity {
            name: name.to_string(),
            description: String::new(),
            schedule: schedule.to_string(),
            max_participants: 1,
            participants: Vec::new(),
        };

        let board = ActivityBoard::new(vec![
            activity("Chess", "Mondays"),
            activity("Drama", "Tuesdays"),
            activity("Chess", "Fridays"),
        ]);

        let names: Vec<&str> = board.names().collect();
        assert_eq!(names, vec!["Chess", "Drama"]);
        assert_eq!(board.get_index(0).unwrap().schedule, "Fridays");
        assert_eq!((&board).into_iter().count(), 2);
    }

    #[test]
    fn empty_object_is_empty_board() {
        let board = ActivityBoard::from_json("{}").unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(ActivityBoard::from_json("[]").is_err());
        assert!(ActivityBoard::from_json("<html>oops</html>").is_err());
    }

    #[test]
    fn error_body_is_not_a_board() {
        assert!(ActivityBoard::from_json(r#"{"detail":"Not Found"}"#).is_err());
    }
}
