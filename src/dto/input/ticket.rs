use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub guest_name: Option<String>,
    pub adult_count: u32,
    pub child_count: u32,
    pub scheduled_time: String,
    pub secret_word: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_json_deserialize_ok() {
        let json = r#"{
            "guest_name": "Vlad",
            "adult_count": 2,
            "child_count": 3,
            "scheduled_time": "13:30",
            "secret_word": "garlic"
        }"#;

        let ticket = serde_json::from_str::<Ticket>(json).unwrap();

        assert_eq!(ticket.guest_name.as_deref(), Some("Vlad"));
        assert_eq!(ticket.adult_count, 2);
        assert_eq!(ticket.child_count, 3);
    }

    #[test]
    fn ticket_json_deserialize_guest_name_missing() {
        let json = r#"{
            "adult_count": 1,
            "child_count": 0,
            "scheduled_time": "13:30",
            "secret_word": "garlic"
        }"#;

        let ticket = serde_json::from_str::<Ticket>(json).unwrap();

        assert!(ticket.guest_name.is_none());
    }

    #[test]
    fn ticket_json_deserialize_negative_count_err() {
        let json = r#"{
            "guest_name": "Vlad",
            "adult_count": -1,
            "child_count": 0,
            "scheduled_time": "13:30",
            "secret_word": "garlic"
        }"#;

        let ticket = serde_json::from_str::<Ticket>(json);

        assert!(ticket.is_err());
    }
}
