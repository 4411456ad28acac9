use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One restaurant record from the restaurants admin pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub description: String,
}

impl Record for Restaurant {
    const ENTITY: &'static str = "restaurant";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstored_restaurants_serialize_without_an_id() {
        let r = Restaurant {
            id: None,
            name: "Freebirds".to_string(),
            address: "879 Embarcadero del Norte".to_string(),
            city: "Isla Vista".to_string(),
            state: "CA".to_string(),
            zip: "93117".to_string(),
            description: "Burritos".to_string(),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("\"id\""));

        let mut stored = r.clone();
        stored.set_id(7);
        assert_eq!(stored.id(), Some(7));
        assert!(serde_json::to_string(&stored).unwrap().starts_with(r#"{"id":7,"#));
    }
}
