use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One campus date record (quarter calendar entries such as
/// "Pass 1 begins"). Serde names follow the original wire shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampusDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    #[serde(rename = "localDateTime")]
    pub local_date_time: NaiveDateTime,
}

impl Record for CampusDate {
    const ENTITY: &'static str = "campus date";

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
    fn serde_uses_original_field_names() {
        let date = CampusDate {
            id: Some(1),
            quarter_yyyyq: "20224".to_string(),
            name: "Pass 1 begins".to_string(),
            local_date_time: "2022-08-15T09:00:00".parse().unwrap(),
        };
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"quarterYYYYQ":"20224","name":"Pass 1 begins","localDateTime":"2022-08-15T09:00:00"}"#
        );
        let back: CampusDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
