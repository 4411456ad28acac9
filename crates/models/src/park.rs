use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One park record from the parks admin pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Park {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub rating: String,
}

impl Record for Park {
    const ENTITY: &'static str = "park";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
