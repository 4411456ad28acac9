use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One book record from the books admin pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Record for Book {
    const ENTITY: &'static str = "book";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
