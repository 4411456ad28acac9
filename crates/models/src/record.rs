use serde::de::DeserializeOwned;
use serde::Serialize;

/// A domain record that can live in a [`Collection`](crate::collection::Collection).
///
/// The store only cares that every record carries a unique integer id; the
/// remaining fields are opaque to it. An id of `None` marks a record that has
/// not been stored yet (ids are assigned by the store on `add`).
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync {
    /// Lowercase entity noun used in error messages ("park with id 99 not found").
    const ENTITY: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);
}
