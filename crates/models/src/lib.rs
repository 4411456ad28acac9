pub mod errors;
pub mod record;
pub mod collection;
pub mod book;
pub mod park;
pub mod restaurant;
pub mod campus_date;
pub mod fixtures;
