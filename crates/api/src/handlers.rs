pub mod catalog;
pub mod preference;
pub mod votes;
