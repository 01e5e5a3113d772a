pub mod catalog;
pub mod health;
pub mod preference;
pub mod votes;
