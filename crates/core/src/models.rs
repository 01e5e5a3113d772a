pub mod preference;
pub mod slot;

pub use preference::*;
pub use slot::*;
