pub mod user;
pub mod profile;
pub mod store_state;

pub use user::*;
pub use profile::*;
pub use store_state::*;
