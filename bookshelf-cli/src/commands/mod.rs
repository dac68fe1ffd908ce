//! CLI command implementations

mod apply;
mod genres;
mod list;
mod script;

pub use apply::apply;
pub use genres::genres;
pub use list::{list, View};
pub use script::load_policy;
