//! Domain entities - the core business objects.

mod event;
mod user;

pub use event::{Event, EventKind};
pub use user::{File, User};
