//! Domain models shared by the service and data layers.
//!
//! Entity models are converted into these types at the repository boundary, where stored
//! string ids are parsed back into Discord snowflakes.

pub mod invite;
pub mod invocation;
pub mod registration;
pub mod reply;
