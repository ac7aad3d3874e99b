pub mod prelude;

pub mod allowed_email;
pub mod invite;
pub mod registration;
