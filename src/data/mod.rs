//! Database repository layer.
//!
//! Repositories implement the store contracts the bot relies on (registration lookups,
//! invite edges, the email allow-list) with SeaORM and convert entity models into domain
//! models at this boundary. Discord ids are stored as strings.

pub mod allowed_email;
pub mod invite;
pub mod registration;

#[cfg(test)]
mod test;
