//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Pending registration with a generated email and auth code
//! let pending = factory::create_registration(&db).await?;
//!
//! // Verified member bound to a Discord id
//! let verified = factory::registration::RegistrationFactory::new(&db)
//!     .first_name("Jane")
//!     .last_name("Doe")
//!     .verified_as("123456789")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `registration` - Pending and verified registration records
//! - `invite` - Invite attribution edges
//! - `allowed_email` - Allow-list entries

pub mod allowed_email;
pub mod helpers;
pub mod invite;
pub mod registration;

pub use allowed_email::create_allowed_email;
pub use invite::create_invite;
pub use registration::{create_registration, create_verified_registration};
