pub use super::allowed_email::Entity as AllowedEmail;
pub use super::invite::Entity as Invite;
pub use super::registration::Entity as Registration;
