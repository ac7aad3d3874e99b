//! Registration factory for creating pending and verified records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::registration::RegistrationFactory;
///
/// let record = RegistrationFactory::new(&db)
///     .email("jane@school.edu")
///     .auth_code("ABCD2345")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
    auth_code: String,
    verified: bool,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: `None` (pending)
    /// - first_name: `"First{id}"`, last_name: `"Last{id}"`
    /// - email: `"student{id}@school.edu"`
    /// - auth_code: `"CODE{id}"`
    /// - verified: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: None,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("student{}@school.edu", id),
            auth_code: format!("CODE{}", id),
            verified: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn auth_code(mut self, auth_code: impl Into<String>) -> Self {
        self.auth_code = auth_code.into();
        self
    }

    /// Marks the record verified and binds it to the given Discord id.
    pub fn verified_as(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = Some(discord_id.into());
        self.verified = true;
        self
    }

    /// Builds and inserts the registration entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created registration entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        let now = Utc::now();
        entity::registration::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            auth_code: ActiveValue::Set(self.auth_code),
            verified: ActiveValue::Set(self.verified),
            created_at: ActiveValue::Set(now),
            verified_at: ActiveValue::Set(self.verified.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending registration with default values.
pub async fn create_registration(
    db: &DatabaseConnection,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db).build().await
}

/// Creates a verified registration bound to `discord_id`.
pub async fn create_verified_registration(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db)
        .verified_as(discord_id)
        .build()
        .await
}
