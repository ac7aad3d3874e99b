//! Allow-list entry factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts `pattern` into the email allow-list.
///
/// The pattern is stored as given; callers pass already normalised (lower-case) values.
pub async fn create_allowed_email(
    db: &DatabaseConnection,
    pattern: impl Into<String>,
) -> Result<entity::allowed_email::Model, DbErr> {
    entity::allowed_email::ActiveModel {
        pattern: ActiveValue::Set(pattern.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
