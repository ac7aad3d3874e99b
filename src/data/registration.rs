//! Registration repository for pending and verified member records.

use chrono::Utc;
use rand::Rng;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::registration::{PendingRegistration, UserRecord},
    util::email,
};

/// Characters used for auth codes; visually ambiguous ones (0/O, 1/I) are left out.
const AUTH_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const AUTH_CODE_LEN: usize = 8;
const AUTH_CODE_ATTEMPTS: usize = 10;

/// Repository providing database operations for registration records.
pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new RegistrationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a verified registration is bound to the Discord id.
    ///
    /// # Returns
    /// - `Ok(true)` - The member has already verified
    /// - `Ok(false)` - No verified record for this id
    /// - `Err(DbErr)` - Database error during count query
    pub async fn id_taken(&self, discord_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::Registration::find()
            .filter(entity::registration::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::registration::Column::Verified.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any registration, pending or verified, uses the email.
    ///
    /// The email is normalised before comparison.
    pub async fn email_taken(&self, address: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Registration::find()
            .filter(entity::registration::Column::Email.eq(email::normalize(address)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the auth code belongs to a registration that has not been redeemed.
    pub async fn auth_code_taken(&self, auth_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Registration::find()
            .filter(entity::registration::Column::AuthCode.eq(auth_code))
            .filter(entity::registration::Column::Verified.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Persists a pending registration and assigns it a fresh auth code.
    ///
    /// The record is not bound to a Discord id yet; that happens in `verify_user` when
    /// the member redeems the code delivered to their email.
    ///
    /// # Arguments
    /// - `registration` - Confirmed details from the registration dialogue
    ///
    /// # Returns
    /// - `Ok(UserRecord)` - The stored pending record including its auth code
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the email is already registered
    /// - `Err(AppError::InternalErr(AuthCodeExhausted))` - No free auth code was found
    pub async fn add_verification(
        &self,
        registration: &PendingRegistration,
    ) -> Result<UserRecord, AppError> {
        let auth_code = self.generate_auth_code().await?;

        let entity = entity::registration::ActiveModel {
            discord_id: ActiveValue::Set(None),
            first_name: ActiveValue::Set(registration.first_name.clone()),
            last_name: ActiveValue::Set(registration.last_name.clone()),
            email: ActiveValue::Set(email::normalize(&registration.email)),
            auth_code: ActiveValue::Set(auth_code),
            verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            verified_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        UserRecord::from_entity(entity)
    }

    /// Redeems an auth code for the Discord id.
    ///
    /// Marks the matching pending record verified, binds it to `discord_id` and returns
    /// the nickname to apply in the guild. The transition is a single conditional update,
    /// so a code is redeemed at most once even under concurrent calls.
    ///
    /// # Returns
    /// - `Ok(Some(nickname))` - Record verified
    /// - `Ok(None)` - No unredeemed record carries this code
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn verify_user(
        &self,
        discord_id: u64,
        auth_code: &str,
    ) -> Result<Option<String>, AppError> {
        let result = entity::prelude::Registration::update_many()
            .filter(entity::registration::Column::AuthCode.eq(auth_code))
            .filter(entity::registration::Column::Verified.eq(false))
            .col_expr(
                entity::registration::Column::DiscordId,
                Expr::value(discord_id.to_string()),
            )
            .col_expr(entity::registration::Column::Verified, Expr::value(true))
            .col_expr(
                entity::registration::Column::VerifiedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        // Zero rows means the code is unknown or another member redeemed it first.
        if result.rows_affected == 0 {
            return Ok(None);
        }

        let Some(entity) = entity::prelude::Registration::find()
            .filter(entity::registration::Column::AuthCode.eq(auth_code))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(UserRecord::from_entity(entity)?.display_name()))
    }

    /// Finds the verified registration bound to a Discord id.
    ///
    /// # Returns
    /// - `Ok(Some(UserRecord))` - Verified record found
    /// - `Ok(None)` - The member never verified
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<UserRecord>, AppError> {
        let entity = entity::prelude::Registration::find()
            .filter(entity::registration::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::registration::Column::Verified.eq(true))
            .one(self.db)
            .await?;

        entity.map(UserRecord::from_entity).transpose()
    }

    async fn generate_auth_code(&self) -> Result<String, AppError> {
        for _ in 0..AUTH_CODE_ATTEMPTS {
            let code = Self::random_auth_code();

            let in_use = entity::prelude::Registration::find()
                .filter(entity::registration::Column::AuthCode.eq(code.as_str()))
                .count(self.db)
                .await?
                > 0;

            if !in_use {
                return Ok(code);
            }
        }

        Err(InternalError::AuthCodeExhausted {
            attempts: AUTH_CODE_ATTEMPTS,
        }
        .into())
    }

    fn random_auth_code() -> String {
        let mut rng = rand::rng();
        (0..AUTH_CODE_LEN)
            .map(|_| {
                let idx = rng.random_range(0..AUTH_CODE_CHARSET.len());
                AUTH_CODE_CHARSET[idx] as char
            })
            .collect()
    }
}
