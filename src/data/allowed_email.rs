//! Email allow-list repository and the school-email predicate.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::util::email;

/// Repository for the allow-list of extra accepted addresses and domains.
pub struct AllowedEmailRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllowedEmailRepository<'a> {
    /// Creates a new AllowedEmailRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether `address` is an acceptable school email.
    ///
    /// Malformed addresses are never accepted. Unless `allow_list_only` is set, any
    /// `.edu` domain is accepted outright. Otherwise the address is accepted when the
    /// allow-list holds the full address, its domain, or one of its parent domains.
    ///
    /// # Arguments
    /// - `address` - Address as typed by the member; normalised before checking
    /// - `allow_list_only` - Skip the built-in `.edu` rule
    pub async fn is_edu_email(&self, address: &str, allow_list_only: bool) -> Result<bool, DbErr> {
        let address = email::normalize(address);
        let Some(domain) = email::domain_of(&address) else {
            return Ok(false);
        };

        if !allow_list_only && email::is_edu_domain(domain) {
            return Ok(true);
        }

        let mut candidates = email::domain_suffixes(domain);
        candidates.push(address.clone());

        self.contains_any(candidates).await
    }

    /// Checks whether a bare domain, or one of its parents, is on the allow-list.
    pub async fn is_allowed_domain(&self, domain: &str) -> Result<bool, DbErr> {
        let domain = email::normalize(domain);
        if !email::is_domain(&domain) {
            return Ok(false);
        }

        self.contains_any(email::domain_suffixes(&domain)).await
    }

    /// Adds an address or domain to the allow-list.
    ///
    /// # Arguments
    /// - `pattern` - Full address or domain; normalised before storing
    pub async fn add(&self, pattern: &str) -> Result<(), DbErr> {
        entity::allowed_email::ActiveModel {
            pattern: ActiveValue::Set(email::normalize(pattern)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn contains_any(&self, patterns: Vec<String>) -> Result<bool, DbErr> {
        let count = entity::prelude::AllowedEmail::find()
            .filter(entity::allowed_email::Column::Pattern.is_in(patterns))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
