use sea_orm::entity::prelude::*;

/// A registration submitted through the DM dialogue.
///
/// `discord_id` stays `None` until the auth code is redeemed with `verify`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, nullable)]
    pub discord_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub auth_code: String,
    pub verified: bool,
    pub created_at: ChronoDateTimeUtc,
    #[sea_orm(nullable)]
    pub verified_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
