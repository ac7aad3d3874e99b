use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(string_null(Registration::DiscordId).unique_key())
                    .col(string(Registration::FirstName))
                    .col(string(Registration::LastName))
                    .col(string_uniq(Registration::Email))
                    .col(string_uniq(Registration::AuthCode))
                    .col(boolean(Registration::Verified).default(false))
                    .col(
                        timestamp_with_time_zone(Registration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Registration::VerifiedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    DiscordId,
    FirstName,
    LastName,
    Email,
    AuthCode,
    Verified,
    CreatedAt,
    VerifiedAt,
}
