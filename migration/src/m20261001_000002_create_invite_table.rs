use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invite::Table)
                    .if_not_exists()
                    .col(string(Invite::InviteeId).primary_key())
                    .col(string(Invite::InviterId))
                    .col(boolean(Invite::Consumed).default(false))
                    .col(
                        timestamp_with_time_zone(Invite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invite_inviter_id")
                    .table(Invite::Table)
                    .col(Invite::InviterId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invite {
    Table,
    InviteeId,
    InviterId,
    Consumed,
    CreatedAt,
}
