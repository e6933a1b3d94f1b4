//! Migration: Create users and user_auth (session) tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Role).string_len(30).not_null())
                    .col(ColumnDef::new(Users::FirstName).string_len(30).not_null())
                    .col(ColumnDef::new(Users::LastName).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Users::UserName)
                            .string_len(30)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Salt).string_len(200).not_null())
                    .col(ColumnDef::new(Users::Country).string_len(30).null())
                    .col(ColumnDef::new(Users::AboutMe).string_len(50).null())
                    .col(ColumnDef::new(Users::Dob).date().null())
                    .col(ColumnDef::new(Users::ContactNumber).string_len(30).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserAuth::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserAuth::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(UserAuth::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserAuth::AccessToken)
                            .string_len(500)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserAuth::LoginAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAuth::LogoutAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_auth_user_id")
                            .from(UserAuth::Table, UserAuth::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAuth::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Users {
    Table,
    Id,
    Role,
    FirstName,
    LastName,
    UserName,
    Email,
    Password,
    Salt,
    Country,
    AboutMe,
    Dob,
    ContactNumber,
}

#[derive(Iden)]
enum UserAuth {
    Table,
    Id,
    UserId,
    AccessToken,
    LoginAt,
    LogoutAt,
}
