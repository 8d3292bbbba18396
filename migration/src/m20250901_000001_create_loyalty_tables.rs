use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    FullName,
    NationalId,
    Phone,
    Email,
    Points,
    OwnerId,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum Redemptions {
    Table,
    Id,
    ClientId,
    UserId,
    AmountCents,
    Description,
    CreatedAt,
}

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
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(16)
                            .not_null()
                            .default("operator"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username_unique")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::FullName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Clients::NationalId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Clients::Phone).string_len(32).null())
                    .col(ColumnDef::new(Clients::Email).string_len(255).null())
                    .col(
                        ColumnDef::new(Clients::Points)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Clients::OwnerId).integer().not_null())
                    .col(
                        ColumnDef::new(Clients::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clients_owner")
                            .from(Clients::Table, Clients::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // one client per national id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_clients_national_id_unique")
                    .table(Clients::Table)
                    .col(Clients::NationalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_clients_owner")
                    .table(Clients::Table)
                    .col(Clients::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Redemptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Redemptions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Redemptions::ClientId).integer().not_null())
                    .col(ColumnDef::new(Redemptions::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Redemptions::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Redemptions::Description).text().null())
                    .col(
                        ColumnDef::new(Redemptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redemptions_client")
                            .from(Redemptions::Table, Redemptions::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_redemptions_user")
                            .from(Redemptions::Table, Redemptions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // analytics filter by recorder and time window
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_redemptions_user_created")
                    .table(Redemptions::Table)
                    .col(Redemptions::UserId)
                    .col(Redemptions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_redemptions_client")
                    .table(Redemptions::Table)
                    .col(Redemptions::ClientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Redemptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Clients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
