use sea_orm_migration::prelude::*;
use sea_orm::DbBackend;

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
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Manufacturers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Manufacturers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Manufacturers::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Manufacturers::TimeCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Manufacturers::TimeUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // SQLite has no fixed-point type; the query builder rejects a precision above 16 there.
        let mut price = ColumnDef::new(Watches::Price);
        match manager.get_database_backend() {
            DbBackend::Sqlite => price.decimal(),
            _ => price.decimal_len(22, 2),
        };

        manager
            .create_table(
                Table::create()
                    .table(Watches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Watches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Watches::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Watches::Description).text().not_null())
                    .col(
                        ColumnDef::new(Watches::ManufacturerId)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(price.not_null())
                    .col(
                        ColumnDef::new(Watches::TimeCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Watches::TimeUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Watches::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watches_manufacturer_id")
                            .from(Watches::Table, Watches::ManufacturerId)
                            .to(Manufacturers::Table, Manufacturers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Baskets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Baskets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Baskets::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Baskets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_baskets_user_id")
                            .from(Baskets::Table, Baskets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BasketItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BasketItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BasketItems::ProductId).integer().not_null())
                    .col(ColumnDef::new(BasketItems::BasketId).integer().not_null())
                    .col(
                        ColumnDef::new(BasketItems::Quantity)
                            .integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(BasketItems::Quantity).gte(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_basket_items_product_id")
                            .from(BasketItems::Table, BasketItems::ProductId)
                            .to(Watches::Table, Watches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_basket_items_basket_id")
                            .from(BasketItems::Table, BasketItems::BasketId)
                            .to(Baskets::Table, Baskets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BasketItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Baskets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Watches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Manufacturers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    IsStaff,
    IsActive,
    DateJoined,
}

#[derive(DeriveIden)]
enum Manufacturers {
    Table,
    Id,
    Name,
    TimeCreated,
    TimeUpdated,
}

#[derive(DeriveIden)]
enum Watches {
    Table,
    Id,
    Name,
    Description,
    ManufacturerId,
    Price,
    TimeCreated,
    TimeUpdated,
    IsActive,
}

#[derive(DeriveIden)]
enum Baskets {
    Table,
    Id,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BasketItems {
    Table,
    Id,
    ProductId,
    BasketId,
    Quantity,
}
