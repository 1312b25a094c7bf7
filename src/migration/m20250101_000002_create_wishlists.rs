use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_catalog::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wishlists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wishlists::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Wishlists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite key: one membership row per (wishlist, product).
        manager
            .create_table(
                Table::create()
                    .table(WishlistProducts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WishlistProducts::WishlistId).integer().not_null())
                    .col(ColumnDef::new(WishlistProducts::ProductId).integer().not_null())
                    .col(
                        ColumnDef::new(WishlistProducts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WishlistProducts::WishlistId)
                            .col(WishlistProducts::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_products_wishlist_id")
                            .from(WishlistProducts::Table, WishlistProducts::WishlistId)
                            .to(Wishlists::Table, Wishlists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_products_product_id")
                            .from(WishlistProducts::Table, WishlistProducts::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(WishlistProducts::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Wishlists::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Wishlists {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum WishlistProducts {
    Table,
    WishlistId,
    ProductId,
    CreatedAt,
}
