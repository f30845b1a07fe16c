//! Migration: Create the vendor_services table.

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_users_table::Users;
use super::m20240601_000002_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorServices::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VendorServices::VendorId).uuid().not_null())
                    .col(ColumnDef::new(VendorServices::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(VendorServices::Title).string().not_null())
                    .col(
                        ColumnDef::new(VendorServices::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorServices::PriceFrom)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorServices::PriceTo)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VendorServices::Active).boolean().not_null())
                    .col(
                        ColumnDef::new(VendorServices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorServices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_services_vendor")
                            .from(VendorServices::Table, VendorServices::VendorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_services_category")
                            .from(VendorServices::Table, VendorServices::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vendor_services_vendor_id")
                    .table(VendorServices::Table)
                    .col(VendorServices::VendorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VendorServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum VendorServices {
    Table,
    Id,
    VendorId,
    CategoryId,
    Title,
    Description,
    PriceFrom,
    PriceTo,
    Active,
    CreatedAt,
    UpdatedAt,
}
