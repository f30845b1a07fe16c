//! Migration: Create the service_bids table.

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_users_table::Users;
use super::m20240601_000003_create_events_table::Events;
use super::m20240601_000004_create_vendor_services_table::VendorServices;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceBids::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceBids::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceBids::EventId).uuid().not_null())
                    .col(ColumnDef::new(ServiceBids::ServiceId).uuid().not_null())
                    .col(ColumnDef::new(ServiceBids::VendorId).uuid().not_null())
                    .col(ColumnDef::new(ServiceBids::Amount).big_integer().not_null())
                    .col(ColumnDef::new(ServiceBids::Message).text().not_null())
                    .col(ColumnDef::new(ServiceBids::Status).string().not_null())
                    .col(
                        ColumnDef::new(ServiceBids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceBids::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_bids_event")
                            .from(ServiceBids::Table, ServiceBids::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_bids_service")
                            .from(ServiceBids::Table, ServiceBids::ServiceId)
                            .to(VendorServices::Table, VendorServices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_bids_vendor")
                            .from(ServiceBids::Table, ServiceBids::VendorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_bids_event_id")
                    .table(ServiceBids::Table)
                    .col(ServiceBids::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_bids_vendor_id")
                    .table(ServiceBids::Table)
                    .col(ServiceBids::VendorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceBids::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ServiceBids {
    Table,
    Id,
    EventId,
    ServiceId,
    VendorId,
    Amount,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
