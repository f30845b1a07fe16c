//! Service bid database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Bid, BidStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_bids")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub event_id: Uuid,
    pub service_id: Uuid,
    pub vendor_id: Uuid,
    pub amount: i64,
    pub message: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Bid {
    fn from(model: Model) -> Self {
        Bid {
            id: model.id,
            event_id: model.event_id,
            service_id: model.service_id,
            vendor_id: model.vendor_id,
            amount: model.amount,
            message: model.message,
            status: BidStatus::parse(&model.status).unwrap_or(BidStatus::Pending),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
