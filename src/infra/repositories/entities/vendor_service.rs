//! Vendor service database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::VendorService;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    pub price_from: i64,
    pub price_to: i64,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for VendorService {
    fn from(model: Model) -> Self {
        VendorService {
            id: model.id,
            vendor_id: model.vendor_id,
            category_id: model.category_id,
            title: model.title,
            description: model.description,
            price_from: model.price_from,
            price_to: model.price_to,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
