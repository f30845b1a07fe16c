//! Event database entity for SeaORM.
//!
//! Features, FAQs and schedule lines are JSON columns; they are
//! always read and written as whole collections with their event.

use sea_orm::entity::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Event, EventStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTimeUtc,
    pub ends_at: Option<DateTimeUtc>,
    pub price: i64,
    pub capacity: i32,
    pub status: String,
    pub image_url: Option<String>,
    pub features: Json,
    pub faqs: Json,
    pub schedule: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Decode a JSON column into a typed collection; malformed data
/// degrades to an empty collection rather than failing the read.
pub(crate) fn vec_from_json<T: DeserializeOwned>(value: Json) -> Vec<T> {
    serde_json::from_value(value).unwrap_or_default()
}

/// Encode a collection for a JSON column.
pub(crate) fn json_from<T: Serialize>(value: &[T]) -> Json {
    serde_json::to_value(value).unwrap_or_else(|_| Json::Array(Vec::new()))
}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Event {
            id: model.id,
            organizer_id: model.organizer_id,
            category_id: model.category_id,
            title: model.title,
            description: model.description,
            venue: model.venue,
            city: model.city,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            price: model.price,
            capacity: model.capacity,
            status: EventStatus::parse(&model.status).unwrap_or(EventStatus::Draft),
            image_url: model.image_url,
            features: vec_from_json(model.features),
            faqs: vec_from_json(model.faqs),
            schedule: vec_from_json(model.schedule),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
