//! Vendor service offerings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A service a vendor offers to event organizers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorService {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    /// Indicative price range in minor currency units
    pub price_from: i64,
    pub price_to: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a vendor service
#[derive(Debug, Clone)]
pub struct NewVendorService {
    pub vendor_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    pub price_from: i64,
    pub price_to: i64,
}

/// Partial update of a vendor service
#[derive(Debug, Clone, Default)]
pub struct VendorServiceUpdate {
    pub category_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_from: Option<i64>,
    pub price_to: Option<i64>,
    pub active: Option<bool>,
}

/// Vendor service response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorServiceResponse {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub category_id: Uuid,
    #[schema(example = "Full-service catering")]
    pub title: String,
    pub description: String,
    #[schema(example = 50000)]
    pub price_from: i64,
    #[schema(example = 250000)]
    pub price_to: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<VendorService> for VendorServiceResponse {
    fn from(service: VendorService) -> Self {
        Self {
            id: service.id,
            vendor_id: service.vendor_id,
            category_id: service.category_id,
            title: service.title,
            description: service.description,
            price_from: service.price_from,
            price_to: service.price_to,
            active: service.active,
            created_at: service.created_at,
        }
    }
}
