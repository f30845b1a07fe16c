//! Service bids placed by vendors on events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Bid lifecycle status.
///
/// pending -> accepted | rejected (organizer decision)
/// pending -> withdrawn (vendor decision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
            BidStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BidStatus::Pending),
            "accepted" => Some(BidStatus::Accepted),
            "rejected" => Some(BidStatus::Rejected),
            "withdrawn" => Some(BidStatus::Withdrawn),
            _ => None,
        }
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bid domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: Uuid,
    pub event_id: Uuid,
    pub service_id: Uuid,
    pub vendor_id: Uuid,
    /// Offered amount in minor currency units
    pub amount: i64,
    pub message: String,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for placing a bid
#[derive(Debug, Clone)]
pub struct NewBid {
    pub event_id: Uuid,
    pub service_id: Uuid,
    pub vendor_id: Uuid,
    pub amount: i64,
    pub message: String,
}

/// Bid response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BidResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub service_id: Uuid,
    pub vendor_id: Uuid,
    #[schema(example = 120000)]
    pub amount: i64,
    pub message: String,
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id,
            event_id: bid.event_id,
            service_id: bid.service_id,
            vendor_id: bid.vendor_id,
            amount: bid.amount,
            message: bid.message,
            status: bid.status.to_string(),
            created_at: bid.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_status_round_trip() {
        for status in [
            BidStatus::Pending,
            BidStatus::Accepted,
            BidStatus::Rejected,
            BidStatus::Withdrawn,
        ] {
            assert_eq!(BidStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BidStatus::parse("open"), None);
    }
}
