//! Vendor marketplace tests: offerings, bidding and awarding.

mod common;

use common::{seed_category, seed_event, seed_service, seed_user, MemUow};
use eventra::domain::{
    BidStatus, EventStatus, NewBid, NewVendorService, UserRole, VendorServiceUpdate,
};
use eventra::errors::AppError;
use eventra::services::{
    AdminManager, AdminService, EventManager, EventService, MarketplaceManager, MarketplaceService,
};

#[tokio::test]
async fn test_create_service_validates_price_range() {
    let uow = MemUow::new();
    let vendor = seed_user(&uow.store(), UserRole::Vendor);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());

    let inverted = marketplace
        .create_service(NewVendorService {
            vendor_id: vendor.id,
            category_id: category.id,
            title: "Catering".to_string(),
            description: "Full service".to_string(),
            price_from: 500,
            price_to: 100,
        })
        .await;
    assert!(matches!(inverted, Err(AppError::Validation(_))));

    let service = marketplace
        .create_service(NewVendorService {
            vendor_id: vendor.id,
            category_id: category.id,
            title: "Catering".to_string(),
            description: "Full service".to_string(),
            price_from: 100,
            price_to: 500,
        })
        .await
        .unwrap();
    assert!(service.active);
}

#[tokio::test]
async fn test_update_service_requires_ownership() {
    let uow = MemUow::new();
    let vendor = seed_user(&uow.store(), UserRole::Vendor);
    let other = seed_user(&uow.store(), UserRole::Vendor);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());

    let service = seed_service(&uow.store(), &vendor, &category, true);

    let changes = VendorServiceUpdate {
        title: Some("Taken over".to_string()),
        ..Default::default()
    };
    let result = marketplace
        .update_service(service.id, other.id, false, changes)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden)));
}

#[tokio::test]
async fn test_place_bid_guards() {
    let uow = MemUow::new();
    let vendor = seed_user(&uow.store(), UserRole::Vendor);
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());

    let service = seed_service(&uow.store(), &vendor, &category, true);
    let published = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);
    let draft = seed_event(&uow.store(), &organizer, &category, EventStatus::Draft);

    // Non-positive amount
    let zero = marketplace
        .place_bid(NewBid {
            event_id: published.id,
            service_id: service.id,
            vendor_id: vendor.id,
            amount: 0,
            message: "free".to_string(),
        })
        .await;
    assert!(matches!(zero, Err(AppError::Validation(_))));

    // Someone else's service
    let foreign = marketplace
        .place_bid(NewBid {
            event_id: published.id,
            service_id: service.id,
            vendor_id: organizer.id,
            amount: 100,
            message: "not mine".to_string(),
        })
        .await;
    assert!(matches!(foreign, Err(AppError::Forbidden)));

    // Unpublished event
    let unpublished = marketplace
        .place_bid(NewBid {
            event_id: draft.id,
            service_id: service.id,
            vendor_id: vendor.id,
            amount: 100,
            message: "early".to_string(),
        })
        .await;
    assert!(matches!(unpublished, Err(AppError::BadRequest(_))));

    // Inactive service
    let inactive = seed_service(&uow.store(), &vendor, &category, false);
    let with_inactive = marketplace
        .place_bid(NewBid {
            event_id: published.id,
            service_id: inactive.id,
            vendor_id: vendor.id,
            amount: 100,
            message: "dormant".to_string(),
        })
        .await;
    assert!(matches!(with_inactive, Err(AppError::BadRequest(_))));

    // Valid bid, then a duplicate pending bid for the same pair
    marketplace
        .place_bid(NewBid {
            event_id: published.id,
            service_id: service.id,
            vendor_id: vendor.id,
            amount: 100,
            message: "offer".to_string(),
        })
        .await
        .unwrap();

    let duplicate = marketplace
        .place_bid(NewBid {
            event_id: published.id,
            service_id: service.id,
            vendor_id: vendor.id,
            amount: 120,
            message: "better offer".to_string(),
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_cannot_bid_on_own_event() {
    let uow = MemUow::new();
    let vendor = seed_user(&uow.store(), UserRole::Vendor);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());

    let service = seed_service(&uow.store(), &vendor, &category, true);
    let own_event = seed_event(&uow.store(), &vendor, &category, EventStatus::Published);

    let result = marketplace
        .place_bid(NewBid {
            event_id: own_event.id,
            service_id: service.id,
            vendor_id: vendor.id,
            amount: 100,
            message: "self deal".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_withdraw_only_own_pending_bid() {
    let uow = MemUow::new();
    let vendor = seed_user(&uow.store(), UserRole::Vendor);
    let other = seed_user(&uow.store(), UserRole::Vendor);
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());

    let service = seed_service(&uow.store(), &vendor, &category, true);
    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);

    let bid = marketplace
        .place_bid(NewBid {
            event_id: event.id,
            service_id: service.id,
            vendor_id: vendor.id,
            amount: 100,
            message: "offer".to_string(),
        })
        .await
        .unwrap();

    // Someone else's bid
    assert!(matches!(
        marketplace.withdraw_bid(bid.id, other.id).await,
        Err(AppError::Forbidden)
    ));

    let withdrawn = marketplace.withdraw_bid(bid.id, vendor.id).await.unwrap();
    assert_eq!(withdrawn.status, BidStatus::Withdrawn);

    // Already withdrawn
    assert!(matches!(
        marketplace.withdraw_bid(bid.id, vendor.id).await,
        Err(AppError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_accept_bid_rejects_competitors_atomically() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let vendor_a = seed_user(&uow.store(), UserRole::Vendor);
    let vendor_b = seed_user(&uow.store(), UserRole::Vendor);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());
    let events = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);
    let service_a = seed_service(&uow.store(), &vendor_a, &category, true);
    let service_b = seed_service(&uow.store(), &vendor_b, &category, true);

    let bid_a = marketplace
        .place_bid(NewBid {
            event_id: event.id,
            service_id: service_a.id,
            vendor_id: vendor_a.id,
            amount: 100,
            message: "offer a".to_string(),
        })
        .await
        .unwrap();
    let bid_b = marketplace
        .place_bid(NewBid {
            event_id: event.id,
            service_id: service_b.id,
            vendor_id: vendor_b.id,
            amount: 120,
            message: "offer b".to_string(),
        })
        .await
        .unwrap();

    // Only the organizer (or an admin) may award
    assert!(matches!(
        events.accept_bid(event.id, bid_a.id, vendor_a.id, false).await,
        Err(AppError::Forbidden)
    ));

    let accepted = events
        .accept_bid(event.id, bid_a.id, organizer.id, false)
        .await
        .unwrap();
    assert_eq!(accepted.status, BidStatus::Accepted);

    // The competing bid was rejected in the same operation
    let all = events
        .list_event_bids(event.id, organizer.id, false)
        .await
        .unwrap();
    let b = all.iter().find(|b| b.id == bid_b.id).unwrap();
    assert_eq!(b.status, BidStatus::Rejected);

    // A decided bid cannot be accepted again
    assert!(matches!(
        events.accept_bid(event.id, bid_b.id, organizer.id, false).await,
        Err(AppError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_vendor_dashboard_counts() {
    let uow = MemUow::new();
    let vendor = seed_user(&uow.store(), UserRole::Vendor);
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Catering", "catering");
    let marketplace = MarketplaceManager::new(uow.clone());
    let events = EventManager::new(uow.clone());

    let service_1 = seed_service(&uow.store(), &vendor, &category, true);
    let service_2 = seed_service(&uow.store(), &vendor, &category, true);
    let event_1 = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);
    let event_2 = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);

    let bid_1 = marketplace
        .place_bid(NewBid {
            event_id: event_1.id,
            service_id: service_1.id,
            vendor_id: vendor.id,
            amount: 100,
            message: "one".to_string(),
        })
        .await
        .unwrap();
    marketplace
        .place_bid(NewBid {
            event_id: event_2.id,
            service_id: service_2.id,
            vendor_id: vendor.id,
            amount: 150,
            message: "two".to_string(),
        })
        .await
        .unwrap();

    events
        .accept_bid(event_1.id, bid_1.id, organizer.id, false)
        .await
        .unwrap();

    let dashboard = marketplace.dashboard(vendor.id).await.unwrap();
    assert_eq!(dashboard.services, 2);
    assert_eq!(dashboard.accepted_bids, 1);
    assert_eq!(dashboard.pending_bids, 1);
    assert_eq!(dashboard.rejected_bids, 0);
    assert_eq!(dashboard.recent_bids.len(), 2);
}

#[tokio::test]
async fn test_admin_dashboard_totals() {
    let uow = MemUow::new();
    let admin_service = AdminManager::new(uow.clone());

    let organizer = seed_user(&uow.store(), UserRole::User);
    seed_user(&uow.store(), UserRole::Vendor);
    seed_user(&uow.store(), UserRole::Vendor);
    let category = seed_category(&uow.store(), "Catering", "catering");
    seed_event(&uow.store(), &organizer, &category, EventStatus::Published);
    seed_event(&uow.store(), &organizer, &category, EventStatus::Pending);
    seed_event(&uow.store(), &organizer, &category, EventStatus::Pending);

    let dashboard = admin_service.dashboard().await.unwrap();
    assert_eq!(dashboard.total_users, 3);
    assert_eq!(dashboard.total_vendors, 2);
    assert_eq!(dashboard.events.published, 1);
    assert_eq!(dashboard.events.pending, 2);
    assert_eq!(dashboard.events.draft, 0);
    assert_eq!(dashboard.total_bids, 0);
    assert_eq!(dashboard.recent_users.len(), 3);
}
