//! Event lifecycle and review rules over the in-memory Unit of Work.

mod common;

use chrono::Utc;
use uuid::Uuid;

use common::{seed_category, seed_event, seed_user, MemUow};
use eventra::domain::{EventFilter, EventStatus, EventUpdate, NewEvent, NewReview, UserRole};
use eventra::errors::AppError;
use eventra::services::{EventManager, EventService};
use eventra::types::PaginationParams;

fn new_event(organizer: Uuid, category: Uuid) -> NewEvent {
    NewEvent {
        organizer_id: organizer,
        category_id: category,
        title: "Jazz Night".to_string(),
        description: "An evening of jazz".to_string(),
        venue: "Riverside Hall".to_string(),
        city: "Rotterdam".to_string(),
        starts_at: Utc::now(),
        ends_at: None,
        price: 2500,
        capacity: 150,
        image_url: None,
        features: vec!["Free parking".to_string()],
        faqs: vec![],
        schedule: vec![],
    }
}

#[tokio::test]
async fn test_create_event_starts_as_draft() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = service
        .create_event(new_event(organizer.id, category.id))
        .await
        .unwrap();

    assert_eq!(event.status, EventStatus::Draft);
    assert_eq!(event.organizer_id, organizer.id);
}

#[tokio::test]
async fn test_create_event_rejects_unknown_category() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let service = EventManager::new(uow.clone());

    let result = service
        .create_event(new_event(organizer.id, Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_create_event_rejects_bad_bounds() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let mut negative_price = new_event(organizer.id, category.id);
    negative_price.price = -1;
    assert!(service.create_event(negative_price).await.is_err());

    let mut zero_capacity = new_event(organizer.id, category.id);
    zero_capacity.capacity = 0;
    assert!(service.create_event(zero_capacity).await.is_err());

    let mut ends_before_start = new_event(organizer.id, category.id);
    ends_before_start.ends_at = Some(ends_before_start.starts_at - chrono::Duration::hours(1));
    assert!(service.create_event(ends_before_start).await.is_err());
}

#[tokio::test]
async fn test_submit_only_from_draft() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Draft);
    let submitted = service.submit_event(event.id, organizer.id).await.unwrap();
    assert_eq!(submitted.status, EventStatus::Pending);

    // Submitting again is a state error
    let again = service.submit_event(event.id, organizer.id).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_submit_requires_ownership() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let stranger = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Draft);
    let result = service.submit_event(event.id, stranger.id).await;

    assert!(matches!(result, Err(AppError::Forbidden)));
}

#[tokio::test]
async fn test_moderation_only_from_pending() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let pending = seed_event(&uow.store(), &organizer, &category, EventStatus::Pending);
    let published = service.approve_event(pending.id).await.unwrap();
    assert_eq!(published.status, EventStatus::Published);

    // Already published: neither approve nor reject applies
    assert!(service.approve_event(pending.id).await.is_err());
    assert!(service.reject_event(pending.id).await.is_err());

    let other = seed_event(&uow.store(), &organizer, &category, EventStatus::Pending);
    let rejected = service.reject_event(other.id).await.unwrap();
    assert_eq!(rejected.status, EventStatus::Rejected);
}

#[tokio::test]
async fn test_non_admin_edit_of_published_demotes_to_pending() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);

    let changes = EventUpdate {
        title: Some("Updated Title".to_string()),
        ..Default::default()
    };
    let updated = service
        .update_event(event.id, organizer.id, false, changes)
        .await
        .unwrap();

    assert_eq!(updated.status, EventStatus::Pending);
    assert_eq!(updated.title, "Updated Title");
}

#[tokio::test]
async fn test_admin_edit_keeps_published_status() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let admin = seed_user(&uow.store(), UserRole::Admin);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);

    let changes = EventUpdate {
        title: Some("Admin Fix".to_string()),
        ..Default::default()
    };
    let updated = service
        .update_event(event.id, admin.id, true, changes)
        .await
        .unwrap();

    assert_eq!(updated.status, EventStatus::Published);
}

#[tokio::test]
async fn test_get_event_visibility() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let stranger = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let draft = seed_event(&uow.store(), &organizer, &category, EventStatus::Draft);

    // Anonymous and strangers see NotFound, not Forbidden
    assert!(matches!(
        service.get_event(draft.id, None).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.get_event(draft.id, Some((stranger.id, false))).await,
        Err(AppError::NotFound)
    ));

    // Organizer and admin see the draft
    assert!(service
        .get_event(draft.id, Some((organizer.id, false)))
        .await
        .is_ok());
    assert!(service
        .get_event(draft.id, Some((stranger.id, true)))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_public_listing_filters() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let music = seed_category(&uow.store(), "Live Music", "live-music");
    let weddings = seed_category(&uow.store(), "Weddings", "weddings");
    let service = EventManager::new(uow.clone());

    seed_event(&uow.store(), &organizer, &music, EventStatus::Published);
    seed_event(&uow.store(), &organizer, &music, EventStatus::Draft);
    seed_event(&uow.store(), &organizer, &weddings, EventStatus::Published);

    // Only published events surface
    let (all, total) = service
        .list_public(None, EventFilter::default(), PaginationParams::default())
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert!(all.iter().all(|e| e.status == EventStatus::Published));

    // Category slug narrows the listing
    let (music_only, music_total) = service
        .list_public(
            Some("live-music".to_string()),
            EventFilter::default(),
            PaginationParams::default(),
        )
        .await
        .unwrap();
    assert_eq!(music_total, 1);
    assert_eq!(music_only[0].category_id, music.id);

    // Unknown slug matches nothing
    let (none, none_total) = service
        .list_public(
            Some("does-not-exist".to_string()),
            EventFilter::default(),
            PaginationParams::default(),
        )
        .await
        .unwrap();
    assert_eq!(none_total, 0);
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_review_rules() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let guest = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);

    // Rating bounds
    let out_of_range = service
        .add_review(NewReview {
            event_id: event.id,
            author_id: guest.id,
            rating: 6,
            comment: "too good".to_string(),
        })
        .await;
    assert!(matches!(out_of_range, Err(AppError::Validation(_))));

    // Organizer cannot review own event
    let own = service
        .add_review(NewReview {
            event_id: event.id,
            author_id: organizer.id,
            rating: 5,
            comment: "self praise".to_string(),
        })
        .await;
    assert!(matches!(own, Err(AppError::Conflict(_))));

    // First review succeeds, second conflicts
    let review = service
        .add_review(NewReview {
            event_id: event.id,
            author_id: guest.id,
            rating: 4,
            comment: "great".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(review.rating, 4);

    let duplicate = service
        .add_review(NewReview {
            event_id: event.id,
            author_id: guest.id,
            rating: 5,
            comment: "still great".to_string(),
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    // The rating summary reflects the accepted review
    let (_, rating) = service
        .get_event(event.id, None)
        .await
        .unwrap();
    assert_eq!(rating.count, 1);
    assert!((rating.average - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_reviews_only_on_published_events() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let guest = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let draft = seed_event(&uow.store(), &organizer, &category, EventStatus::Draft);

    let result = service
        .add_review(NewReview {
            event_id: draft.id,
            author_id: guest.id,
            rating: 3,
            comment: "early".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_delete_event_cascades() {
    let uow = MemUow::new();
    let organizer = seed_user(&uow.store(), UserRole::User);
    let category = seed_category(&uow.store(), "Live Music", "live-music");
    let service = EventManager::new(uow.clone());

    let event = seed_event(&uow.store(), &organizer, &category, EventStatus::Published);

    // A stranger cannot delete
    let stranger = seed_user(&uow.store(), UserRole::User);
    assert!(matches!(
        service.delete_event(event.id, stranger.id, false).await,
        Err(AppError::Forbidden)
    ));

    service
        .delete_event(event.id, organizer.id, false)
        .await
        .unwrap();

    assert!(matches!(
        service.get_event(event.id, Some((organizer.id, false))).await,
        Err(AppError::NotFound)
    ));
}
