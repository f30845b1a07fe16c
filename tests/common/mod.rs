//! Shared in-memory Unit of Work for service-level tests.
//!
//! Implements the repository traits over plain vectors so service
//! rules can be exercised without a database.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use eventra::domain::{
    Bid, BidStatus, Category, Event, EventFilter, EventStatus, EventUpdate, NewBid, NewEvent,
    NewReview, NewVendorService, RatingSummary, Review, User, UserFilter, UserRole, VendorService,
    VendorServiceUpdate,
};
use eventra::errors::{AppError, AppResult};
use eventra::infra::{
    BidRepository, CategoryRepository, EventRepository, ReviewRepository, UnitOfWork,
    UserRepository, VendorServiceRepository,
};
use eventra::types::PaginationParams;

/// Shared backing store
#[derive(Default)]
pub struct MemStore {
    pub users: Mutex<Vec<User>>,
    pub categories: Mutex<Vec<Category>>,
    pub events: Mutex<Vec<Event>>,
    pub services: Mutex<Vec<VendorService>>,
    pub bids: Mutex<Vec<Bid>>,
    pub reviews: Mutex<Vec<Review>>,
}

/// In-memory Unit of Work over a shared store
pub struct MemUow {
    store: Arc<MemStore>,
}

impl MemUow {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            store: Arc::new(MemStore::default()),
        })
    }

    pub fn store(&self) -> Arc<MemStore> {
        self.store.clone()
    }
}

// Fixture helpers

pub fn seed_category(store: &MemStore, name: &str, slug: &str) -> Category {
    let category = Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    store.categories.lock().unwrap().push(category.clone());
    category
}

pub fn seed_user(store: &MemStore, role: UserRole) -> User {
    let id = Uuid::new_v4();
    let user = User {
        id,
        email: format!("{}@example.com", id.simple()),
        password_hash: "hash".to_string(),
        name: "Fixture User".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    };
    store.users.lock().unwrap().push(user.clone());
    user
}

pub fn seed_event(store: &MemStore, organizer: &User, category: &Category, status: EventStatus) -> Event {
    let event = Event {
        id: Uuid::new_v4(),
        organizer_id: organizer.id,
        category_id: category.id,
        title: "Fixture Event".to_string(),
        description: "A fixture".to_string(),
        venue: "Hall".to_string(),
        city: "Rotterdam".to_string(),
        starts_at: Utc::now(),
        ends_at: None,
        price: 1000,
        capacity: 100,
        status,
        image_url: None,
        features: vec![],
        faqs: vec![],
        schedule: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    store.events.lock().unwrap().push(event.clone());
    event
}

pub fn seed_service(store: &MemStore, vendor: &User, category: &Category, active: bool) -> VendorService {
    let service = VendorService {
        id: Uuid::new_v4(),
        vendor_id: vendor.id,
        category_id: category.id,
        title: "Fixture Service".to_string(),
        description: "A fixture".to_string(),
        price_from: 100,
        price_to: 200,
        active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    store.services.lock().unwrap().push(service.clone());
    service
}

// Repository adapters

struct MemUsers {
    store: Arc<MemStore>,
}

#[async_trait]
impl UserRepository for MemUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && u.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        self.store.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        password_hash: Option<String>,
    ) -> AppResult<User> {
        let mut users = self.store.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or(AppError::NotFound)?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut users = self.store.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or(AppError::NotFound)?;
        user.deleted_at = Some(Utc::now());
        Ok(())
    }

    async fn restore(&self, id: Uuid) -> AppResult<User> {
        let mut users = self.store.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_some())
            .ok_or_else(|| AppError::validation("User is not deleted or does not exist"))?;
        user.deleted_at = None;
        Ok(user.clone())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<User>, u64)> {
        let users = self.store.users.lock().unwrap();
        let matching: Vec<User> = users
            .iter()
            .filter(|u| filter.include_deleted || u.deleted_at.is_none())
            .filter(|u| filter.role.map_or(true, |r| u.role == r))
            .filter(|u| {
                filter
                    .q
                    .as_ref()
                    .map_or(true, |q| u.email.contains(q) || u.name.contains(q))
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((data, total))
    }

    async fn count_active(&self) -> AppResult<u64> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.deleted_at.is_none())
            .count() as u64)
    }

    async fn count_by_role(&self, role: UserRole) -> AppResult<u64> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.deleted_at.is_none() && u.role == role)
            .count() as u64)
    }

    async fn list_recent(&self, limit: u64) -> AppResult<Vec<User>> {
        let users = self.store.users.lock().unwrap();
        let mut active: Vec<User> = users.iter().filter(|u| u.deleted_at.is_none()).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active.truncate(limit as usize);
        Ok(active)
    }
}

struct MemCategories {
    store: Arc<MemStore>,
}

#[async_trait]
impl CategoryRepository for MemCategories {
    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.store.categories.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self
            .store
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        Ok(self
            .store
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self
            .store
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn create(
        &self,
        name: String,
        slug: String,
        description: Option<String>,
    ) -> AppResult<Category> {
        let category = Category {
            id: Uuid::new_v4(),
            name,
            slug,
            description,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.store.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        slug: Option<String>,
        description: Option<Option<String>>,
    ) -> AppResult<Category> {
        let mut categories = self.store.categories.lock().unwrap();
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(name) = name {
            category.name = name;
        }
        if let Some(slug) = slug {
            category.slug = slug;
        }
        if let Some(description) = description {
            category.description = description;
        }
        category.updated_at = Utc::now();
        Ok(category.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut categories = self.store.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

struct MemEvents {
    store: Arc<MemStore>,
}

#[async_trait]
impl EventRepository for MemEvents {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        Ok(self
            .store
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create(&self, data: NewEvent) -> AppResult<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            organizer_id: data.organizer_id,
            category_id: data.category_id,
            title: data.title,
            description: data.description,
            venue: data.venue,
            city: data.city,
            starts_at: data.starts_at,
            ends_at: data.ends_at,
            price: data.price,
            capacity: data.capacity,
            status: EventStatus::Draft,
            image_url: data.image_url,
            features: data.features,
            faqs: data.faqs,
            schedule: data.schedule,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.store.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update(&self, id: Uuid, changes: EventUpdate) -> AppResult<Event> {
        let mut events = self.store.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(category_id) = changes.category_id {
            event.category_id = category_id;
        }
        if let Some(title) = changes.title {
            event.title = title;
        }
        if let Some(description) = changes.description {
            event.description = description;
        }
        if let Some(venue) = changes.venue {
            event.venue = venue;
        }
        if let Some(city) = changes.city {
            event.city = city;
        }
        if let Some(starts_at) = changes.starts_at {
            event.starts_at = starts_at;
        }
        if let Some(ends_at) = changes.ends_at {
            event.ends_at = ends_at;
        }
        if let Some(price) = changes.price {
            event.price = price;
        }
        if let Some(capacity) = changes.capacity {
            event.capacity = capacity;
        }
        if let Some(image_url) = changes.image_url {
            event.image_url = image_url;
        }
        if let Some(features) = changes.features {
            event.features = features;
        }
        if let Some(faqs) = changes.faqs {
            event.faqs = faqs;
        }
        if let Some(schedule) = changes.schedule {
            event.schedule = schedule;
        }
        event.updated_at = Utc::now();
        Ok(event.clone())
    }

    async fn set_status(&self, id: Uuid, status: EventStatus) -> AppResult<Event> {
        let mut events = self.store.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound)?;
        event.status = status;
        event.updated_at = Utc::now();
        Ok(event.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut events = self.store.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(AppError::NotFound);
        }
        // FK cascade
        self.store.bids.lock().unwrap().retain(|b| b.event_id != id);
        self.store.reviews.lock().unwrap().retain(|r| r.event_id != id);
        Ok(())
    }

    async fn list(
        &self,
        filter: &EventFilter,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Event>, u64)> {
        let events = self.store.events.lock().unwrap();
        let matching: Vec<Event> = events
            .iter()
            .filter(|e| filter.status.map_or(true, |s| e.status == s))
            .filter(|e| filter.organizer_id.map_or(true, |o| e.organizer_id == o))
            .filter(|e| filter.category_id.map_or(true, |c| e.category_id == c))
            .filter(|e| {
                filter
                    .q
                    .as_ref()
                    .map_or(true, |q| e.title.contains(q) || e.description.contains(q))
            })
            .filter(|e| filter.city.as_ref().map_or(true, |c| &e.city == c))
            .filter(|e| filter.from.map_or(true, |f| e.starts_at >= f))
            .filter(|e| filter.to.map_or(true, |t| e.starts_at <= t))
            .filter(|e| filter.max_price.map_or(true, |p| e.price <= p))
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((data, total))
    }

    async fn list_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<Event>> {
        Ok(self
            .store
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.organizer_id == organizer_id)
            .cloned()
            .collect())
    }

    async fn count_by_status(&self, status: EventStatus) -> AppResult<u64> {
        Ok(self
            .store
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.status == status)
            .count() as u64)
    }

    async fn count_by_category(&self, category_id: Uuid) -> AppResult<u64> {
        Ok(self
            .store
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.category_id == category_id)
            .count() as u64)
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(self.store.events.lock().unwrap().len() as u64)
    }
}

struct MemServices {
    store: Arc<MemStore>,
}

#[async_trait]
impl VendorServiceRepository for MemServices {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VendorService>> {
        Ok(self
            .store
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> AppResult<Vec<VendorService>> {
        Ok(self
            .store
            .services
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: NewVendorService) -> AppResult<VendorService> {
        let service = VendorService {
            id: Uuid::new_v4(),
            vendor_id: data.vendor_id,
            category_id: data.category_id,
            title: data.title,
            description: data.description,
            price_from: data.price_from,
            price_to: data.price_to,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.store.services.lock().unwrap().push(service.clone());
        Ok(service)
    }

    async fn update(&self, id: Uuid, changes: VendorServiceUpdate) -> AppResult<VendorService> {
        let mut services = self.store.services.lock().unwrap();
        let service = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(category_id) = changes.category_id {
            service.category_id = category_id;
        }
        if let Some(title) = changes.title {
            service.title = title;
        }
        if let Some(description) = changes.description {
            service.description = description;
        }
        if let Some(price_from) = changes.price_from {
            service.price_from = price_from;
        }
        if let Some(price_to) = changes.price_to {
            service.price_to = price_to;
        }
        if let Some(active) = changes.active {
            service.active = active;
        }
        service.updated_at = Utc::now();
        Ok(service.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut services = self.store.services.lock().unwrap();
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count_by_vendor(&self, vendor_id: Uuid) -> AppResult<u64> {
        Ok(self
            .store
            .services
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.vendor_id == vendor_id)
            .count() as u64)
    }
}

struct MemBids {
    store: Arc<MemStore>,
}

#[async_trait]
impl BidRepository for MemBids {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bid>> {
        Ok(self
            .store
            .bids
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create(&self, data: NewBid) -> AppResult<Bid> {
        let bid = Bid {
            id: Uuid::new_v4(),
            event_id: data.event_id,
            service_id: data.service_id,
            vendor_id: data.vendor_id,
            amount: data.amount,
            message: data.message,
            status: BidStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.store.bids.lock().unwrap().push(bid.clone());
        Ok(bid)
    }

    async fn list_by_vendor(
        &self,
        vendor_id: Uuid,
        status: Option<BidStatus>,
    ) -> AppResult<Vec<Bid>> {
        Ok(self
            .store
            .bids
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.vendor_id == vendor_id)
            .filter(|b| status.map_or(true, |s| b.status == s))
            .cloned()
            .collect())
    }

    async fn list_recent_by_vendor(&self, vendor_id: Uuid, limit: u64) -> AppResult<Vec<Bid>> {
        let bids = self.store.bids.lock().unwrap();
        let mut own: Vec<Bid> = bids.iter().filter(|b| b.vendor_id == vendor_id).cloned().collect();
        own.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        own.truncate(limit as usize);
        Ok(own)
    }

    async fn list_by_event(&self, event_id: Uuid) -> AppResult<Vec<Bid>> {
        Ok(self
            .store
            .bids
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: Uuid, status: BidStatus) -> AppResult<Bid> {
        let mut bids = self.store.bids.lock().unwrap();
        let bid = bids
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        bid.status = status;
        bid.updated_at = Utc::now();
        Ok(bid.clone())
    }

    async fn find_pending_for_service(
        &self,
        event_id: Uuid,
        service_id: Uuid,
    ) -> AppResult<Option<Bid>> {
        Ok(self
            .store
            .bids
            .lock()
            .unwrap()
            .iter()
            .find(|b| {
                b.event_id == event_id
                    && b.service_id == service_id
                    && b.status == BidStatus::Pending
            })
            .cloned())
    }

    async fn count_by_vendor_and_status(
        &self,
        vendor_id: Uuid,
        status: BidStatus,
    ) -> AppResult<u64> {
        Ok(self
            .store
            .bids
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.vendor_id == vendor_id && b.status == status)
            .count() as u64)
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(self.store.bids.lock().unwrap().len() as u64)
    }
}

struct MemReviews {
    store: Arc<MemStore>,
}

#[async_trait]
impl ReviewRepository for MemReviews {
    async fn create(&self, data: NewReview) -> AppResult<Review> {
        let review = Review {
            id: Uuid::new_v4(),
            event_id: data.event_id,
            author_id: data.author_id,
            rating: data.rating,
            comment: data.comment,
            created_at: Utc::now(),
        };
        self.store.reviews.lock().unwrap().push(review.clone());
        Ok(review)
    }

    async fn list_by_event(
        &self,
        event_id: Uuid,
        page: &PaginationParams,
    ) -> AppResult<(Vec<Review>, u64)> {
        let reviews = self.store.reviews.lock().unwrap();
        let matching: Vec<Review> = reviews
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((data, total))
    }

    async fn list_by_author(&self, author_id: Uuid) -> AppResult<Vec<Review>> {
        Ok(self
            .store
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn find_by_event_and_author(
        &self,
        event_id: Uuid,
        author_id: Uuid,
    ) -> AppResult<Option<Review>> {
        Ok(self
            .store
            .reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.event_id == event_id && r.author_id == author_id)
            .cloned())
    }

    async fn stats_for_event(&self, event_id: Uuid) -> AppResult<RatingSummary> {
        let reviews = self.store.reviews.lock().unwrap();
        let ratings: Vec<i16> = reviews
            .iter()
            .filter(|r| r.event_id == event_id)
            .map(|r| r.rating)
            .collect();

        let count = ratings.len() as u64;
        let average = if count == 0 {
            0.0
        } else {
            ratings.iter().map(|r| *r as f64).sum::<f64>() / count as f64
        };
        Ok(RatingSummary { average, count })
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(self.store.reviews.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl UnitOfWork for MemUow {
    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::new(MemUsers {
            store: self.store.clone(),
        })
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(MemCategories {
            store: self.store.clone(),
        })
    }

    fn events(&self) -> Arc<dyn EventRepository> {
        Arc::new(MemEvents {
            store: self.store.clone(),
        })
    }

    fn services(&self) -> Arc<dyn VendorServiceRepository> {
        Arc::new(MemServices {
            store: self.store.clone(),
        })
    }

    fn bids(&self) -> Arc<dyn BidRepository> {
        Arc::new(MemBids {
            store: self.store.clone(),
        })
    }

    fn reviews(&self) -> Arc<dyn ReviewRepository> {
        Arc::new(MemReviews {
            store: self.store.clone(),
        })
    }

    async fn award_bid(&self, event_id: Uuid, bid_id: Uuid) -> AppResult<Bid> {
        let mut bids = self.store.bids.lock().unwrap();

        let chosen = bids
            .iter()
            .find(|b| b.id == bid_id && b.event_id == event_id)
            .cloned()
            .ok_or(AppError::NotFound)?;

        if chosen.status != BidStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending bids can be accepted".to_string(),
            ));
        }

        for bid in bids.iter_mut() {
            if bid.event_id == event_id && bid.status == BidStatus::Pending {
                bid.status = if bid.id == bid_id {
                    BidStatus::Accepted
                } else {
                    BidStatus::Rejected
                };
                bid.updated_at = Utc::now();
            }
        }

        Ok(bids.iter().find(|b| b.id == bid_id).cloned().unwrap())
    }
}
