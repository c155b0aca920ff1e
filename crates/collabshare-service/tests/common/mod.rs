//! Shared test fixtures and recording fakes for service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use collabshare_core::AppError;
use collabshare_core::AppResult;
use collabshare_core::events::DomainEvent;
use collabshare_core::traits::{IdGenerator, ShareEventSink};
use collabshare_core::types::{ShareId, UserId};
use collabshare_entity::collaborator::Collaborator;
use collabshare_entity::notification::Notification;
use collabshare_entity::permission::ShareRole;
use collabshare_entity::share::{ShareEntry, ShareType};
use collabshare_service::context::RequestContext;
use collabshare_service::ports::{NotificationSink, SharePersistenceGateway};
use collabshare_service::share::ShareUpdateService;

/// A well-known test account.
pub struct TestUser {
    pub handle: &'static str,
    pub display_name: &'static str,
    pub email: &'static str,
}

/// Fixture table of test user accounts.
pub const TEST_USERS: [TestUser; 5] = [
    TestUser {
        handle: "admin",
        display_name: "admin",
        email: "admin@example.org",
    },
    TestUser {
        handle: "alice",
        display_name: "Alice Hansen",
        email: "alice@example.org",
    },
    TestUser {
        handle: "brian",
        display_name: "Brian Murphy",
        email: "brian@example.org",
    },
    TestUser {
        handle: "carol",
        display_name: "Carol King",
        email: "carol@example.org",
    },
    TestUser {
        handle: "david",
        display_name: "David Lopez",
        email: "david@example.org",
    },
];

/// Look up a fixture user by handle.
pub fn test_user(handle: &str) -> &'static TestUser {
    TEST_USERS
        .iter()
        .find(|user| user.handle == handle)
        .unwrap_or_else(|| panic!("unknown fixture user '{handle}'"))
}

/// Build a collaborator identity from the fixture table.
pub fn collaborator(handle: &str) -> Collaborator {
    let user = test_user(handle);
    Collaborator::new(user.handle, user.display_name).with_additional_info(user.email)
}

/// Build a share entry for Brian's viewer share on Marie's resource.
pub fn entry(share_type: ShareType) -> ShareEntry {
    ShareEntry {
        id: ShareId::new(),
        share_type,
        collaborator: collaborator("brian"),
        owner: collaborator("alice"),
        role: ShareRole::Viewer,
        permissions: ShareRole::Viewer.canonical_permissions().to_vec(),
        expires: None,
    }
}

/// Build a request context for the admin fixture user.
pub fn ctx() -> RequestContext {
    RequestContext::new(UserId::new(), "admin")
}

/// Gateway fake recording every call, optionally failing all of them.
#[derive(Default)]
pub struct RecordingGateway {
    pub fail: bool,
    pub share_calls: Mutex<Vec<ShareEntry>>,
    pub space_calls: Mutex<Vec<ShareEntry>>,
}

impl RecordingGateway {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    fn outcome(&self) -> AppResult<()> {
        if self.fail {
            Err(AppError::persistence("backend rejected the update"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SharePersistenceGateway for RecordingGateway {
    async fn update_share(&self, entry: &ShareEntry) -> AppResult<()> {
        self.share_calls.lock().unwrap().push(entry.clone());
        self.outcome()
    }

    async fn update_space_member(&self, entry: &ShareEntry) -> AppResult<()> {
        self.space_calls.lock().unwrap().push(entry.clone());
        self.outcome()
    }
}

/// Notification sink fake collecting everything shown.
#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl NotificationSink for RecordingNotifier {
    fn show(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

/// Event sink fake collecting published events.
#[derive(Default)]
pub struct CollectingEvents {
    pub events: Mutex<Vec<DomainEvent>>,
}

impl CollectingEvents {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Payloads of all collected events, in publication order.
    pub fn payloads(&self) -> Vec<collabshare_core::events::ShareEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.payload.clone())
            .collect()
    }
}

impl ShareEventSink for CollectingEvents {
    fn publish(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Deterministic ID generator returning a fixed UUID.
pub struct FixedIds(pub Uuid);

impl FixedIds {
    pub fn nil() -> Arc<Self> {
        Arc::new(Self(Uuid::nil()))
    }
}

impl IdGenerator for FixedIds {
    fn next(&self) -> Uuid {
        self.0
    }
}

/// Wire a service around the given fakes.
pub fn service(
    gateway: Arc<RecordingGateway>,
    notifier: Arc<RecordingNotifier>,
    events: Arc<CollectingEvents>,
) -> ShareUpdateService {
    ShareUpdateService::new(gateway, notifier, events, FixedIds::nil())
}
