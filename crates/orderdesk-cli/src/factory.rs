//! Composition root
//!
//! Builds the in-memory repositories, loads seed data into them and wires
//! use cases into controllers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use orderdesk_application::{
    CreateOrderUseCase, GetUserOrdersUseCase, GetUsersUseCase, IdGenerator, RegisterUserUseCase,
    UuidIdGenerator,
};
use orderdesk_config::SeedPolicy;
use orderdesk_domain::errors::DomainResult;
use orderdesk_domain::repositories::{ItemRepository, OrderRepository, UserRepository};
use orderdesk_persistence::{InMemoryItemRepository, InMemoryOrderRepository, InMemoryUserRepository};

use crate::controllers::{OrderController, UserController};
use crate::seed::SeedData;

/// Records loaded and skipped for one entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub loaded: usize,
    pub skipped: usize,
}

/// Seeding result per entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: LoadOutcome,
    pub items: LoadOutcome,
    pub orders: LoadOutcome,
}

impl SeedReport {
    pub fn total_skipped(&self) -> usize {
        self.users.skipped + self.items.skipped + self.orders.skipped
    }
}

#[async_trait]
trait SeedTarget: Send + Sync {
    async fn load(&self, records: &[Value]) -> DomainResult<usize>;

    async fn load_one(&self, record: &Value) -> DomainResult<()>;
}

#[async_trait]
impl SeedTarget for InMemoryUserRepository {
    async fn load(&self, records: &[Value]) -> DomainResult<usize> {
        self.initialize_with_db_data(records).await
    }

    async fn load_one(&self, record: &Value) -> DomainResult<()> {
        self.initialize_record(record).await
    }
}

#[async_trait]
impl SeedTarget for InMemoryItemRepository {
    async fn load(&self, records: &[Value]) -> DomainResult<usize> {
        self.initialize_with_db_data(records).await
    }

    async fn load_one(&self, record: &Value) -> DomainResult<()> {
        self.initialize_record(record).await
    }
}

#[async_trait]
impl SeedTarget for InMemoryOrderRepository {
    async fn load(&self, records: &[Value]) -> DomainResult<usize> {
        self.initialize_with_db_data(records).await
    }

    async fn load_one(&self, record: &Value) -> DomainResult<()> {
        self.initialize_record(record).await
    }
}

async fn load_records(
    entity_type: &'static str,
    target: &dyn SeedTarget,
    records: &[Value],
    policy: SeedPolicy,
) -> DomainResult<LoadOutcome> {
    match policy {
        SeedPolicy::Strict => {
            let loaded = target.load(records).await?;
            Ok(LoadOutcome { loaded, skipped: 0 })
        }
        SeedPolicy::BestEffort => {
            let mut outcome = LoadOutcome::default();
            for (index, record) in records.iter().enumerate() {
                match target.load_one(record).await {
                    Ok(()) => outcome.loaded += 1,
                    Err(e) => {
                        warn!(entity = entity_type, index, error = %e, "Skipping invalid seed record");
                        outcome.skipped += 1;
                    }
                }
            }
            Ok(outcome)
        }
    }
}

/// Owns the repositories and hands out controllers over them
pub struct ApplicationFactory {
    user_repository: Arc<InMemoryUserRepository>,
    item_repository: Arc<InMemoryItemRepository>,
    order_repository: Arc<InMemoryOrderRepository>,
    id_generator: Arc<dyn IdGenerator>,
    seed_report: SeedReport,
}

impl ApplicationFactory {
    /// Build empty repositories and load `seed` into them
    ///
    /// Users are loaded first, then items, then orders. Under
    /// [`SeedPolicy::Strict`] the first invalid record is returned as an
    /// error; records before it stay loaded.
    pub async fn new(seed: &SeedData, policy: SeedPolicy) -> DomainResult<Self> {
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let item_repository = Arc::new(InMemoryItemRepository::new());
        let order_repository = Arc::new(InMemoryOrderRepository::new());

        let seed_report = SeedReport {
            users: load_records("user", user_repository.as_ref(), &seed.users, policy).await?,
            items: load_records("item", item_repository.as_ref(), &seed.items, policy).await?,
            orders: load_records("order", order_repository.as_ref(), &seed.orders, policy).await?,
        };

        info!(
            users = seed_report.users.loaded,
            items = seed_report.items.loaded,
            orders = seed_report.orders.loaded,
            skipped = seed_report.total_skipped(),
            ?policy,
            "Repositories seeded"
        );

        Ok(Self {
            user_repository,
            item_repository,
            order_repository,
            id_generator: Arc::new(UuidIdGenerator),
            seed_report,
        })
    }

    /// Use `id_generator` for entities created through the controllers
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn seed_report(&self) -> SeedReport {
        self.seed_report
    }

    pub fn create_user_controller(&self) -> UserController {
        debug!("Creating user controller");
        let users: Arc<dyn UserRepository> = self.user_repository.clone();
        UserController::new(
            RegisterUserUseCase::with_id_generator(users.clone(), self.id_generator.clone()),
            GetUsersUseCase::new(users),
        )
    }

    pub fn create_order_controller(&self) -> OrderController {
        debug!("Creating order controller");
        let orders: Arc<dyn OrderRepository> = self.order_repository.clone();
        let items: Arc<dyn ItemRepository> = self.item_repository.clone();
        let users: Arc<dyn UserRepository> = self.user_repository.clone();
        OrderController::new(
            CreateOrderUseCase::with_id_generator(
                orders.clone(),
                items,
                users,
                self.id_generator.clone(),
            ),
            GetUserOrdersUseCase::new(orders),
        )
    }

    pub fn user_repository(&self) -> Arc<InMemoryUserRepository> {
        self.user_repository.clone()
    }

    pub fn item_repository(&self) -> Arc<InMemoryItemRepository> {
        self.item_repository.clone()
    }

    pub fn order_repository(&self) -> Arc<InMemoryOrderRepository> {
        self.order_repository.clone()
    }
}
