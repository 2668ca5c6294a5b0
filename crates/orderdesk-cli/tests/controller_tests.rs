//! Controller behaviour over a freshly seeded factory

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use orderdesk_application::IdGenerator;
use orderdesk_cli::{ApplicationFactory, SeedData};
use orderdesk_config::SeedPolicy;
use orderdesk_domain::repositories::Repository;

struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("new-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

async fn demo_factory() -> ApplicationFactory {
    ApplicationFactory::new(&SeedData::demo(), SeedPolicy::Strict)
        .await
        .unwrap()
        .with_id_generator(Arc::new(SequentialIds(AtomicUsize::new(0))))
}

#[tokio::test]
async fn test_get_users_returns_seeded_users_in_order() {
    let factory = demo_factory().await;
    let response = factory.create_user_controller().get_users().await;

    assert!(response.success);
    let users = response.data.unwrap();
    let ids: Vec<&str> = users.iter().map(|u| u.id()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_register_then_duplicate() {
    let factory = demo_factory().await;
    let users = factory.create_user_controller();

    let created = users
        .register("Bob Smith", "bob.smith@example.com", "password123")
        .await;
    assert!(created.success);
    assert_eq!(created.data.as_ref().unwrap().id(), "new-1");

    let duplicate = users
        .register("Bobby", "bob.smith@example.com", "other")
        .await;
    assert!(!duplicate.success);
    assert_eq!(
        duplicate.error.as_deref(),
        Some("email is already registered: bob.smith@example.com")
    );
    assert_eq!(factory.user_repository().count(), 3);
}

#[tokio::test]
async fn test_register_with_invalid_email_is_failure_envelope() {
    let factory = demo_factory().await;
    let response = factory
        .create_user_controller()
        .register("Eve", "eve-at-example", "pw")
        .await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.error.unwrap().contains("email format is invalid"));
}

#[tokio::test]
async fn test_create_order_and_list_for_user() {
    let factory = demo_factory().await;
    let orders = factory.create_order_controller();

    let created = orders.create_order("1", "1", 3.0).await;
    assert!(created.success);
    let order = created.data.unwrap();
    assert_eq!(order.quantity().value(), 3);

    let listed = orders.get_user_orders("1").await.data.unwrap();
    let ids: Vec<&str> = listed.iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec!["1", "new-1"]);
    assert!(factory.order_repository().exists("new-1").await.unwrap());
}

#[tokio::test]
async fn test_create_order_failures_save_nothing() {
    let factory = demo_factory().await;
    let orders = factory.create_order_controller();

    let missing_user = orders.create_order("42", "1", 1.0).await;
    assert_eq!(missing_user.error.as_deref(), Some("user not found: 42"));

    let missing_item = orders.create_order("1", "42", 1.0).await;
    assert_eq!(missing_item.error.as_deref(), Some("item not found: 42"));

    for quantity in [0.0, -1.0, 1.5, f64::NAN] {
        let response = orders.create_order("1", "1", quantity).await;
        assert!(!response.success, "quantity {} should fail", quantity);
    }

    assert_eq!(factory.order_repository().count(), 2);
}

#[tokio::test]
async fn test_orders_for_unknown_user_is_empty_success() {
    let factory = demo_factory().await;
    let response = factory.create_order_controller().get_user_orders("nobody").await;
    assert!(response.success);
    assert!(response.data.unwrap().is_empty());
}

#[tokio::test]
async fn test_envelope_never_exposes_password() {
    let factory = demo_factory().await;
    let response = factory.create_user_controller().get_users().await;
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("john.doe@example.com"));
    assert!(!json.contains("password"));
}
