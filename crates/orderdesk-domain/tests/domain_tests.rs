//! Unit tests for orderdesk-domain

use chrono::Utc;
use orderdesk_domain::entities::{Item, Order, User};
use orderdesk_domain::errors::*;
use orderdesk_domain::value_objects::*;

#[cfg(test)]
mod tests {
    use super::*;

    mod email_tests {
        use super::*;

        #[test]
        fn test_email_creation_valid() {
            let email = Email::create("john.doe@example.com").unwrap();
            assert_eq!(email.as_str(), "john.doe@example.com");
            assert_eq!(email.to_string(), "john.doe@example.com");
        }

        #[test]
        fn test_email_creation_empty() {
            let result = Email::create("");
            assert_eq!(result.unwrap_err(), DomainError::new("email is required"));
        }

        #[test]
        fn test_email_creation_invalid_format() {
            let result = Email::create("not-an-email");
            assert!(result.unwrap_err().reason().contains("format"));
        }

        #[test]
        fn test_email_equality_is_exact() {
            let a = Email::create("a@b.com").unwrap();
            let b = Email::create("a@b.com").unwrap();
            let c = Email::create("A@b.com").unwrap();
            assert_eq!(a, b);
            assert_ne!(a, c);
        }

        #[test]
        fn test_email_deserialize_validates() {
            let ok: Result<Email, _> = serde_json::from_str("\"a@b.com\"");
            assert!(ok.is_ok());
            let bad: Result<Email, _> = serde_json::from_str("\"a@b\"");
            assert!(bad.is_err());
        }
    }

    mod numeric_tests {
        use super::*;

        #[test]
        fn test_price_multiply_produces_new_price() {
            let price = Price::create(100.0).unwrap();
            let total = price.multiply(3.0).unwrap();
            assert_eq!(total.value(), 300.0);
            assert_eq!(price.value(), 100.0);
        }

        #[test]
        fn test_price_multiply_by_zero_is_zero() {
            let total = Price::create(25.5).unwrap().multiply(0.0).unwrap();
            assert_eq!(total.value(), 0.0);
        }

        #[test]
        fn test_quantity_json_goes_through_factory() {
            let q: Quantity = serde_json::from_str("3").unwrap();
            assert_eq!(q.value(), 3);
            assert!(serde_json::from_str::<Quantity>("0").is_err());
            assert!(serde_json::from_str::<Quantity>("2.5").is_err());
            assert_eq!(serde_json::to_string(&q).unwrap(), "3");
        }

        #[test]
        fn test_amount_bounds_inclusive() {
            assert!(Amount::create(0.0).is_ok());
            assert!(Amount::create(10_000.0).is_ok());
            assert!(Amount::create(-1.0).is_err());
            assert!(Amount::create(10_001.0).is_err());
            assert!(Amount::create(12.5).is_err());
        }

        #[test]
        fn test_amount_overflowing_add_fails() {
            let max = Amount::create(10_000.0).unwrap();
            let one = Amount::create(1.0).unwrap();
            let err = max.add(&one).unwrap_err();
            assert!(err.reason().contains("maximum"));
        }
    }

    mod entity_tests {
        use super::*;

        #[test]
        fn test_entities_keep_constructor_arguments() {
            let at = Utc::now();
            let order = Order::new(
                "o1",
                "missing-user",
                "missing-item",
                Quantity::create(2.0).unwrap(),
                at,
                at,
            );
            // References are not checked by the entity itself
            assert_eq!(order.user_id(), "missing-user");
            assert_eq!(order.item_id(), "missing-item");
        }

        #[test]
        fn test_item_serializes_camel_case() {
            let at = Utc::now();
            let item = Item::new("1", "Item 1", Price::create(100.0).unwrap(), at, at);
            let json = serde_json::to_value(&item).unwrap();
            assert_eq!(json["price"], 100.0);
            assert!(json.get("updatedAt").is_some());
        }

        #[test]
        fn test_user_change_name_does_not_mutate_receiver() {
            let at = Utc::now();
            let user = User::new(
                "1",
                "Jane Doe",
                Email::create("jane.doe@example.com").unwrap(),
                "password",
                at,
                at,
            );
            let snapshot = user.clone();
            let _ = user.change_name("Jane Smith").unwrap();
            assert_eq!(user, snapshot);
        }
    }
}
