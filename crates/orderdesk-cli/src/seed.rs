//! Seed data for the in-memory repositories

use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{CliError, CliResult};

/// Untyped seed records grouped by entity kind
///
/// Records stay as raw JSON here; validation happens when the repositories
/// load them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<Value>,
    pub items: Vec<Value>,
    pub orders: Vec<Value>,
}

impl SeedData {
    /// Two users, two items and one order for each user
    pub fn demo() -> Self {
        Self {
            users: vec![
                json!({
                    "id": "1",
                    "name": "John Doe",
                    "email": "john.doe@example.com",
                    "password": "password"
                }),
                json!({
                    "id": "2",
                    "name": "Jane Doe",
                    "email": "jane.doe@example.com",
                    "password": "password"
                }),
            ],
            items: vec![
                json!({ "id": "1", "name": "Item 1", "price": 100 }),
                json!({ "id": "2", "name": "Item 2", "price": 200 }),
            ],
            orders: vec![
                json!({ "id": "1", "userId": "1", "itemId": "1", "quantity": 1 }),
                json!({ "id": "2", "userId": "2", "itemId": "2", "quantity": 2 }),
            ],
        }
    }

    /// Read a JSON seed file; missing sections are empty
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            CliError::Seed(msg) => CliError::Seed(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn from_json(content: &str) -> CliResult<Self> {
        serde_json::from_str(content).map_err(|e| CliError::Seed(e.to_string()))
    }
}
