//! The user collection and its mutation operations.
//!
//! # Responsibilities
//! - Hold the shared in-memory user list behind a mutex
//! - Assign server-side ids (max existing id + 1)
//! - Implement the lookup/filter/replace/merge/remove primitives handlers use
//!
//! # Design Decisions
//! - Users carry an open set of JSON fields; only `id` is server-controlled
//! - `id` is stripped from client input so it can never be overwritten
//! - Lookups are linear scans; the collection is a handful of records

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record: a server-assigned id plus whatever JSON fields the client
/// submitted (`username`, `displayName`, anything else).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique, server-assigned identifier.
    pub id: i64,

    /// Client-supplied fields, carried verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    fn new(id: i64, mut fields: Map<String, Value>) -> Self {
        // The id is ours, never the client's.
        fields.remove("id");
        Self { id, fields }
    }
}

/// Shared in-memory user collection.
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Create a store seeded with the fixed startup records.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(seed()),
        }
    }

    /// Create an empty store (tests).
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the full collection.
    pub fn list(&self) -> Vec<User> {
        self.users.lock().expect("user store mutex poisoned").clone()
    }

    /// Users whose string-valued `field` contains `needle` as a
    /// case-sensitive substring. Non-string fields never match.
    pub fn filter(&self, field: &str, needle: &str) -> Vec<User> {
        self.users
            .lock()
            .expect("user store mutex poisoned")
            .iter()
            .filter(|user| {
                user.fields
                    .get(field)
                    .and_then(Value::as_str)
                    .is_some_and(|value| value.contains(needle))
            })
            .cloned()
            .collect()
    }

    /// Find a user by id.
    pub fn get(&self, id: i64) -> Option<User> {
        self.users
            .lock()
            .expect("user store mutex poisoned")
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    /// Insert a new user with id = (max existing id) + 1.
    pub fn create(&self, fields: Map<String, Value>) -> User {
        let mut users = self.users.lock().expect("user store mutex poisoned");
        let id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        let user = User::new(id, fields);
        users.push(user.clone());
        user
    }

    /// Replace every field of the user with `id` (the id itself is kept).
    pub fn replace(&self, id: i64, fields: Map<String, Value>) -> Option<User> {
        let mut users = self.users.lock().expect("user store mutex poisoned");
        let user = users.iter_mut().find(|user| user.id == id)?;
        *user = User::new(id, fields);
        Some(user.clone())
    }

    /// Shallow-merge `fields` into the user with `id`: supplied keys
    /// overwrite, everything else is preserved.
    pub fn merge(&self, id: i64, fields: Map<String, Value>) -> Option<User> {
        let mut users = self.users.lock().expect("user store mutex poisoned");
        let user = users.iter_mut().find(|user| user.id == id)?;
        for (key, value) in fields {
            if key != "id" {
                user.fields.insert(key, value);
            }
        }
        Some(user.clone())
    }

    /// Remove and return the user with `id`.
    pub fn remove(&self, id: i64) -> Option<User> {
        let mut users = self.users.lock().expect("user store mutex poisoned");
        let index = users.iter().position(|user| user.id == id)?;
        Some(users.remove(index))
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.users.lock().expect("user store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed records every fresh process starts with.
fn seed() -> Vec<User> {
    const SEED: [(i64, &str, &str); 8] = [
        (1, "tony", "Tony"),
        (2, "rob", "Rob"),
        (3, "jermaine", "Jermaine"),
        (4, "michael", "Michael"),
        (5, "nathalie", "Nathalie"),
        (6, "thuso", "Thuso"),
        (7, "ciftler", "Ciftler"),
        (8, "adeola", "Adeola"),
    ];

    SEED.iter()
        .map(|(id, username, display_name)| {
            let mut fields = Map::new();
            fields.insert("username".to_string(), Value::from(*username));
            fields.insert("displayName".to_string(), Value::from(*display_name));
            User { id: *id, fields }
        })
        .collect()
}
