//! In-memory data storage subsystem.
//!
//! # Data Flow
//! ```text
//! Process start:
//!     seed() → UserStore (8 fixed records)
//!
//! Request handling:
//!     api handlers → UserStore methods (list/get/create/replace/merge/remove)
//!                  → products::catalog() (static, read-only)
//! ```
//!
//! # Design Decisions
//! - One store instance, constructed at startup and injected via AppState
//! - Linear scan for id lookup (collection stays small)
//! - Everything lives in process memory; nothing survives a restart

pub mod products;
pub mod users;

pub use products::Product;
pub use users::{User, UserStore};
