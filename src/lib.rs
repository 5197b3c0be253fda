//! Persistent JSON-backed store for user records.
//!
//! Loads a collection of users from a JSON file once at open, serves reads
//! from memory, and rewrites the whole file (atomic temp-file + rename)
//! after every insert, single-field update, or delete.
//!
//! ```rust,no_run
//! use roster::{Draft, UserStore};
//! use serde_json::json;
//!
//! let store = UserStore::open("data/users.json");
//! let draft: Draft = serde_json::from_value(json!({
//!     "id": 1, "name": "Ali", "age": 30, "email": "a@b.com",
//!     "phone": "+998901234567", "city": "Tashkent", "jobTitle": "Engineer",
//! })).unwrap();
//! store.insert(draft).unwrap();
//! store.update_field(1, "city", &json!("Samarkand")).unwrap();
//! ```
//!
//! **Single-process only.** If multiple processes open the same file they
//! will clobber each other. Use advisory file locking or a real database for
//! multi-process access.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod persist;
pub mod record;
pub mod serializer;
pub mod store;

pub use error::{Error, Result};
pub use record::{Draft, Field, User};
pub use store::{UserStore, UserStoreBuilder};
