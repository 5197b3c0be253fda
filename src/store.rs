//! Core store type and builder.

use crate::error::{Error, Result};
use crate::persist::{atomic_write, load};
use crate::record::{Draft, Field, User};
use crate::serializer::{JsonSerializer, Serializer};
use parking_lot::RwLock;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Persistent JSON-backed store of [`User`] records.
///
/// Use [`open`](Self::open) for a quick start or [`builder`](Self::builder)
/// to pick compact output. The whole collection is loaded once at
/// construction and rewritten to disk after every mutation.
///
/// All operations are thread-safe: reads clone out under a read lock and
/// every mutation holds the write lock across its read-modify-persist
/// sequence, so mutations never observe or publish a partial collection.
pub struct UserStore {
    records: RwLock<Vec<User>>,
    path: PathBuf,
    serializer: JsonSerializer,
}

impl UserStore {
    /// Open (or create) a store at `path` with pretty-printed output.
    ///
    /// Never fails: a missing, empty, unreadable, or malformed file starts
    /// the store with an empty collection (the failure is logged).
    pub fn open(path: impl AsRef<Path>) -> UserStore {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call
    /// [`.build()`](UserStoreBuilder::build) when ready.
    pub fn builder(path: impl AsRef<Path>) -> UserStoreBuilder {
        UserStoreBuilder::new(path)
    }

    // ---- reads ----

    /// Snapshot of all records in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<User> {
        self.records.read().clone()
    }

    /// Get the record with `id`, or `None` if absent.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<User> {
        self.records.read().iter().find(|u| u.id == id).cloned()
    }

    /// `true` if a record with `id` exists. Avoids cloning the record.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.records.read().iter().any(|u| u.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// `true` when the store has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- writes ----

    /// Validate and insert a new record, returning the stored
    /// (post-coercion) copy.
    ///
    /// Rejections, in order: [`Error::InvalidId`] when the candidate id is
    /// not a positive integer, [`Error::DuplicateId`] when a record with
    /// that id exists, [`Error::Invalid`] when a required field is missing,
    /// empty after trimming, or uncoercible.
    pub fn insert(&self, draft: Draft) -> Result<User> {
        let id = draft.id()?;
        let mut records = self.records.write();
        if records.iter().any(|u| u.id == id) {
            return Err(Error::DuplicateId(id));
        }
        let user = draft.resolve(id)?;
        records.push(user.clone());
        self.persist(&records);
        Ok(user)
    }

    /// Replace exactly one field on the record with `id`, returning the
    /// updated record.
    ///
    /// The record must exist ([`Error::NotFound`] otherwise; this is checked
    /// before the field name, so an unknown field on a missing record reports
    /// not-found). `field` must be one of the wire names in [`Field`];
    /// `"id"` is rejected with [`Error::ImmutableId`], anything else
    /// unrecognized with [`Error::UnknownField`]. An `age` value that does
    /// not coerce to a positive integer is rejected with
    /// [`Error::Invalid`]; all other fields are left untouched either way.
    pub fn update_field(&self, id: u64, field: &str, value: &Value) -> Result<User> {
        let mut records = self.records.write();
        let user = records
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(Error::NotFound(id))?;
        let field: Field = field.parse()?;
        field.apply(user, value)?;
        let updated = user.clone();
        self.persist(&records);
        Ok(updated)
    }

    /// Remove the record with `id`. Returns `false` (and touches nothing)
    /// when no such record exists.
    pub fn remove(&self, id: u64) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|u| u.id != id);
        if records.len() == before {
            return false;
        }
        self.persist(&records);
        true
    }

    // ---- persistence ----

    /// Write the current collection to disk (atomic temp-file + rename).
    ///
    /// Mutations already persist implicitly; this is the explicit lever to
    /// retry after a logged write failure, and unlike the implicit path it
    /// surfaces the error.
    pub fn flush(&self) -> Result<()> {
        let records = self.records.read();
        self.write_out(&records)
    }

    // ---- internal ----

    fn write_out(&self, records: &[User]) -> Result<()> {
        let bytes = self.serializer.serialize(records)?;
        atomic_write(&self.path, &bytes)
    }

    /// Post-mutation persist. A failure here leaves memory ahead of disk
    /// until the next successful write; the mutation is not rolled back.
    fn persist(&self, records: &[User]) {
        if let Err(e) = self.write_out(records) {
            tracing::error!(
                "failed to persist {}, memory is ahead of disk: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens a [`UserStore`].
///
/// ```rust,no_run
/// use roster::UserStore;
///
/// let store = UserStore::builder("data/users.json")
///     .pretty(false)
///     .build();
/// ```
pub struct UserStoreBuilder {
    path: PathBuf,
    pretty: bool,
}

impl UserStoreBuilder {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Write human-readable JSON with 2-space indentation (default: on).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Load the collection and return the store. Infallible: any load
    /// failure is logged and downgraded to an empty collection.
    pub fn build(self) -> UserStore {
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };

        let records = match load(&self.path, &serializer) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "could not load {}, starting with an empty collection: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        };

        UserStore {
            records: RwLock::new(records),
            path: self.path,
            serializer,
        }
    }
}

impl std::fmt::Debug for UserStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStoreBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .finish()
    }
}
