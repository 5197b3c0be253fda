//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different on-disk format.

use crate::error::{Error, Result};
use crate::record::User;

/// Converts collection snapshots to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode the records to bytes.
    fn serialize(&self, records: &[User]) -> Result<Vec<u8>>;

    /// Decode bytes back into records.
    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<User>>;
}

/// JSON serializer with optional pretty-printing.
///
/// Pretty mode writes a 2-space-indented array, the format the store uses by
/// default so the backing file stays hand-editable.
#[derive(Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, records: &[User]) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        };
        bytes.map_err(Error::from)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<User>> {
        serde_json::from_slice(bytes).map_err(Error::from)
    }
}
