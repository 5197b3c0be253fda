//! Unified error type for all store operations.

use crate::record::Field;

/// Things that can go wrong when using the store.
///
/// The first six variants are rejection signals the caller is expected to
/// handle (an HTTP front-end would map [`NotFound`](Error::NotFound) to 404
/// and the rest to 400). The I/O and serde variants only surface through
/// [`flush`](crate::UserStore::flush); the implicit write after a mutation
/// logs them instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No record with this id exists.
    NotFound(u64),
    /// A record with this id already exists.
    DuplicateId(u64),
    /// Candidate id is missing, not a JSON integer, or not positive.
    InvalidId,
    /// A field value is missing, empty after trimming, or uncoercible.
    Invalid(Field),
    /// The name does not match any record field.
    UnknownField(String),
    /// The id field cannot be changed once a record exists.
    ImmutableId,
    /// File system problem (read, write, rename).
    Io(String),
    /// Failed to serialize the collection to bytes.
    Serialize(String),
    /// Failed to deserialize bytes back into the collection.
    Deserialize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "no record with id {id}"),
            Error::DuplicateId(id) => write!(f, "a record with id {id} already exists"),
            Error::InvalidId => write!(f, "id must be a positive integer"),
            Error::Invalid(field) => write!(f, "invalid value for field `{field}`"),
            Error::UnknownField(name) => write!(f, "unknown field `{name}`"),
            Error::ImmutableId => write!(f, "the id field cannot be updated"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Error::Deserialize(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
