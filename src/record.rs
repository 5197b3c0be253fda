//! The user record, insert candidates, and the closed set of updatable fields.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One user record. `id` is the primary key and never changes after insert.
///
/// Serialized with camelCase keys, so `job_title` travels as `jobTitle` both
/// on disk and over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Primary key, positive and unique across the collection.
    pub id: u64,
    /// Display name, non-empty.
    pub name: String,
    /// Age in years, positive.
    pub age: u32,
    /// Contact email, non-empty.
    pub email: String,
    /// Contact phone, non-empty.
    pub phone: String,
    /// City of residence, non-empty.
    pub city: String,
    /// Job title, non-empty.
    pub job_title: String,
}

/// A loosely-typed insert candidate, typically deserialized straight from a
/// request body. Unknown keys are ignored; missing keys stay `None`.
///
/// [`UserStore::insert`](crate::UserStore::insert) coerces a draft into a
/// [`User`] or rejects it: `id` must already be a positive JSON integer,
/// `age` may be an integer or a numeric string, and the text fields accept
/// any scalar (trimmed string rendering) but must end up non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    /// Candidate id. Only a JSON integer is accepted, no string parse.
    pub id: Option<Value>,
    /// Candidate name.
    pub name: Option<Value>,
    /// Candidate age, integer or numeric string.
    pub age: Option<Value>,
    /// Candidate email.
    pub email: Option<Value>,
    /// Candidate phone.
    pub phone: Option<Value>,
    /// Candidate city.
    pub city: Option<Value>,
    /// Candidate job title.
    pub job_title: Option<Value>,
}

impl Draft {
    pub(crate) fn id(&self) -> Result<u64> {
        self.id.as_ref().and_then(coerce_id).ok_or(Error::InvalidId)
    }

    /// Coerce every remaining field and assemble the record. The id has
    /// already been validated (and checked for collisions) by the store.
    pub(crate) fn resolve(&self, id: u64) -> Result<User> {
        let age = self
            .age
            .as_ref()
            .and_then(coerce_age)
            .ok_or(Error::Invalid(Field::Age))?;
        Ok(User {
            id,
            name: required_text(&self.name, Field::Name)?,
            age,
            email: required_text(&self.email, Field::Email)?,
            phone: required_text(&self.phone, Field::Phone)?,
            city: required_text(&self.city, Field::City)?,
            job_title: required_text(&self.job_title, Field::JobTitle)?,
        })
    }
}

/// The fields that [`update_field`](crate::UserStore::update_field) can
/// replace. `id` is deliberately absent: changing it could silently break id
/// uniqueness, so `"id"` parses to [`Error::ImmutableId`] rather than to a
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `name`
    Name,
    /// `age`
    Age,
    /// `email`
    Email,
    /// `phone`
    Phone,
    /// `city`
    City,
    /// `jobTitle`
    JobTitle,
}

impl Field {
    /// Every updatable field, in record order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Age,
        Field::Email,
        Field::Phone,
        Field::City,
        Field::JobTitle,
    ];

    /// The wire/file key for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::City => "city",
            Field::JobTitle => "jobTitle",
        }
    }

    /// Replace this field on `user` with the coerced `value`.
    ///
    /// `age` must coerce to a positive integer. Text fields take the trimmed
    /// string rendering of the value as-is; emptiness is only enforced at
    /// insert time.
    pub(crate) fn apply(self, user: &mut User, value: &Value) -> Result<()> {
        match self {
            Field::Age => {
                user.age = coerce_age(value).ok_or(Error::Invalid(Field::Age))?;
            }
            Field::Name => user.name = coerce_text(value),
            Field::Email => user.email = coerce_text(value),
            Field::Phone => user.phone = coerce_text(value),
            Field::City => user.city = coerce_text(value),
            Field::JobTitle => user.job_title = coerce_text(value),
        }
        Ok(())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "city" => Ok(Field::City),
            "jobTitle" => Ok(Field::JobTitle),
            "id" => Err(Error::ImmutableId),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

// ---- coercion -----------------------------------------------------------------

fn coerce_id(value: &Value) -> Option<u64> {
    // Ids must arrive as numbers; "7" is not an id.
    value.as_u64().filter(|id| *id > 0)
}

fn coerce_age(value: &Value) -> Option<u32> {
    let age = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    u32::try_from(age).ok().filter(|age| *age > 0)
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn required_text(value: &Option<Value>, field: Field) -> Result<String> {
    let text = value.as_ref().map(coerce_text).unwrap_or_default();
    if text.is_empty() {
        return Err(Error::Invalid(field));
    }
    Ok(text)
}
