//! The [`Outcome`] type
//!
//! A two-variant tagged result whose serialized form is a discriminated
//! record: `{"ok": true, "data": ...}` on success and
//! `{"ok": false, "error": ...}` on failure. The boolean `ok` field is the
//! sole discriminant; `data` and `error` are mutually exclusive.
//!
//! `Outcome` deliberately has no combinator surface (`map`, `and_then`);
//! convert to [`std::result::Result`] with [`Outcome::into_result`] when
//! chaining is needed.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Two-variant result type: success with a value, or failure with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The computation succeeded.
    Ok(T),
    /// The computation failed.
    Err(E),
}

/// Construct a success outcome wrapping `data` unchanged.
pub fn ok<T, E>(data: T) -> Outcome<T, E> {
    Outcome::Ok(data)
}

/// Construct a failure outcome wrapping `error` unchanged.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// True if this is a success outcome.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// True if this is a failure outcome.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the success value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Ok(data) => Some(data),
            Outcome::Err(_) => None,
        }
    }

    /// Borrow the error value, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Consume the outcome, yielding the success value if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Ok(data) => Some(data),
            Outcome::Err(_) => None,
        }
    }

    /// Consume the outcome, yielding the error value if any.
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Convert into a [`std::result::Result`].
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Ok(data),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(data) => Ok(data),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Outcome::Ok(data) => {
                record.serialize_field("ok", &true)?;
                record.serialize_field("data", data)?;
            }
            Outcome::Err(error) => {
                record.serialize_field("ok", &false)?;
                record.serialize_field("error", error)?;
            }
        }
        record.end()
    }
}

/// Marker deserializing only from the literal boolean `true`.
struct OkFlag;

impl<'de> Deserialize<'de> for OkFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(OkFlag)
        } else {
            Err(de::Error::custom("expected `ok` to be true"))
        }
    }
}

/// Marker deserializing only from the literal boolean `false`.
struct ErrFlag;

impl<'de> Deserialize<'de> for ErrFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Err(de::Error::custom("expected `ok` to be false"))
        } else {
            Ok(ErrFlag)
        }
    }
}

/// Wire shape of an [`Outcome`]: the `ok` flag discriminates which sibling
/// field must be present.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OutcomeRepr<T, E> {
    Ok {
        #[allow(dead_code)]
        ok: OkFlag,
        data: T,
    },
    Err {
        #[allow(dead_code)]
        ok: ErrFlag,
        error: E,
    },
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match OutcomeRepr::deserialize(deserializer)? {
            OutcomeRepr::Ok { data, .. } => Ok(Outcome::Ok(data)),
            OutcomeRepr::Err { error, .. } => Ok(Outcome::Err(error)),
        }
    }
}
