//! Absence helpers
//!
//! Absent values are represented with [`std::option::Option`]. At the serde
//! boundary the two wire-level absence markers — an explicit `null` and a
//! missing field — both decode to `None` when the field is declared
//! `#[serde(default)]`, so the rest of the crate only ever sees one "no
//! value" representation.

/// True iff `value` is absent.
///
/// Usable by path as a serde guard:
///
/// ```rust
/// # use serde::Serialize;
/// #[derive(Serialize)]
/// struct Record {
///     #[serde(skip_serializing_if = "mishap::is_none")]
///     note: Option<String>,
/// }
/// ```
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}
