//! Error records produced by failed field validation
//!
//! A [`FieldError`] pairs a field with the payload its rule returned.
//! [`FieldErrors`] keeps records in the order fields were validated.

use std::fmt;
use std::ops::Deref;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single failed field together with its rule's failure payload.
///
/// The payload is forwarded verbatim; the validator never wraps or rewrites it.
///
/// # Examples
///
/// ```rust,ignore
/// use field_validator::FieldError;
///
/// let error = FieldError::new("email", "must contain @".to_string());
/// assert_eq!(error.to_string(), "field \"email\" is invalid: must contain @");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("field {field:?} is invalid: {message}")]
pub struct FieldError<F, M = String> {
    /// The field that failed.
    pub field: F,
    /// What its rule returned.
    pub message: M,
}

impl<F, M> FieldError<F, M> {
    /// Creates a new error record.
    pub fn new(field: F, message: M) -> Self {
        Self { field, message }
    }

    /// Returns the failed field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Returns the failure payload.
    pub fn message(&self) -> &M {
        &self.message
    }

    /// Splits the record into field and payload.
    pub fn into_parts(self) -> (F, M) {
        (self.field, self.message)
    }
}

impl<F, M> From<(F, M)> for FieldError<F, M> {
    fn from((field, message): (F, M)) -> Self {
        Self::new(field, message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered collection of [`FieldError`] records.
///
/// Records appear in the order their fields were validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors<F, M = String> {
    errors: Vec<FieldError<F, M>>,
}

impl<F, M> FieldErrors<F, M> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends a record.
    pub fn push(&mut self, error: FieldError<F, M>) {
        self.errors.push(error);
    }

    /// Returns true if there are any records.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError<F, M>] {
        &self.errors
    }

    /// Iterates over the failed fields in validation order.
    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.errors.iter().map(FieldError::field)
    }

    /// Consumes the collection, returning the records.
    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError<F, M>> {
        self.errors
    }

    /// `Ok(ok_value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl<F, M> Default for FieldErrors<F, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, M> Deref for FieldErrors<F, M> {
    type Target = [FieldError<F, M>];

    fn deref(&self) -> &Self::Target {
        &self.errors
    }
}

impl<F, M> From<Vec<FieldError<F, M>>> for FieldErrors<F, M> {
    fn from(errors: Vec<FieldError<F, M>>) -> Self {
        Self { errors }
    }
}

impl<F, M> FromIterator<FieldError<F, M>> for FieldErrors<F, M> {
    fn from_iter<I: IntoIterator<Item = FieldError<F, M>>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<F, M> IntoIterator for FieldErrors<F, M> {
    type Item = FieldError<F, M>;
    type IntoIter = std::vec::IntoIter<FieldError<F, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, F, M> IntoIterator for &'a FieldErrors<F, M> {
    type Item = &'a FieldError<F, M>;
    type IntoIter = std::slice::Iter<'a, FieldError<F, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<F, M> fmt::Display for FieldErrors<F, M>
where
    F: fmt::Debug,
    M: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} field(s) failed validation:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl<F, M> std::error::Error for FieldErrors<F, M>
where
    F: fmt::Debug,
    M: fmt::Display + fmt::Debug,
{
}

// ============================================================================
// TESTS
// ============================================================================
