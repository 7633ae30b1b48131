//! Validator configuration
//!
//! [`ValidatorBuilder`] carries the rule table, the key function and the three
//! notification callbacks. Every option starts at a default (empty rule set,
//! identity key, no-op callbacks), and each setter overwrites exactly one
//! option. Setting the rule table replaces it wholesale; rule tables are never
//! merged.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::foundation::{FieldError, RuleSet};
use crate::validator::Validator;

/// Derives the rule lookup key from a field.
pub type KeyFn<F, K> = Arc<dyn Fn(&F) -> K + Send + Sync>;

/// Called with the field and payload when a field fails.
pub type AddErrorFn<F, M> = Arc<dyn Fn(&F, &M) + Send + Sync>;

/// Called with the field when it passes or is cleared.
pub type RemoveErrorFn<F> = Arc<dyn Fn(&F) + Send + Sync>;

/// Called once per validation call that produced at least one failure.
pub type OnErrorsFn<F, E, M> = Arc<dyn Fn(&[FieldError<F, M>], &E) + Send + Sync>;

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for a [`Validator`].
///
/// Obtain one with [`Validator::builder`] (identity key) or
/// [`Validator::keyed_by`] (custom key function).
///
/// # Examples
///
/// ```rust,ignore
/// use field_validator::Validator;
///
/// let validator = Validator::<&str>::builder()
///     .rule("email", |field, _event| {
///         if field.contains('@') { Ok(()) } else { Err("must contain @".to_string()) }
///     })
///     .add_error(|field, message| eprintln!("{field}: {message}"))
///     .build();
/// ```
pub struct ValidatorBuilder<F, E = (), M = String, K = F> {
    pub(crate) rules: RuleSet<K, F, E, M>,
    pub(crate) field_key: KeyFn<F, K>,
    pub(crate) add_error: AddErrorFn<F, M>,
    pub(crate) remove_error: RemoveErrorFn<F>,
    pub(crate) on_errors: OnErrorsFn<F, E, M>,
}

impl<F, E, M> ValidatorBuilder<F, E, M, F>
where
    F: Clone + Eq + Hash + 'static,
    E: 'static,
    M: 'static,
{
    /// Creates a builder whose key function returns the field unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_fn(Arc::new(|field: &F| field.clone()))
    }
}

impl<F, E, M> Default for ValidatorBuilder<F, E, M, F>
where
    F: Clone + Eq + Hash + 'static,
    E: 'static,
    M: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, E, M, K> ValidatorBuilder<F, E, M, K>
where
    F: 'static,
    E: 'static,
    M: 'static,
    K: Eq + Hash + 'static,
{
    /// Creates a builder that derives rule keys with `key_fn`.
    #[must_use]
    pub fn keyed_by<C>(key_fn: C) -> Self
    where
        C: Fn(&F) -> K + Send + Sync + 'static,
    {
        Self::with_key_fn(Arc::new(key_fn))
    }

    fn with_key_fn(field_key: KeyFn<F, K>) -> Self {
        Self {
            rules: RuleSet::new(),
            field_key,
            add_error: Arc::new(|_: &F, _: &M| {}),
            remove_error: Arc::new(|_: &F| {}),
            on_errors: Arc::new(|_: &[FieldError<F, M>], _: &E| {}),
        }
    }

    /// Replaces the rule table.
    ///
    /// Rules registered earlier through [`rule`](Self::rule) are discarded.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules(mut self, rules: RuleSet<K, F, E, M>) -> Self {
        self.rules = rules;
        self
    }

    /// Registers a single rule in the current table.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<C>(mut self, key: K, check: C) -> Self
    where
        C: Fn(&F, &E) -> Result<(), M> + Send + Sync + 'static,
    {
        self.rules.insert(key, check);
        self
    }

    /// Replaces the key function.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_key<C>(mut self, key_fn: C) -> Self
    where
        C: Fn(&F) -> K + Send + Sync + 'static,
    {
        self.field_key = Arc::new(key_fn);
        self
    }

    /// Sets the callback invoked for each failed field.
    #[must_use = "builder methods must be chained or built"]
    pub fn add_error<C>(mut self, callback: C) -> Self
    where
        C: Fn(&F, &M) + Send + Sync + 'static,
    {
        self.add_error = Arc::new(callback);
        self
    }

    /// Sets the callback invoked for each passing or cleared field.
    #[must_use = "builder methods must be chained or built"]
    pub fn remove_error<C>(mut self, callback: C) -> Self
    where
        C: Fn(&F) + Send + Sync + 'static,
    {
        self.remove_error = Arc::new(callback);
        self
    }

    /// Sets the callback invoked with all failures of one validation call.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_errors<C>(mut self, callback: C) -> Self
    where
        C: Fn(&[FieldError<F, M>], &E) + Send + Sync + 'static,
    {
        self.on_errors = Arc::new(callback);
        self
    }

    /// Finishes configuration.
    #[must_use]
    pub fn build(self) -> Validator<F, E, M, K> {
        Validator::from_builder(self)
    }
}

impl<F, E, M, K> fmt::Debug for ValidatorBuilder<F, E, M, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("rules", &self.rules)
            .field("field_key", &"<function>")
            .field("add_error", &"<function>")
            .field("remove_error", &"<function>")
            .field("on_errors", &"<function>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
