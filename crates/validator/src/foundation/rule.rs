//! Rules and the keyed rule table
//!
//! A [`Rule`] checks one field and reports failure by returning `Err(message)`.
//! The [`RuleSet`] maps field keys to rules; a key with no entry is always valid.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// Validation logic for a single field.
///
/// Any `Fn(&F, &E) -> Result<(), M>` is a rule, so plain functions and
/// closures work directly. Implement the trait by hand when the rule carries
/// its own configuration.
///
/// # Type Parameters
///
/// * `F` - The field being validated
/// * `E` - The event that triggered validation (opaque, passed through)
/// * `M` - The failure payload, conventionally a message
///
/// # Examples
///
/// ```rust,ignore
/// use field_validator::Rule;
///
/// struct MinChars(usize);
///
/// impl Rule<String, (), String> for MinChars {
///     fn check(&self, field: &String, _event: &()) -> Result<(), String> {
///         if field.chars().count() >= self.0 {
///             Ok(())
///         } else {
///             Err(format!("must be at least {} characters", self.0))
///         }
///     }
/// }
/// ```
pub trait Rule<F, E, M> {
    /// Checks `field`, returning the failure payload if it is invalid.
    fn check(&self, field: &F, event: &E) -> Result<(), M>;
}

impl<F, E, M, T> Rule<F, E, M> for T
where
    T: Fn(&F, &E) -> Result<(), M>,
{
    #[inline]
    fn check(&self, field: &F, event: &E) -> Result<(), M> {
        self(field, event)
    }
}

/// Shared, type-erased rule as stored in a [`RuleSet`].
pub type SharedRule<F, E, M> = Arc<dyn Rule<F, E, M> + Send + Sync>;

// ============================================================================
// RULE SET
// ============================================================================

/// Lookup table from field key to rule.
///
/// At most one rule is registered per key. Inserting under an existing key
/// replaces the previous rule.
pub struct RuleSet<K, F, E = (), M = String> {
    rules: HashMap<K, SharedRule<F, E, M>>,
}

impl<K, F, E, M> RuleSet<K, F, E, M>
where
    K: Eq + Hash,
{
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers `rule` under `key`.
    ///
    /// Returns `true` if a rule was already registered for that key and has
    /// been replaced.
    pub fn insert<R>(&mut self, key: K, rule: R) -> bool
    where
        R: Rule<F, E, M> + Send + Sync + 'static,
    {
        self.rules.insert(key, Arc::new(rule)).is_some()
    }

    /// Registers an already shared rule under `key`.
    pub fn insert_shared(&mut self, key: K, rule: SharedRule<F, E, M>) -> bool {
        self.rules.insert(key, rule).is_some()
    }

    /// Builder form of [`insert`](Self::insert) for closures.
    ///
    /// The `Fn` bound lets the compiler infer closure argument types from the
    /// set's own type parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<C>(mut self, key: K, check: C) -> Self
    where
        C: Fn(&F, &E) -> Result<(), M> + Send + Sync + 'static,
    {
        self.insert(key, check);
        self
    }

    /// Removes the rule registered under `key`, if any.
    pub fn remove(&mut self, key: &K) -> Option<SharedRule<F, E, M>> {
        self.rules.remove(key)
    }

    /// Returns the rule registered under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&(dyn Rule<F, E, M> + Send + Sync)> {
        self.rules.get(key).map(AsRef::as_ref)
    }

    /// Returns true if a rule is registered under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.rules.contains_key(key)
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over registered keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rules.keys()
    }
}

impl<K, F, E, M> Default for RuleSet<K, F, E, M>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: rules are shared behind `Arc`, so only the key needs `Clone`.
impl<K, F, E, M> Clone for RuleSet<K, F, E, M>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<K, F, E, M> fmt::Debug for RuleSet<K, F, E, M>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.rules.keys()).finish()
    }
}

impl<K, F, E, M, R> FromIterator<(K, R)> for RuleSet<K, F, E, M>
where
    K: Eq + Hash,
    R: Rule<F, E, M> + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, rule) in iter {
            set.insert(key, rule);
        }
        set
    }
}

impl<K, F, E, M, R> Extend<(K, R)> for RuleSet<K, F, E, M>
where
    K: Eq + Hash,
    R: Rule<F, E, M> + Send + Sync + 'static,
{
    fn extend<I: IntoIterator<Item = (K, R)>>(&mut self, iter: I) {
        for (key, rule) in iter {
            self.insert(key, rule);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
