//! The field validation dispatcher
//!
//! [`Validator`] looks up a field's rule by its derived key, runs it, and
//! routes the outcome to the configured callbacks. It keeps no per-field
//! state; everything observable happens through the callbacks.

use std::fmt;
use std::hash::Hash;

use crate::config::{AddErrorFn, KeyFn, OnErrorsFn, RemoveErrorFn, ValidatorBuilder};
use crate::foundation::{FieldError, FieldErrors, RuleSet};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Dispatches field validation to keyed rules and reports the results.
///
/// # Type Parameters
///
/// * `F` - The field type, opaque to the validator
/// * `E` - The triggering event, passed through to rules and `on_errors`
/// * `M` - The failure payload returned by rules
/// * `K` - The rule lookup key derived from a field (defaults to `F`)
///
/// Configuration is fixed at [`build`](ValidatorBuilder::build) time.
/// Cloning is cheap: rules and callbacks are shared.
///
/// # Examples
///
/// ```rust,ignore
/// use field_validator::Validator;
///
/// let validator = Validator::<&str>::builder()
///     .rule("age", |_, _| Err("must be a number".to_string()))
///     .on_errors(|errors, _event| eprintln!("{} invalid field(s)", errors.len()))
///     .build();
///
/// assert!(!validator.validate_field(&"age", &()));
/// assert!(validator.validate_field(&"name", &())); // no rule, always valid
/// ```
pub struct Validator<F, E = (), M = String, K = F> {
    rules: RuleSet<K, F, E, M>,
    field_key: KeyFn<F, K>,
    add_error: AddErrorFn<F, M>,
    remove_error: RemoveErrorFn<F>,
    on_errors: OnErrorsFn<F, E, M>,
}

impl<F, E, M> Validator<F, E, M, F>
where
    F: Clone + Eq + Hash + 'static,
    E: 'static,
    M: 'static,
{
    /// Creates a validator with no rules and no-op callbacks.
    ///
    /// Every field is valid.
    #[must_use]
    pub fn new() -> Self {
        ValidatorBuilder::new().build()
    }

    /// Starts configuring a validator that uses the field itself as the rule key.
    #[must_use]
    pub fn builder() -> ValidatorBuilder<F, E, M, F> {
        ValidatorBuilder::new()
    }
}

impl<F, E, M> Default for Validator<F, E, M, F>
where
    F: Clone + Eq + Hash + 'static,
    E: 'static,
    M: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, E, M, K> Validator<F, E, M, K>
where
    F: 'static,
    E: 'static,
    M: 'static,
    K: Eq + Hash + 'static,
{
    /// Starts configuring a validator that derives rule keys with `key_fn`.
    ///
    /// ```rust,ignore
    /// struct Input { name: &'static str, value: String }
    ///
    /// let validator = Validator::<Input>::keyed_by(|input: &Input| input.name)
    ///     .rule("zip", |input, _| {
    ///         if input.value.len() == 5 { Ok(()) } else { Err("5 digits".into()) }
    ///     })
    ///     .build();
    /// ```
    #[must_use]
    pub fn keyed_by<C>(key_fn: C) -> ValidatorBuilder<F, E, M, K>
    where
        C: Fn(&F) -> K + Send + Sync + 'static,
    {
        ValidatorBuilder::keyed_by(key_fn)
    }
}

impl<F, E, M, K> Validator<F, E, M, K> {
    pub(crate) fn from_builder(builder: ValidatorBuilder<F, E, M, K>) -> Self {
        let ValidatorBuilder {
            rules,
            field_key,
            add_error,
            remove_error,
            on_errors,
        } = builder;

        Self {
            rules,
            field_key,
            add_error,
            remove_error,
            on_errors,
        }
    }

    /// Returns the rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleSet<K, F, E, M> {
        &self.rules
    }

    /// Notifies `remove_error` for `field` without running any rule.
    pub fn clear_error(&self, field: &F) {
        tracing::trace!("clearing field error");
        (self.remove_error)(field);
    }

    /// Notifies `remove_error` for every field, in order, without running rules.
    pub fn clear_errors<'a, I>(&self, fields: I)
    where
        I: IntoIterator<Item = &'a F>,
        F: 'a,
    {
        let mut count = 0usize;
        for field in fields {
            (self.remove_error)(field);
            count += 1;
        }
        tracing::trace!(count, "cleared field errors");
    }
}

impl<F, E, M, K> Validator<F, E, M, K>
where
    K: Eq + Hash,
{
    /// Runs the rule for `field`, if one is registered, and returns its outcome.
    ///
    /// The key function is called exactly once. A field without a rule passes.
    /// No callback is invoked.
    pub fn run_validation(&self, field: &F, event: &E) -> Result<(), M> {
        let key = (self.field_key)(field);
        match self.rules.get(&key) {
            Some(rule) => rule.check(field, event),
            None => {
                tracing::trace!("no rule registered for field");
                Ok(())
            }
        }
    }

    /// Returns true if a rule is registered for `field`'s derived key.
    #[must_use]
    pub fn has_rule(&self, field: &F) -> bool {
        self.rules.contains_key(&(self.field_key)(field))
    }
}

impl<F, E, M, K> Validator<F, E, M, K>
where
    F: Clone,
    K: Eq + Hash,
{
    /// Validates a single field and reports the outcome.
    ///
    /// On success `remove_error(field)` is called. On failure
    /// `add_error(field, message)` is called, followed by `on_errors` with a
    /// one-element error list. Exactly one of the two paths runs.
    pub fn validate_field(&self, field: &F, event: &E) -> bool {
        match self.run_validation(field, event) {
            Ok(()) => {
                (self.remove_error)(field);
                true
            }
            Err(message) => {
                tracing::debug!("field failed validation");
                (self.add_error)(field, &message);
                let errors = [FieldError::new(field.clone(), message)];
                (self.on_errors)(&errors[..], event);
                false
            }
        }
    }

    /// Validates every field in order and reports failures together.
    ///
    /// Each field gets its own `remove_error` or `add_error` call as it is
    /// processed, and a failing field never stops the ones after it. When at
    /// least one field failed, `on_errors` is called once with every failure
    /// and `false` is returned. Otherwise `on_errors` is not called.
    pub fn validate_fields<'a, I>(&self, fields: I, event: &E) -> bool
    where
        I: IntoIterator<Item = &'a F>,
        F: 'a,
    {
        let mut errors = Vec::new();
        let mut total = 0usize;

        for field in fields {
            total += 1;
            match self.run_validation(field, event) {
                Ok(()) => (self.remove_error)(field),
                Err(message) => {
                    (self.add_error)(field, &message);
                    errors.push(FieldError::new(field.clone(), message));
                }
            }
        }

        if errors.is_empty() {
            tracing::trace!(total, "all fields passed validation");
            return true;
        }

        tracing::debug!(failed = errors.len(), total, "fields failed validation");
        (self.on_errors)(errors.as_slice(), event);
        false
    }

    /// Runs every field's rule in order and returns the failures.
    ///
    /// Unlike [`validate_fields`](Self::validate_fields) this invokes no
    /// callbacks, which makes it suitable where no UI is attached.
    pub fn collect_errors<'a, I>(&self, fields: I, event: &E) -> FieldErrors<F, M>
    where
        I: IntoIterator<Item = &'a F>,
        F: 'a,
    {
        fields
            .into_iter()
            .filter_map(|field| {
                self.run_validation(field, event)
                    .err()
                    .map(|message| FieldError::new(field.clone(), message))
            })
            .collect()
    }
}

// Manual impl: everything is shared, so only the key type needs `Clone`.
impl<F, E, M, K> Clone for Validator<F, E, M, K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            field_key: self.field_key.clone(),
            add_error: self.add_error.clone(),
            remove_error: self.remove_error.clone(),
            on_errors: self.on_errors.clone(),
        }
    }
}

impl<F, E, M, K> fmt::Debug for Validator<F, E, M, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Add(&'static str, String),
        Remove(&'static str),
        Errors(Vec<(&'static str, String)>, u32),
    }

    fn recording(
        builder: ValidatorBuilder<&'static str, u32>,
    ) -> (Validator<&'static str, u32>, Arc<Mutex<Vec<Call>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (add, remove, errors) = (log.clone(), log.clone(), log.clone());
        let validator = builder
            .add_error(move |field, message| {
                add.lock()
                    .unwrap()
                    .push(Call::Add(*field, message.clone()));
            })
            .remove_error(move |field| remove.lock().unwrap().push(Call::Remove(*field)))
            .on_errors(move |list, event| {
                let list = list
                    .iter()
                    .map(|e| (e.field, e.message.clone()))
                    .collect();
                errors.lock().unwrap().push(Call::Errors(list, *event));
            })
            .build();
        (validator, log)
    }

    fn calls(log: &Arc<Mutex<Vec<Call>>>) -> Vec<Call> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn unconfigured_validator_accepts_everything() {
        let validator: Validator<&str> = Validator::new();
        assert!(validator.validate_field(&"anything", &()));
        assert!(validator.validate_fields(&["a", "b"], &()));
        assert!(validator.collect_errors(&["a"], &()).is_empty());
        validator.clear_error(&"a");
        validator.clear_errors(&["a", "b"]);
    }

    #[test]
    fn field_without_rule_is_removed() {
        let (validator, log) = recording(Validator::builder());
        assert!(validator.validate_field(&"name", &1));
        assert_eq!(calls(&log), vec![Call::Remove("name")]);
    }

    #[test]
    fn failing_field_reports_once() {
        let (validator, log) = recording(
            Validator::builder().rule("age", |_, _| Err("too young".to_string())),
        );

        assert!(!validator.validate_field(&"age", &7));
        assert_eq!(
            calls(&log),
            vec![
                Call::Add("age", "too young".into()),
                Call::Errors(vec![("age", "too young".into())], 7),
            ]
        );
    }

    #[test]
    fn rule_sees_event() {
        let (validator, _log) = recording(Validator::builder().rule("code", |_, event: &u32| {
            if *event > 10 {
                Ok(())
            } else {
                Err(format!("event {event} too small"))
            }
        }));

        assert!(validator.validate_field(&"code", &11));
        assert_eq!(
            validator.run_validation(&"code", &3),
            Err("event 3 too small".to_string())
        );
    }

    #[test]
    fn batch_isolates_failures() {
        let (validator, log) = recording(
            Validator::builder().rule("f2", |_, _| Err("bad".to_string())),
        );

        assert!(!validator.validate_fields(&["f1", "f2", "f3"], &9));
        assert_eq!(
            calls(&log),
            vec![
                Call::Remove("f1"),
                Call::Add("f2", "bad".into()),
                Call::Remove("f3"),
                Call::Errors(vec![("f2", "bad".into())], 9),
            ]
        );
    }

    #[test]
    fn passing_batch_skips_on_errors() {
        let (validator, log) = recording(Validator::builder().rule("f1", |_, _| Ok(())));

        assert!(validator.validate_fields(&["f1", "f2"], &0));
        assert_eq!(calls(&log), vec![Call::Remove("f1"), Call::Remove("f2")]);
    }

    #[test]
    fn empty_batch_passes() {
        let (validator, log) = recording(Validator::builder());
        assert!(validator.validate_fields(&[], &0));
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn clear_errors_runs_no_rule() {
        let (validator, log) = recording(
            Validator::builder().rule("f1", |_, _| panic!("rule must not run")),
        );

        validator.clear_error(&"f1");
        validator.clear_errors(&["f1", "f2"]);
        assert_eq!(
            calls(&log),
            vec![Call::Remove("f1"), Call::Remove("f1"), Call::Remove("f2")]
        );
    }

    #[test]
    fn collect_errors_is_silent() {
        let (validator, log) = recording(
            Validator::builder()
                .rule("a", |_, _| Err("a".to_string()))
                .rule("c", |_, _| Err("c".to_string())),
        );

        let errors = validator.collect_errors(&["a", "b", "c"], &0);
        assert_eq!(errors.fields().copied().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn key_fn_called_once_per_field() {
        let hits = Arc::new(Mutex::new(0usize));
        let counter = hits.clone();
        let validator: Validator<&str, (), String, usize> = Validator::keyed_by(move |f: &&str| {
            *counter.lock().unwrap() += 1;
            f.len()
        })
        .rule(3, |_, _| Err("three".to_string()))
        .build();

        assert!(!validator.validate_field(&"abc", &()));
        assert_eq!(*hits.lock().unwrap(), 1);

        assert!(!validator.validate_fields(&["ab", "xyz", "abcd"], &()));
        assert_eq!(*hits.lock().unwrap(), 4);
    }

    #[test]
    fn clone_shares_configuration() {
        let validator = Validator::<&str>::builder()
            .rule("a", |_, _| Err("a".to_string()))
            .build();
        let copy = validator.clone();

        assert!(copy.has_rule(&"a"));
        assert!(!copy.has_rule(&"b"));
        assert!(!copy.validate_field(&"a", &()));
        assert!(format!("{copy:?}").starts_with("Validator"));
    }
}
