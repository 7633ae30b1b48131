//! Macros for declaring rule tables.
//!
//! # Examples
//!
//! ```rust,ignore
//! use field_validator::{RuleSet, rules};
//!
//! fn required(field: &&str, _event: &()) -> Result<(), String> {
//!     if field.is_empty() { Err("required".into()) } else { Ok(()) }
//! }
//!
//! let table: RuleSet<&str, &str> = rules! {
//!     "name" => required,
//!     "email" => |field: &&str, _: &()| {
//!         if field.contains('@') { Ok(()) } else { Err("must contain @".to_string()) }
//!     },
//! };
//! ```

/// Builds a [`RuleSet`](crate::RuleSet) from `key => rule` pairs.
///
/// Each rule may be a function, a closure, or any type implementing
/// [`Rule`](crate::Rule). Later entries replace earlier ones with the same key.
/// Closure argument types are not inferred from the surrounding context, so
/// annotate them or use named functions.
#[macro_export]
macro_rules! rules {
    () => {
        $crate::RuleSet::new()
    };
    ($($key:expr => $rule:expr),+ $(,)?) => {{
        let mut set = $crate::RuleSet::new();
        $(
            set.insert($key, $rule);
        )+
        set
    }};
}
