//! Building blocks of the dispatcher
//!
//! - **Rules**: [`Rule`], [`RuleSet`], [`SharedRule`]
//! - **Errors**: [`FieldError`], [`FieldErrors`]
//!
//! A rule reports failure by returning `Err(payload)`. The payload type is
//! chosen by the caller, so an application can use plain messages, error
//! codes, or structured values:
//!
//! ```rust,ignore
//! use field_validator::foundation::RuleSet;
//!
//! let rules: RuleSet<&str, &str> = RuleSet::new()
//!     .with("email", |field, _event| {
//!         if field.contains('@') { Ok(()) } else { Err("must contain @".to_string()) }
//!     });
//! ```

pub mod error;
pub mod rule;

pub use error::{FieldError, FieldErrors};
pub use rule::{Rule, RuleSet, SharedRule};
