//! # field-validator
//!
//! A small dispatcher that validates named fields against keyed rules and
//! reports the outcome through caller-supplied callbacks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//!
//! let validator = Validator::<&str>::builder()
//!     .rule("email", |field, _event| {
//!         if field.contains('@') { Ok(()) } else { Err("must contain @".to_string()) }
//!     })
//!     .add_error(|field, message| println!("{field}: {message}"))
//!     .remove_error(|field| println!("{field}: ok"))
//!     .on_errors(|errors, _event| println!("{} field(s) invalid", errors.len()))
//!     .build();
//!
//! // "name" has no rule and passes; "email" fails.
//! assert!(!validator.validate_fields(&["name", "email"], &()));
//! ```
//!
//! ## Model
//!
//! - A **field** is any caller value; the validator only hands it to the key
//!   function and the callbacks.
//! - A **key** is derived from a field and selects its [`Rule`]. Fields
//!   without a rule are always valid.
//! - A **rule** returns `Err(payload)` to mark its field invalid. Panics are
//!   not caught.
//! - **Callbacks**: `add_error` per failed field, `remove_error` per passing or
//!   cleared field, `on_errors` once per call with all failures.
//!
//! All operations are synchronous and process fields strictly in input order.

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validator;

pub use config::ValidatorBuilder;
pub use foundation::{FieldError, FieldErrors, Rule, RuleSet, SharedRule};
pub use validator::Validator;
