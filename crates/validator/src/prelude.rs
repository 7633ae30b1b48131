//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use field_validator::prelude::*;
//! ```

pub use crate::config::ValidatorBuilder;
pub use crate::foundation::{FieldError, FieldErrors, Rule, RuleSet};
pub use crate::rules;
pub use crate::validator::Validator;
