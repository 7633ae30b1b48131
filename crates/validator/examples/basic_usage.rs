//! Basic usage example for field-validator
//!
//! Run with `RUST_LOG=field_validator=trace` to see dispatch events.

use std::sync::{Arc, Mutex};

use field_validator::prelude::*;
use tracing_subscriber::EnvFilter;

/// A form input as a UI layer might hand it over.
#[derive(Debug, Clone)]
struct Input {
    name: &'static str,
    value: String,
}

#[derive(Debug)]
enum FormEvent {
    Blur,
    Submit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The "UI": a list of visible error labels.
    let labels: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let (shown, hidden) = (labels.clone(), labels.clone());

    let validator = Validator::keyed_by(|input: &Input| input.name)
        .rule("email", |input: &Input, _: &FormEvent| {
            if input.value.contains('@') {
                Ok(())
            } else {
                Err("must contain @".to_string())
            }
        })
        .rule("age", |input: &Input, _: &FormEvent| match input.value.parse::<u8>() {
            Ok(age) if age >= 18 => Ok(()),
            Ok(_) => Err("must be 18 or older".to_string()),
            Err(_) => Err("must be a number".to_string()),
        })
        .add_error(move |input, message| {
            shown
                .lock()
                .unwrap()
                .push(format!("{}: {message}", input.name));
        })
        .remove_error(move |input| {
            hidden
                .lock()
                .unwrap()
                .retain(|label| !label.starts_with(input.name));
        })
        .on_errors(|errors, event| {
            println!("{event:?}: {} invalid field(s)", errors.len());
        })
        .build();

    let mut email = Input {
        name: "email",
        value: "someone".into(),
    };
    let age = Input {
        name: "age",
        value: "17".into(),
    };
    let city = Input {
        name: "city",
        value: "Kyiv".into(),
    };

    // Validate one field on blur.
    validator.validate_field(&email, &FormEvent::Blur);
    println!("labels after blur: {:?}", labels.lock().unwrap());

    // Fix it and submit the whole form.
    email.value = "someone@example.com".into();
    let ok = validator.validate_fields([&email, &age, &city], &FormEvent::Submit);
    println!("form valid: {ok}");
    println!("labels after submit: {:?}", labels.lock().unwrap());

    // Reset the form.
    validator.clear_errors([&email, &age, &city]);
    println!("labels after reset: {:?}", labels.lock().unwrap());
}
