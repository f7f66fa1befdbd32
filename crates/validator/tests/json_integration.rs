//! Rules checked against decoded JSON payloads.

#![cfg(feature = "json")]

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use vouch::prelude::*;

/// A raw signup payload, validated before it is mapped onto a typed struct.
struct Payload(Value);

fn validator() -> Validator {
    let mut validator = Validator::new();
    validator.register_type(|payload: &Payload, ctx| {
        let body = &payload.0;
        ctx.check(NOT_EMPTY, [&body["name"]]).message("name required");
        ctx.check(IS_EMAIL, [&body["email"]]);
        ctx.check(GREATER_THAN, operands![0, &body["age"]])
            .message("age must be positive");
        ctx.check(LESS_THAN, operands![4, &body["tags"]])
            .message("at most three tags");
    });
    validator
}

#[test]
fn valid_payload() {
    let payload = Payload(json!({
        "name": "Al",
        "email": "al@example.com",
        "age": 30,
        "tags": ["a", "b"],
    }));
    assert_eq!(validator().validate(&payload), Ok(()));
}

#[test]
fn missing_name_is_required() {
    let payload = Payload(json!({"email": "al@example.com", "age": 30, "tags": []}));
    let error = validator().validate(&payload).unwrap_err();
    assert_eq!(error.code, "required");
    assert_eq!(error.message, "name required");
}

#[test]
fn bad_email() {
    let payload = Payload(json!({"name": "Al", "email": "al at example", "age": 30, "tags": []}));
    assert_eq!(
        validator().validate(&payload),
        Err(ValidationError::invalid_email())
    );
}

#[test]
fn negative_age() {
    let payload = Payload(json!({"name": "Al", "email": "a@b.c", "age": -2, "tags": []}));
    assert_eq!(
        validator().validate(&payload).unwrap_err().message,
        "age must be positive"
    );
}

#[test]
fn too_many_tags() {
    let payload = Payload(json!({
        "name": "Al",
        "email": "a@b.c",
        "age": 1,
        "tags": ["a", "b", "c", "d"],
    }));
    assert_eq!(
        validator().validate(&payload).unwrap_err().message,
        "at most three tags"
    );
}

#[test]
fn json_and_native_agree() {
    let validator = validator();
    let native = [3usize, 0, 7];
    let decoded = json!([3, 0, 7]);

    for (n, j) in native.iter().zip(decoded.as_array().unwrap()) {
        let mut a = Context::new(validator.rules());
        a.check(GREATER_THAN, operands![1, n]);
        let mut b = Context::new(validator.rules());
        b.check(GREATER_THAN, operands![1, j]);
        assert_eq!(a.is_ok(), b.is_ok());
    }
}

#[test]
fn guarded_email_field_fails_instead_of_panicking() {
    let mut validator = Validator::new();
    validator.register_type(|payload: &Payload, ctx| {
        let email = &payload.0["email"];
        ctx.check(NOT_EMPTY, [email]).message("email required");
        ctx.check(IS_EMAIL, [email]);
    });

    let missing = Payload(json!({"name": "Al"}));
    assert_eq!(
        validator.validate(&missing).unwrap_err().message,
        "email required"
    );
    let present = Payload(json!({"email": "al@example.com"}));
    assert_eq!(validator.validate(&present), Ok(()));
}

#[test]
fn optional_email_field_through_must_err() {
    let mut validator = Validator::new();
    validator.register_type(|payload: &Payload, ctx| {
        ctx.must_err(|| match payload.0["email"].as_str() {
            Some(email) if !vouch::rules::is_well_formed(email) => {
                Err(ValidationError::invalid_email())
            }
            _ => Ok(()),
        });
    });

    assert!(validator.validate(&Payload(json!({}))).is_ok());
    assert_eq!(
        validator.validate(&Payload(json!({"email": "al"}))),
        Err(ValidationError::invalid_email())
    );
}

#[test]
#[should_panic(expected = "isEmail: parameter at position 1 must be string, got absent")]
fn missing_email_field_is_fatal() {
    let payload = Payload(json!({"name": "Al", "age": 1, "tags": []}));
    let _ = validator().validate(&payload);
}
