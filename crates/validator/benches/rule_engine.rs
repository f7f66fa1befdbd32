//! Benchmarks for rule dispatch and context chaining.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use vouch::prelude::*;

struct Person {
    name: String,
    email: String,
    age: u32,
}

fn validator() -> Validator {
    let mut validator = Validator::new();
    validator.register_type(|person: &Person, ctx| {
        ctx.check(NOT_EMPTY, [&person.name]).message("name required");
        ctx.check(IS_EMAIL, [&person.email]);
        ctx.check(GREATER_THAN, operands![0, person.age])
            .message("age must be positive");
        ctx.check(LESS_THAN, operands![150, person.age]);
    });
    validator
}

// ============================================================================
// Full validate() calls
// ============================================================================

fn bench_validate(c: &mut Criterion) {
    let validator = validator();
    let valid = Person {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        age: 30,
    };
    let invalid = Person {
        name: String::new(),
        email: "alice@example.com".into(),
        age: 30,
    };

    c.bench_function("validate_all_pass", |b| {
        b.iter(|| validator.validate(black_box(&valid)))
    });

    c.bench_function("validate_first_fails", |b| {
        b.iter(|| validator.validate(black_box(&invalid)))
    });
}

// ============================================================================
// Individual rules
// ============================================================================

fn bench_rules(c: &mut Criterion) {
    let validator = validator();
    let rules = validator.rules();

    c.bench_function("is_email_scan", |b| {
        let email = rules.resolve(IS_EMAIL);
        b.iter(|| email.evaluate(black_box(&[Operand::Str("first.last@mail.example.org")])))
    });

    c.bench_function("greater_than_five_operands", |b| {
        let greater = rules.resolve(GREATER_THAN);
        let args = operands![0, 1, 2u8, 3.5, "four", &[1, 2, 3, 4, 5]];
        b.iter(|| greater.evaluate(black_box(&args)))
    });
}

criterion_group!(benches, bench_validate, bench_rules);
criterion_main!(benches);
