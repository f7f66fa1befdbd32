//! Basic usage example for vouch

use vouch::prelude::*;

struct Person {
    name: String,
    email: String,
    age: i32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut validator = Validator::new();
    validator.register_type(|person: &Person, ctx| {
        ctx.check(NOT_EMPTY, [&person.name]).message("name required");
        ctx.check(IS_EMAIL, [&person.email]);
        ctx.check(GREATER_THAN, operands![0, person.age])
            .message("age must be positive");
    });

    let people = [
        Person {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            age: 30,
        },
        Person {
            name: "  ".into(),
            email: "bob@example.com".into(),
            age: 41,
        },
        Person {
            name: "Carol".into(),
            email: "carol at example.com".into(),
            age: 25,
        },
        Person {
            name: "Dave".into(),
            email: "dave@example.com".into(),
            age: -1,
        },
    ];

    for person in &people {
        match validator.validate(person) {
            Ok(()) => println!("✓ {:?} is valid", person.name),
            Err(e) => println!("✗ {:?} is invalid: {}", person.name, e),
        }
    }
}
