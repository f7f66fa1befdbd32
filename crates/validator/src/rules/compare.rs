//! `greaterThan` and `lessThan`
//!
//! Both rules take a comparer followed by one or more operands. Every
//! argument is reduced to an `f64` magnitude (see [`Operand::magnitude`]) and
//! each operand must compare strictly against the comparer's magnitude.

use crate::foundation::{
    ContractViolation, LengthMode, Operand, Rule, RuleError, RuleResult, ValidationError,
};

/// Which way a comparison rule compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Operands must be strictly greater than the comparer.
    Greater,
    /// Operands must be strictly less than the comparer.
    Less,
}

impl Direction {
    fn holds(self, value: f64, comparer: f64) -> bool {
        match self {
            Direction::Greater => value > comparer,
            Direction::Less => value < comparer,
        }
    }

    fn rule_name(self) -> &'static str {
        match self {
            Direction::Greater => super::GREATER_THAN,
            Direction::Less => super::LESS_THAN,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Direction::Greater => "greater_than",
            Direction::Less => "less_than",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Direction::Greater => "greater",
            Direction::Less => "less",
        }
    }
}

/// Strict comparison of every operand against a comparer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compare {
    /// Direction of the comparison.
    pub direction: Direction,
    /// How strings are measured.
    pub mode: LengthMode,
}

impl Compare {
    /// `greaterThan(comparer, operand...)`.
    pub fn greater_than(mode: LengthMode) -> Self {
        Self {
            direction: Direction::Greater,
            mode,
        }
    }

    /// `lessThan(comparer, operand...)`.
    pub fn less_than(mode: LengthMode) -> Self {
        Self {
            direction: Direction::Less,
            mode,
        }
    }
}

impl Rule for Compare {
    fn evaluate(&self, args: &[Operand<'_>]) -> RuleResult {
        let rule = self.direction.rule_name();

        let [first, rest @ ..] = args else {
            return Err(arity(rule, args.len()));
        };
        if rest.is_empty() {
            return Err(arity(rule, args.len()));
        }

        let Some(comparer) = first.magnitude(self.mode) else {
            return Err(ValidationError::unsupported_operand(rule, first.kind(), 1).into());
        };

        for (i, arg) in rest.iter().enumerate() {
            let position = i + 2;
            let Some(value) = arg.magnitude(self.mode) else {
                return Err(ValidationError::unsupported_operand(rule, arg.kind(), position).into());
            };

            if !self.direction.holds(value, comparer) {
                let message = format!(
                    "{rule}: parameter at position {position} (= {value}) is not {} than {comparer}",
                    self.direction.phrase(),
                );
                return Err(ValidationError::new(self.direction.code(), message)
                    .with_param("position", position.to_string())
                    .with_param("value", value.to_string())
                    .with_param("comparer", comparer.to_string())
                    .into());
            }
        }

        Ok(())
    }
}

fn arity(rule: &'static str, actual: usize) -> RuleError {
    ContractViolation::Arity {
        rule,
        expected: "at least 2",
        actual,
    }
    .into()
}
