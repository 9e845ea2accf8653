//! Promotion rules
//!
//! Typed form of the `condicao_json` / `acao_json` documents stored with
//! each promotion, plus the evaluator that applies them to an order.
//! The tag set is open: unknown tags survive a parse/serialize cycle as
//! `Other { tipo }`.

mod action;
mod condition;
pub mod evaluator;
mod weekday;

pub use action::*;
pub use condition::*;
pub use evaluator::{ActionOutcome, OrderContext, applicable_promotions};
pub use weekday::{UnknownWeekday, Weekday};

use serde_json::Value;
use thiserror::Error;

/// Structural problems in a stored rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("{tipo}: missing field '{field}'")]
    MissingField { tipo: String, field: &'static str },

    #[error("{tipo}: field '{field}' has the wrong type")]
    InvalidField { tipo: String, field: &'static str },

    #[error("{tipo}: field '{field}' is not a finite number")]
    NonFinite { tipo: String, field: &'static str },

    #[error("Malformed rule: {0}")]
    Malformed(String),
}

/// Read a required finite number field
pub(crate) fn finite_number(
    tipo: &str,
    field: &'static str,
    value: Option<&Value>,
) -> Result<f64, RuleError> {
    let Some(value) = value else {
        return Err(RuleError::MissingField {
            tipo: tipo.to_string(),
            field,
        });
    };
    let number = value.as_f64().ok_or_else(|| RuleError::InvalidField {
        tipo: tipo.to_string(),
        field,
    })?;
    if !number.is_finite() {
        return Err(RuleError::NonFinite {
            tipo: tipo.to_string(),
            field,
        });
    }
    Ok(number)
}
