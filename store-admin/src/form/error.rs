//! Rule form errors

use std::fmt;
use store_shared::{AppError, ErrorCode};
use thiserror::Error;

/// Which half of the rule a problem belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSide {
    Condition,
    Action,
}

impl RuleSide {
    /// Stored column for this side
    pub fn column(&self) -> &'static str {
        match self {
            Self::Condition => "condicao_json",
            Self::Action => "acao_json",
        }
    }
}

impl fmt::Display for RuleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition => f.write_str("condition"),
            Self::Action => f.write_str("action"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// Numeric input is empty, unparseable or not finite
    #[error("{field}: '{input}' is not a valid number")]
    InvalidNumber { field: String, input: String },

    /// Selected tag expects a control that is not rendered
    #[error("'{tag}' expects control '{control}', which is not rendered")]
    InconsistentState { tag: String, control: String },

    /// Stored document has no `tipo`
    #[error("Stored {side} has no 'tipo'")]
    MissingTag { side: RuleSide },

    /// Write to a control the current layout does not have
    #[error("Control '{control}' is not rendered")]
    NotRendered { control: String },
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        let message = err.to_string();
        match err {
            FormError::InvalidNumber { field, input } => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
                    .with_detail("field", field)
                    .with_detail("input", input)
            }
            FormError::InconsistentState { tag, control } => {
                AppError::with_message(ErrorCode::PromotionFormInconsistent, message)
                    .with_detail("tipo", tag)
                    .with_detail("control", control)
            }
            FormError::MissingTag { side } => {
                AppError::with_message(ErrorCode::PromotionRuleInvalid, message)
                    .with_detail("field", side.column())
            }
            FormError::NotRendered { control } => {
                AppError::with_message(ErrorCode::PromotionFormInconsistent, message)
                    .with_detail("control", control)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_maps_to_validation() {
        let err: AppError = FormError::InvalidNumber {
            field: "acao-valor".to_string(),
            input: "abc".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "acao-valor: 'abc' is not a valid number");
        let details = err.details.unwrap();
        assert_eq!(details["field"], "acao-valor");
        assert_eq!(details["input"], "abc");
    }

    #[test]
    fn test_missing_tag_names_column() {
        let err: AppError = FormError::MissingTag {
            side: RuleSide::Action,
        }
        .into();
        assert_eq!(err.code, ErrorCode::PromotionRuleInvalid);
        assert_eq!(err.details.unwrap()["field"], "acao_json");
    }
}
