//! Promotion action (`acao_json`)

use super::RuleError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DESCONTO_PERCENTUAL: &str = "DESCONTO_PERCENTUAL";
pub const DESCONTO_FIXO: &str = "DESCONTO_FIXO";
pub const BRINDE: &str = "BRINDE";

/// Known action tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    PercentageDiscount,
    FixedDiscount,
    FreeGift,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::PercentageDiscount,
        ActionKind::FixedDiscount,
        ActionKind::FreeGift,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            DESCONTO_PERCENTUAL => Some(Self::PercentageDiscount),
            DESCONTO_FIXO => Some(Self::FixedDiscount),
            BRINDE => Some(Self::FreeGift),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::PercentageDiscount => DESCONTO_PERCENTUAL,
            Self::FixedDiscount => DESCONTO_FIXO,
            Self::FreeGift => BRINDE,
        }
    }

    /// Whether `valor` is numeric for this tag (gift names are free text)
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::FreeGift)
    }
}

/// Promotion action, tagged by `tipo`
///
/// ```json
/// {"tipo": "DESCONTO_PERCENTUAL", "valor": 10}
/// {"tipo": "DESCONTO_FIXO", "valor": 5.0}
/// {"tipo": "BRINDE", "valor": "Refrigerante"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawAction", try_from = "RawAction")]
pub enum RuleAction {
    /// Percent off (10 = 10%)
    PercentageDiscount { value: f64 },
    /// Currency amount off (5.0 = 5.00)
    FixedDiscount { value: f64 },
    /// Gift item name
    FreeGift { value: String },
    /// Unrecognized tag, carried through untouched
    Other { tipo: String },
}

impl RuleAction {
    pub fn tag(&self) -> &str {
        match self {
            Self::PercentageDiscount { .. } => DESCONTO_PERCENTUAL,
            Self::FixedDiscount { .. } => DESCONTO_FIXO,
            Self::FreeGift { .. } => BRINDE,
            Self::Other { tipo } => tipo,
        }
    }

    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::PercentageDiscount { .. } => Some(ActionKind::PercentageDiscount),
            Self::FixedDiscount { .. } => Some(ActionKind::FixedDiscount),
            Self::FreeGift { .. } => Some(ActionKind::FreeGift),
            Self::Other { .. } => None,
        }
    }

    /// Parse a stored `acao_json` value
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        serde_json::from_value(value).map_err(|e| RuleError::Malformed(e.to_string()))
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(RawAction::from(self.clone())).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAction {
    tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor: Option<Value>,
}

impl From<RuleAction> for RawAction {
    fn from(action: RuleAction) -> Self {
        let (tipo, valor) = match action {
            RuleAction::PercentageDiscount { value } => {
                (DESCONTO_PERCENTUAL.to_string(), Some(Value::from(value)))
            }
            RuleAction::FixedDiscount { value } => {
                (DESCONTO_FIXO.to_string(), Some(Value::from(value)))
            }
            RuleAction::FreeGift { value } => (BRINDE.to_string(), Some(Value::String(value))),
            RuleAction::Other { tipo } => (tipo, None),
        };
        Self { tipo, valor }
    }
}

impl TryFrom<RawAction> for RuleAction {
    type Error = RuleError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let Some(kind) = ActionKind::from_tag(&raw.tipo) else {
            return Ok(Self::Other { tipo: raw.tipo });
        };
        match kind {
            ActionKind::PercentageDiscount => Ok(Self::PercentageDiscount {
                value: super::finite_number(&raw.tipo, "valor", raw.valor.as_ref())?,
            }),
            ActionKind::FixedDiscount => Ok(Self::FixedDiscount {
                value: super::finite_number(&raw.tipo, "valor", raw.valor.as_ref())?,
            }),
            ActionKind::FreeGift => match raw.valor {
                Some(Value::String(value)) => Ok(Self::FreeGift { value }),
                Some(_) => Err(RuleError::InvalidField {
                    tipo: raw.tipo,
                    field: "valor",
                }),
                None => Err(RuleError::MissingField {
                    tipo: raw.tipo,
                    field: "valor",
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_actions_wire_shape() {
        let pct = RuleAction::PercentageDiscount { value: 10.0 };
        assert_eq!(pct.to_value(), json!({"tipo": "DESCONTO_PERCENTUAL", "valor": 10.0}));

        let fixed = RuleAction::FixedDiscount { value: 5.5 };
        assert_eq!(fixed.to_value(), json!({"tipo": "DESCONTO_FIXO", "valor": 5.5}));
    }

    #[test]
    fn test_gift_keeps_text() {
        let gift = RuleAction::from_value(json!({"tipo": "BRINDE", "valor": "Refrigerante"})).unwrap();
        assert_eq!(
            gift,
            RuleAction::FreeGift {
                value: "Refrigerante".to_string()
            }
        );
        assert_eq!(gift.to_value(), json!({"tipo": "BRINDE", "valor": "Refrigerante"}));
    }

    #[test]
    fn test_gift_rejects_number() {
        let err = RuleAction::from_value(json!({"tipo": "BRINDE", "valor": 3})).unwrap_err();
        assert!(matches!(err, RuleError::Malformed(_)));
    }

    #[test]
    fn test_integer_valor_accepted() {
        let pct = RuleAction::from_value(json!({"tipo": "DESCONTO_PERCENTUAL", "valor": 10})).unwrap();
        assert_eq!(pct, RuleAction::PercentageDiscount { value: 10.0 });
    }

    #[test]
    fn test_other_action() {
        let other = RuleAction::from_value(json!({"tipo": "FRETE_GRATIS"})).unwrap();
        assert_eq!(other.tag(), "FRETE_GRATIS");
        assert_eq!(other.to_value(), json!({"tipo": "FRETE_GRATIS"}));
    }

    #[test]
    fn test_only_gift_is_textual() {
        assert!(ActionKind::PercentageDiscount.is_numeric());
        assert!(ActionKind::FixedDiscount.is_numeric());
        assert!(!ActionKind::FreeGift.is_numeric());
    }
}
