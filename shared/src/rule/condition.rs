//! Promotion condition (`condicao_json`)

use super::{RuleError, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag for day-of-week conditions
pub const DIA_SEMANA: &str = "DIA_SEMANA";
/// Tag for minimum-order-value conditions
pub const VALOR_MINIMO: &str = "VALOR_MINIMO";

/// Known condition tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    DayOfWeek,
    MinimumOrderValue,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 2] = [ConditionKind::DayOfWeek, ConditionKind::MinimumOrderValue];

    /// Resolve a wire tag, `None` for unknown tags
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            DIA_SEMANA => Some(Self::DayOfWeek),
            VALOR_MINIMO => Some(Self::MinimumOrderValue),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::DayOfWeek => DIA_SEMANA,
            Self::MinimumOrderValue => VALOR_MINIMO,
        }
    }
}

/// Promotion condition, tagged by `tipo`
///
/// ```json
/// {"tipo": "DIA_SEMANA", "dias": ["MON", "WED"]}
/// {"tipo": "VALOR_MINIMO", "valor": 50.0}
/// {"tipo": "COMBO_PRODUTOS"}
/// ```
///
/// Tags outside the known set are kept as [`RuleCondition::Other`] and
/// serialize back to `{"tipo": ...}` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawCondition", try_from = "RawCondition")]
pub enum RuleCondition {
    /// Applies on the listed days. An empty list applies on no day.
    DayOfWeek { days: Vec<Weekday> },
    /// Applies when the order subtotal reaches `value`
    MinimumOrderValue { value: f64 },
    /// Unrecognized tag, carried through untouched
    Other { tipo: String },
}

impl RuleCondition {
    /// Wire tag of this condition
    pub fn tag(&self) -> &str {
        match self {
            Self::DayOfWeek { .. } => DIA_SEMANA,
            Self::MinimumOrderValue { .. } => VALOR_MINIMO,
            Self::Other { tipo } => tipo,
        }
    }

    pub fn kind(&self) -> Option<ConditionKind> {
        match self {
            Self::DayOfWeek { .. } => Some(ConditionKind::DayOfWeek),
            Self::MinimumOrderValue { .. } => Some(ConditionKind::MinimumOrderValue),
            Self::Other { .. } => None,
        }
    }

    /// Parse a stored `condicao_json` value
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        serde_json::from_value(value).map_err(|e| RuleError::Malformed(e.to_string()))
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(RawCondition::from(self.clone())).unwrap_or(Value::Null)
    }
}

/// Flat wire shape shared by all condition tags
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCondition {
    tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dias: Option<Vec<Weekday>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valor: Option<Value>,
}

impl From<RuleCondition> for RawCondition {
    fn from(condition: RuleCondition) -> Self {
        match condition {
            RuleCondition::DayOfWeek { days } => Self {
                tipo: DIA_SEMANA.to_string(),
                dias: Some(days),
                valor: None,
            },
            RuleCondition::MinimumOrderValue { value } => Self {
                tipo: VALOR_MINIMO.to_string(),
                dias: None,
                valor: Some(Value::from(value)),
            },
            RuleCondition::Other { tipo } => Self {
                tipo,
                dias: None,
                valor: None,
            },
        }
    }
}

impl TryFrom<RawCondition> for RuleCondition {
    type Error = RuleError;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        match ConditionKind::from_tag(&raw.tipo) {
            Some(ConditionKind::DayOfWeek) => Ok(Self::DayOfWeek {
                days: raw.dias.unwrap_or_default(),
            }),
            Some(ConditionKind::MinimumOrderValue) => {
                let value = super::finite_number(&raw.tipo, "valor", raw.valor.as_ref())?;
                Ok(Self::MinimumOrderValue { value })
            }
            None => Ok(Self::Other { tipo: raw.tipo }),
        }
    }
}
