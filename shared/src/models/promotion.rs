//! Promotion Model

use crate::error::{AppError, ErrorCode};
use crate::rule::{RuleAction, RuleCondition};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Promotion entity (promoção)
///
/// `condicao_json` / `acao_json` are kept as raw JSON: stored rows may
/// carry tags or fields this client does not know about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub id_promocao: i64,
    pub tenant_id: String,
    pub nome_promocao: String,
    /// Free text handed to the assistant that explains the promotion
    #[serde(default)]
    pub descricao_para_ia: Option<String>,
    #[serde(default)]
    pub condicao_json: Option<Value>,
    #[serde(default)]
    pub acao_json: Option<Value>,
    #[serde(default)]
    pub is_ativa: bool,
}

impl Promotion {
    /// Parse the stored condition, `None` when the promotion has none
    pub fn condition(&self) -> Result<Option<RuleCondition>, AppError> {
        match &self.condicao_json {
            None | Some(Value::Null) => Ok(None),
            Some(v) => RuleCondition::from_value(v.clone())
                .map(Some)
                .map_err(|e| invalid_rule(self.id_promocao, "condicao_json", e)),
        }
    }

    /// Parse the stored action, `None` when the promotion has none
    pub fn action(&self) -> Result<Option<RuleAction>, AppError> {
        match &self.acao_json {
            None | Some(Value::Null) => Ok(None),
            Some(v) => RuleAction::from_value(v.clone())
                .map(Some)
                .map_err(|e| invalid_rule(self.id_promocao, "acao_json", e)),
        }
    }
}

fn invalid_rule(id: i64, field: &str, err: crate::rule::RuleError) -> AppError {
    AppError::with_message(ErrorCode::PromotionRuleInvalid, err.to_string())
        .with_detail("promotion_id", id)
        .with_detail("field", field)
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionCreate {
    pub nome_promocao: String,
    pub descricao_para_ia: Option<String>,
    pub condicao_json: RuleCondition,
    pub acao_json: RuleAction,
    pub is_ativa: bool,
}

/// Update promotion payload (unset fields are left untouched by the backend)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromotionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_promocao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_para_ia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condicao_json: Option<RuleCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acao_json: Option<RuleAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ativa: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Weekday;
    use serde_json::json;

    #[test]
    fn test_create_payload_wire_shape() {
        let payload = PromotionCreate {
            nome_promocao: "Desconto de Verão".to_string(),
            descricao_para_ia: Some("Promoção de verão".to_string()),
            condicao_json: RuleCondition::DayOfWeek {
                days: vec![Weekday::Mon],
            },
            acao_json: RuleAction::PercentageDiscount { value: 10.0 },
            is_ativa: true,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "nome_promocao": "Desconto de Verão",
                "descricao_para_ia": "Promoção de verão",
                "condicao_json": {"tipo": "DIA_SEMANA", "dias": ["MON"]},
                "acao_json": {"tipo": "DESCONTO_PERCENTUAL", "valor": 10.0},
                "is_ativa": true
            })
        );
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = PromotionUpdate {
            is_ativa: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"is_ativa": true}));
    }

    #[test]
    fn test_promotion_without_rules() {
        let promo: Promotion = serde_json::from_value(json!({
            "id_promocao": 7,
            "tenant_id": "loja",
            "nome_promocao": "Promo A",
            "condicao_json": null,
            "is_ativa": true
        }))
        .unwrap();

        assert_eq!(promo.condition().unwrap(), None);
        assert_eq!(promo.action().unwrap(), None);
    }

    #[test]
    fn test_invalid_stored_rule_reports_code() {
        let promo = Promotion {
            id_promocao: 3,
            tenant_id: "loja".to_string(),
            nome_promocao: "Quebrada".to_string(),
            descricao_para_ia: None,
            condicao_json: Some(json!({"tipo": "VALOR_MINIMO", "valor": "abc"})),
            acao_json: None,
            is_ativa: true,
        };

        let err = promo.condition().unwrap_err();
        assert_eq!(err.code, ErrorCode::PromotionRuleInvalid);
        assert_eq!(err.details.unwrap()["field"], json!("condicao_json"));
    }
}
