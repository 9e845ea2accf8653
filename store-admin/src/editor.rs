//! Promotion create/edit workflow

use crate::form::{EncodedRule, FormError, PromotionRuleForm};
use crate::session::EditingContext;
use crate::{ClientError, ClientResult, HttpClient};
use serde_json::Value;
use store_shared::models::{Promotion, PromotionCreate, PromotionUpdate};

/// Promotion form plus the record it edits
///
/// With no promotion open in the context, [`submit`](Self::submit)
/// creates a new promotion; otherwise it updates the open one.
#[derive(Debug, Clone, Default)]
pub struct PromotionEditor {
    pub name: String,
    pub description: String,
    form: PromotionRuleForm,
    context: EditingContext,
}

impl PromotionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor scoped to one tenant
    pub fn for_tenant(tenant_id: impl Into<String>) -> Self {
        let mut editor = Self::default();
        editor.context.begin_tenant(tenant_id);
        editor
    }

    pub fn form(&self) -> &PromotionRuleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PromotionRuleForm {
        &mut self.form
    }

    pub fn context(&self) -> &EditingContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditingContext {
        &mut self.context
    }

    pub fn is_editing(&self) -> bool {
        self.context.promotion().is_some()
    }

    /// Open a stored promotion
    ///
    /// An absent rule document loads as "nothing selected"; a document
    /// without `tipo` is refused and nothing changes.
    pub fn load_for_edit(&mut self, promotion: &Promotion) -> Result<(), FormError> {
        let condition = stored_or_unselected(&promotion.condicao_json);
        let action = stored_or_unselected(&promotion.acao_json);

        self.form.decode(&condition, &action)?;
        self.name = promotion.nome_promocao.clone();
        self.description = promotion.descricao_para_ia.clone().unwrap_or_default();
        self.context.begin_tenant(promotion.tenant_id.as_str());
        self.context.begin_promotion(promotion.id_promocao);
        Ok(())
    }

    fn description(&self) -> Option<String> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn build_create(&self, rule: EncodedRule) -> PromotionCreate {
        PromotionCreate {
            nome_promocao: self.name.trim().to_string(),
            descricao_para_ia: self.description(),
            condicao_json: rule.condition,
            acao_json: rule.action,
            is_ativa: true,
        }
    }

    /// Full replacement payload
    ///
    /// The description is always sent so that clearing it reaches the
    /// backend as an empty string.
    pub fn build_update(&self, rule: EncodedRule) -> PromotionUpdate {
        PromotionUpdate {
            nome_promocao: Some(self.name.trim().to_string()),
            descricao_para_ia: Some(self.description.trim().to_string()),
            condicao_json: Some(rule.condition),
            acao_json: Some(rule.action),
            is_ativa: Some(true),
        }
    }

    /// Save the form
    ///
    /// The rule is encoded before any request is made. On success the
    /// editor is reset and the promotion is closed; on failure form and
    /// context stay as they were so the user can retry.
    pub async fn submit(&mut self, client: &HttpClient, tenant_id: &str) -> ClientResult<Promotion> {
        if let Some(open) = self.context.tenant()
            && self.is_editing()
            && open != tenant_id
        {
            return Err(ClientError::Validation(format!(
                "Promotion being edited belongs to tenant {open}"
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("Promotion name is required".to_string()));
        }
        let rule = self.form.encode()?;

        let saved = match self.context.promotion() {
            Some(id) => {
                client
                    .update_promotion(tenant_id, id, &self.build_update(rule))
                    .await?
            }
            None => client.create_promotion(tenant_id, &self.build_create(rule)).await?,
        };

        self.reset();
        Ok(saved)
    }

    /// Drop edits and close the open promotion
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.form.reset();
        self.context.clear_promotion();
    }
}

fn stored_or_unselected(doc: &Option<Value>) -> Value {
    match doc {
        None | Some(Value::Null) => serde_json::json!({ "tipo": "" }),
        Some(v) => v.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ControlKind;
    use serde_json::json;
    use store_shared::rule::{RuleAction, RuleCondition, Weekday};

    fn promotion(condition: Option<Value>, action: Option<Value>) -> Promotion {
        Promotion {
            id_promocao: 12,
            tenant_id: "loja".to_string(),
            nome_promocao: "Sexta do Hambúrguer".to_string(),
            descricao_para_ia: Some("10% às sextas".to_string()),
            condicao_json: condition,
            acao_json: action,
            is_ativa: true,
        }
    }

    #[test]
    fn test_load_for_edit_fills_form_and_context() {
        let mut editor = PromotionEditor::for_tenant("loja");
        editor
            .load_for_edit(&promotion(
                Some(json!({"tipo": "DIA_SEMANA", "dias": ["FRI"]})),
                Some(json!({"tipo": "DESCONTO_PERCENTUAL", "valor": 10})),
            ))
            .unwrap();

        assert!(editor.is_editing());
        assert_eq!(editor.context().promotion(), Some(12));
        assert_eq!(editor.name, "Sexta do Hambúrguer");
        assert_eq!(editor.form().checked_days(), vec![Weekday::Fri]);

        let rule = editor.form().encode().unwrap();
        assert_eq!(rule.condition, RuleCondition::DayOfWeek { days: vec![Weekday::Fri] });
        assert_eq!(rule.action, RuleAction::PercentageDiscount { value: 10.0 });
    }

    #[test]
    fn test_load_without_rules_selects_nothing() {
        let mut editor = PromotionEditor::for_tenant("loja");
        editor.load_for_edit(&promotion(None, None)).unwrap();

        assert_eq!(editor.form().condition_tag(), "");
        assert!(editor.form().condition_fields().is_empty());
        assert!(editor.form().action_fields().is_empty());
    }

    #[test]
    fn test_load_without_tag_changes_nothing() {
        let mut editor = PromotionEditor::for_tenant("loja");
        editor.form_mut().select_action("BRINDE");
        editor.form_mut().set_action_value("Batata").unwrap();
        let before = editor.form().clone();

        let err = editor
            .load_for_edit(&promotion(Some(json!({"dias": ["MON"]})), None))
            .unwrap_err();

        assert!(matches!(err, FormError::MissingTag { .. }));
        assert_eq!(editor.form(), &before);
        assert!(!editor.is_editing());
        assert!(editor.name.is_empty());
    }

    #[test]
    fn test_cancel_resets_everything_but_tenant() {
        let mut editor = PromotionEditor::for_tenant("loja");
        editor
            .load_for_edit(&promotion(
                Some(json!({"tipo": "VALOR_MINIMO", "valor": 50.0})),
                Some(json!({"tipo": "BRINDE", "valor": "Refrigerante"})),
            ))
            .unwrap();
        assert!(matches!(
            editor.form().action_fields().controls()[0].kind,
            ControlKind::Text { .. }
        ));

        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(editor.context().tenant(), Some("loja"));
        assert_eq!(editor.form(), &PromotionRuleForm::default());
        assert!(editor.name.is_empty());
        assert!(editor.description.is_empty());
    }

    #[test]
    fn test_update_payload_reactivates() {
        let editor = PromotionEditor {
            name: "  Combo  ".to_string(),
            description: "   ".to_string(),
            ..Default::default()
        };
        let rule = EncodedRule {
            condition: RuleCondition::Other {
                tipo: String::new(),
            },
            action: RuleAction::FixedDiscount { value: 5.0 },
        };
        let update = editor.build_update(rule);
        assert_eq!(update.nome_promocao.as_deref(), Some("Combo"));
        assert_eq!(update.descricao_para_ia.as_deref(), Some(""));
        assert_eq!(update.is_ativa, Some(true));
    }
}
