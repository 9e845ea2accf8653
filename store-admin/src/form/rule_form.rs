//! Condition/action codec for the promotion form

use super::error::{FormError, RuleSide};
use super::fields::{
    ACTION_VALUE_ID, CONDITION_VALUE_ID, ControlKind, FieldLayout, day_toggle_id,
    render_action_fields, render_condition_fields,
};
use serde_json::Value;
use store_shared::rule::{ActionKind, ConditionKind, RuleAction, RuleCondition, Weekday};

/// Rule produced by [`PromotionRuleForm::encode`]
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRule {
    pub condition: RuleCondition,
    pub action: RuleAction,
}

impl EncodedRule {
    pub fn condition_json(&self) -> Value {
        self.condition.to_value()
    }

    pub fn action_json(&self) -> Value {
        self.action.to_value()
    }
}

/// Selected tags plus the controls rendered for them
///
/// The layouts always belong to the current tags: selecting a tag
/// re-renders its layout from scratch, so previously typed values are
/// discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionRuleForm {
    condition_tag: String,
    condition_fields: FieldLayout,
    action_tag: String,
    action_fields: FieldLayout,
}

impl PromotionRuleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition_tag(&self) -> &str {
        &self.condition_tag
    }

    pub fn action_tag(&self) -> &str {
        &self.action_tag
    }

    pub fn condition_fields(&self) -> &FieldLayout {
        &self.condition_fields
    }

    pub fn action_fields(&self) -> &FieldLayout {
        &self.action_fields
    }

    /// Raw access to the rendered condition controls
    pub fn condition_fields_mut(&mut self) -> &mut FieldLayout {
        &mut self.condition_fields
    }

    /// Raw access to the rendered action controls
    pub fn action_fields_mut(&mut self) -> &mut FieldLayout {
        &mut self.action_fields
    }

    pub fn select_condition(&mut self, tag: impl Into<String>) {
        self.condition_tag = tag.into();
        self.condition_fields = render_condition_fields(&self.condition_tag);
    }

    pub fn select_action(&mut self, tag: impl Into<String>) {
        self.action_tag = tag.into();
        self.action_fields = render_action_fields(&self.action_tag);
    }

    /// Back to no selection and no controls
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_day(&mut self, day: Weekday, checked: bool) -> Result<(), FormError> {
        let id = day_toggle_id(day);
        match self.condition_fields.get_mut(&id).map(|c| &mut c.kind) {
            Some(ControlKind::Toggle { checked: state, .. }) => {
                *state = checked;
                Ok(())
            }
            _ => Err(FormError::NotRendered { control: id }),
        }
    }

    /// Type into the condition value input
    pub fn set_condition_value(&mut self, input: impl Into<String>) -> Result<(), FormError> {
        set_input(&mut self.condition_fields, CONDITION_VALUE_ID, input.into())
    }

    /// Type into the action value input
    pub fn set_action_value(&mut self, input: impl Into<String>) -> Result<(), FormError> {
        set_input(&mut self.action_fields, ACTION_VALUE_ID, input.into())
    }

    /// Days currently checked, MON..SUN
    pub fn checked_days(&self) -> Vec<Weekday> {
        self.condition_fields.checked_days()
    }

    /// Build the rule from the current form state
    ///
    /// Fails when a numeric input does not hold a finite number, or when
    /// the selected tag expects a control that is not rendered. Unknown
    /// tags (including the empty tag) encode as `{"tipo": tag}`.
    pub fn encode(&self) -> Result<EncodedRule, FormError> {
        Ok(EncodedRule {
            condition: self.encode_condition()?,
            action: self.encode_action()?,
        })
    }

    fn encode_condition(&self) -> Result<RuleCondition, FormError> {
        let tag = self.condition_tag.as_str();
        match ConditionKind::from_tag(tag) {
            Some(ConditionKind::DayOfWeek) => {
                let mut days = Vec::new();
                for day in Weekday::ALL {
                    let id = day_toggle_id(day);
                    match self.condition_fields.get(&id).map(|c| &c.kind) {
                        Some(ControlKind::Toggle { checked, .. }) => {
                            if *checked {
                                days.push(day);
                            }
                        }
                        _ => return Err(inconsistent(tag, &id)),
                    }
                }
                Ok(RuleCondition::DayOfWeek { days })
            }
            Some(ConditionKind::MinimumOrderValue) => {
                let input = number_input(&self.condition_fields, CONDITION_VALUE_ID)
                    .ok_or_else(|| inconsistent(tag, CONDITION_VALUE_ID))?;
                Ok(RuleCondition::MinimumOrderValue {
                    value: parse_number(CONDITION_VALUE_ID, input)?,
                })
            }
            None => Ok(RuleCondition::Other {
                tipo: tag.to_string(),
            }),
        }
    }

    fn encode_action(&self) -> Result<RuleAction, FormError> {
        let tag = self.action_tag.as_str();
        let Some(kind) = ActionKind::from_tag(tag) else {
            return Ok(RuleAction::Other {
                tipo: tag.to_string(),
            });
        };

        if !kind.is_numeric() {
            let value = match self.action_fields.get(ACTION_VALUE_ID).map(|c| &c.kind) {
                Some(ControlKind::Text { input }) => input.clone(),
                _ => return Err(inconsistent(tag, ACTION_VALUE_ID)),
            };
            return Ok(RuleAction::FreeGift { value });
        }

        let input = number_input(&self.action_fields, ACTION_VALUE_ID)
            .ok_or_else(|| inconsistent(tag, ACTION_VALUE_ID))?;
        let value = parse_number(ACTION_VALUE_ID, input)?;
        Ok(match kind {
            ActionKind::FixedDiscount => RuleAction::FixedDiscount { value },
            _ => RuleAction::PercentageDiscount { value },
        })
    }

    /// Load stored rule documents into the form
    ///
    /// Both documents must carry a `tipo`; this is checked before anything
    /// is touched, so a failed decode leaves the form as it was. Missing or
    /// mistyped sub-fields leave the matching control at its default, and
    /// day symbols outside MON..SUN are ignored.
    pub fn decode(&mut self, condition: &Value, action: &Value) -> Result<(), FormError> {
        let condition_tag = read_tag(condition, RuleSide::Condition)?;
        let action_tag = read_tag(action, RuleSide::Action)?;

        self.select_condition(condition_tag);
        match ConditionKind::from_tag(condition_tag) {
            Some(ConditionKind::DayOfWeek) => {
                let symbols = condition.get("dias").and_then(Value::as_array);
                for day in symbols.into_iter().flatten().filter_map(as_weekday) {
                    self.set_day(day, true)?;
                }
            }
            Some(ConditionKind::MinimumOrderValue) => {
                if let Some(input) = condition.get("valor").and_then(number_text) {
                    self.set_condition_value(input)?;
                }
            }
            None => {
                tracing::debug!(tipo = condition_tag, "No controls for condition tag");
            }
        }

        self.select_action(action_tag);
        let valor = action.get("valor");
        let input = match ActionKind::from_tag(action_tag) {
            Some(kind) if kind.is_numeric() => valor.and_then(number_text),
            Some(_) => valor.and_then(Value::as_str).map(str::to_string),
            None => {
                tracing::debug!(tipo = action_tag, "No controls for action tag");
                None
            }
        };
        if let Some(input) = input {
            self.set_action_value(input)?;
        }
        Ok(())
    }
}

fn inconsistent(tag: &str, control: &str) -> FormError {
    FormError::InconsistentState {
        tag: tag.to_string(),
        control: control.to_string(),
    }
}

fn set_input(layout: &mut FieldLayout, id: &str, value: String) -> Result<(), FormError> {
    match layout.get_mut(id).map(|c| &mut c.kind) {
        Some(ControlKind::Number { input }) | Some(ControlKind::Text { input }) => {
            *input = value;
            Ok(())
        }
        _ => Err(FormError::NotRendered {
            control: id.to_string(),
        }),
    }
}

fn number_input<'a>(layout: &'a FieldLayout, id: &str) -> Option<&'a str> {
    match layout.get(id).map(|c| &c.kind) {
        Some(ControlKind::Number { input }) => Some(input),
        _ => None,
    }
}

/// Strict decimal parse: surrounding whitespace is allowed, trailing
/// garbage, empty input and non-finite values are not.
fn parse_number(field: &str, input: &str) -> Result<f64, FormError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field: field.to_string(),
            input: input.to_string(),
        })
}

fn read_tag(doc: &Value, side: RuleSide) -> Result<&str, FormError> {
    doc.get("tipo")
        .and_then(Value::as_str)
        .ok_or(FormError::MissingTag { side })
}

fn as_weekday(symbol: &Value) -> Option<Weekday> {
    symbol.as_str()?.parse().ok()
}

/// Numeric `valor` as typed into its input (50.0 -> "50")
fn number_text(valor: &Value) -> Option<String> {
    valor.as_f64().map(|n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("f", "50").unwrap(), 50.0);
        assert_eq!(parse_number("f", " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_number("f", "-3").unwrap(), -3.0);
        for bad in ["", "   ", "abc", "50abc", "NaN", "inf", "-infinity", "1e400"] {
            assert!(parse_number("f", bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_number_text_drops_whole_fraction() {
        assert_eq!(number_text(&json!(50.0)).as_deref(), Some("50"));
        assert_eq!(number_text(&json!(50)).as_deref(), Some("50"));
        assert_eq!(number_text(&json!(12.75)).as_deref(), Some("12.75"));
        assert_eq!(number_text(&json!("50")), None);
        assert_eq!(number_text(&json!(null)), None);
    }

    #[test]
    fn test_decode_ignores_mistyped_valor() {
        let mut form = PromotionRuleForm::new();
        form.decode(
            &json!({"tipo": "VALOR_MINIMO", "valor": "50"}),
            &json!({"tipo": "BRINDE", "valor": 3}),
        )
        .unwrap();

        assert_eq!(
            form.condition_fields().controls()[0].kind,
            ControlKind::Number {
                input: String::new()
            }
        );
        assert_eq!(
            form.action_fields().controls()[0].kind,
            ControlKind::Text {
                input: String::new()
            }
        );
    }

    #[test]
    fn test_set_day_requires_toggle() {
        let mut form = PromotionRuleForm::new();
        form.select_condition("VALOR_MINIMO");
        assert_eq!(
            form.set_day(Weekday::Mon, true),
            Err(FormError::NotRendered {
                control: "dia-mon".to_string()
            })
        );
    }

    #[test]
    fn test_reselect_discards_values() {
        let mut form = PromotionRuleForm::new();
        form.select_action("DESCONTO_FIXO");
        form.set_action_value("7").unwrap();
        form.select_action("DESCONTO_FIXO");
        assert!(matches!(
            form.encode_action(),
            Err(FormError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_number_control_swapped_for_text_is_inconsistent() {
        let mut form = PromotionRuleForm::new();
        form.select_action("BRINDE");
        form.set_action_value("10").unwrap();
        // Selected tag says numeric, rendered control is text
        form.action_tag = "DESCONTO_PERCENTUAL".to_string();
        assert_eq!(
            form.encode_action(),
            Err(FormError::InconsistentState {
                tag: "DESCONTO_PERCENTUAL".to_string(),
                control: ACTION_VALUE_ID.to_string()
            })
        );
    }
}
