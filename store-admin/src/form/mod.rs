//! Promotion rule form
//!
//! Form-side state of a promotion rule: which condition/action tag is
//! selected, which controls are rendered for it, and the conversion to
//! and from the stored `condicao_json` / `acao_json` documents.

mod error;
mod fields;
mod rule_form;

pub use error::{FormError, RuleSide};
pub use fields::{
    ACTION_VALUE_ID, CONDITION_VALUE_ID, ControlKind, FieldControl, FieldLayout, day_toggle_id,
    render_action_fields, render_condition_fields,
};
pub use rule_form::{EncodedRule, PromotionRuleForm};
