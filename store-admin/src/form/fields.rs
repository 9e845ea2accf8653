//! Rendered controls of the promotion rule form
//!
//! A [`FieldLayout`] is the set of inputs currently shown for one half of
//! the rule (condition or action). Layouts are rebuilt from scratch every
//! time the discriminator changes; nothing carries over.

use store_shared::rule::{ActionKind, ConditionKind, Weekday};

/// Id of the numeric input for `VALOR_MINIMO`
pub const CONDITION_VALUE_ID: &str = "condicao-valor";
/// Id of the value input for every known action tag
pub const ACTION_VALUE_ID: &str = "acao-valor";

/// Id of the toggle for `day` ("dia-mon", "dia-tue", ...)
pub fn day_toggle_id(day: Weekday) -> String {
    format!("dia-{}", day.symbol().to_ascii_lowercase())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Checkbox carrying a weekday value
    Toggle { value: Weekday, checked: bool },
    /// Numeric input, kept as typed
    Number { input: String },
    /// Free text input
    Text { input: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldControl {
    pub id: String,
    pub kind: ControlKind,
}

impl FieldControl {
    pub fn toggle(day: Weekday) -> Self {
        Self {
            id: day_toggle_id(day),
            kind: ControlKind::Toggle {
                value: day,
                checked: false,
            },
        }
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Number {
                input: String::new(),
            },
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Text {
                input: String::new(),
            },
        }
    }
}

/// Ordered set of rendered controls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldLayout {
    controls: Vec<FieldControl>,
}

impl FieldLayout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn controls(&self) -> &[FieldControl] {
        &self.controls
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FieldControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut FieldControl> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    pub fn push(&mut self, control: FieldControl) {
        self.controls.push(control);
    }

    /// Remove a control, returning it if it was rendered
    pub fn remove(&mut self, id: &str) -> Option<FieldControl> {
        let idx = self.controls.iter().position(|c| c.id == id)?;
        Some(self.controls.remove(idx))
    }

    /// Weekday values of every checked toggle, in layout order
    pub fn checked_days(&self) -> Vec<Weekday> {
        self.controls
            .iter()
            .filter_map(|c| match c.kind {
                ControlKind::Toggle {
                    value,
                    checked: true,
                } => Some(value),
                _ => None,
            })
            .collect()
    }
}

/// Controls for a condition tag
///
/// `DIA_SEMANA` gets one toggle per weekday, `VALOR_MINIMO` one numeric
/// input, anything else (including an empty tag) nothing.
pub fn render_condition_fields(tag: &str) -> FieldLayout {
    let mut layout = FieldLayout::empty();
    match ConditionKind::from_tag(tag) {
        Some(ConditionKind::DayOfWeek) => {
            for day in Weekday::ALL {
                layout.push(FieldControl::toggle(day));
            }
        }
        Some(ConditionKind::MinimumOrderValue) => {
            layout.push(FieldControl::number(CONDITION_VALUE_ID));
        }
        None => {}
    }
    layout
}

/// Controls for an action tag
pub fn render_action_fields(tag: &str) -> FieldLayout {
    let mut layout = FieldLayout::empty();
    match ActionKind::from_tag(tag) {
        Some(kind) if kind.is_numeric() => layout.push(FieldControl::number(ACTION_VALUE_ID)),
        Some(_) => layout.push(FieldControl::text(ACTION_VALUE_ID)),
        None => {}
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_renders_seven_unchecked_toggles() {
        let layout = render_condition_fields("DIA_SEMANA");
        assert_eq!(layout.controls().len(), 7);
        for (control, day) in layout.controls().iter().zip(Weekday::ALL) {
            assert_eq!(control.id, day_toggle_id(day));
            assert_eq!(
                control.kind,
                ControlKind::Toggle {
                    value: day,
                    checked: false
                }
            );
        }
        assert!(layout.checked_days().is_empty());
    }

    #[test]
    fn test_minimum_value_renders_number() {
        let layout = render_condition_fields("VALOR_MINIMO");
        assert_eq!(layout.controls(), &[FieldControl::number(CONDITION_VALUE_ID)]);
    }

    #[test]
    fn test_unknown_or_empty_condition_renders_nothing() {
        assert!(render_condition_fields("").is_empty());
        assert!(render_condition_fields("COMBO_PRODUTOS").is_empty());
        assert!(render_condition_fields("dia_semana").is_empty());
    }

    #[test]
    fn test_action_controls() {
        assert_eq!(
            render_action_fields("DESCONTO_PERCENTUAL").controls(),
            &[FieldControl::number(ACTION_VALUE_ID)]
        );
        assert_eq!(
            render_action_fields("DESCONTO_FIXO").controls(),
            &[FieldControl::number(ACTION_VALUE_ID)]
        );
        assert_eq!(
            render_action_fields("BRINDE").controls(),
            &[FieldControl::text(ACTION_VALUE_ID)]
        );
        assert!(render_action_fields("FRETE_GRATIS").is_empty());
    }

    #[test]
    fn test_remove_control() {
        let mut layout = render_condition_fields("VALOR_MINIMO");
        assert!(layout.remove(CONDITION_VALUE_ID).is_some());
        assert!(layout.remove(CONDITION_VALUE_ID).is_none());
        assert!(layout.is_empty());
    }
}
