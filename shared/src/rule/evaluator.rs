//! Promotion Rule Evaluator
//!
//! Checks conditions against an order and applies actions to a price.
//! Uses rust_decimal for the arithmetic, exposes f64.

use super::{RuleAction, RuleCondition, Weekday};
use crate::models::Promotion;
use chrono::Datelike;
use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Order facts a condition can look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderContext {
    pub weekday: Weekday,
    /// Order subtotal before promotions
    pub subtotal: f64,
}

impl OrderContext {
    pub fn new(weekday: Weekday, subtotal: f64) -> Self {
        Self { weekday, subtotal }
    }

    /// Context for an order placed now (local time)
    pub fn now(subtotal: f64) -> Self {
        Self::new(chrono::Local::now().weekday().into(), subtotal)
    }
}

/// Result of applying an action to a price
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub price: f64,
    /// Gift granted by a `BRINDE` action
    pub gift: Option<String>,
}

impl RuleCondition {
    /// Whether the order satisfies this condition
    ///
    /// An empty day set never matches. Unrecognized tags never match.
    pub fn is_satisfied(&self, ctx: &OrderContext) -> bool {
        match self {
            Self::DayOfWeek { days } => days.contains(&ctx.weekday),
            Self::MinimumOrderValue { value } => to_decimal(ctx.subtotal) >= to_decimal(*value),
            Self::Other { .. } => false,
        }
    }
}

impl RuleAction {
    /// Apply this action to `price`. Prices never go below zero.
    pub fn apply(&self, price: f64) -> ActionOutcome {
        let base = to_decimal(price);
        match self {
            Self::PercentageDiscount { value } => {
                let multiplier = Decimal::ONE - to_decimal(*value) / Decimal::ONE_HUNDRED;
                ActionOutcome {
                    price: to_f64((base * multiplier).max(Decimal::ZERO)),
                    gift: None,
                }
            }
            Self::FixedDiscount { value } => ActionOutcome {
                price: to_f64((base - to_decimal(*value)).max(Decimal::ZERO)),
                gift: None,
            },
            Self::FreeGift { value } => ActionOutcome {
                price: to_f64(base),
                gift: Some(value.clone()),
            },
            Self::Other { .. } => ActionOutcome {
                price: to_f64(base),
                gift: None,
            },
        }
    }
}

/// Active promotions whose condition holds for `ctx`
///
/// A promotion without a stored condition always applies. Promotions whose
/// stored rule cannot be parsed are skipped.
pub fn applicable_promotions<'a>(
    promotions: &'a [Promotion],
    ctx: &OrderContext,
) -> Vec<&'a Promotion> {
    promotions
        .iter()
        .filter(|p| p.is_ativa)
        .filter(|p| match p.condition() {
            Ok(Some(condition)) => condition.is_satisfied(ctx),
            Ok(None) => true,
            Err(e) => {
                tracing::warn!(promotion_id = p.id_promocao, error = %e, "Skipping promotion with invalid condition");
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn promotion(id: i64, condition: Option<serde_json::Value>, active: bool) -> Promotion {
        Promotion {
            id_promocao: id,
            tenant_id: "loja".to_string(),
            nome_promocao: format!("promo {id}"),
            descricao_para_ia: None,
            condicao_json: condition,
            acao_json: Some(json!({"tipo": "DESCONTO_PERCENTUAL", "valor": 10})),
            is_ativa: active,
        }
    }

    #[test]
    fn test_day_of_week_condition() {
        let cond = RuleCondition::DayOfWeek {
            days: vec![Weekday::Mon, Weekday::Fri],
        };
        assert!(cond.is_satisfied(&OrderContext::new(Weekday::Fri, 0.0)));
        assert!(!cond.is_satisfied(&OrderContext::new(Weekday::Sat, 0.0)));
    }

    #[test]
    fn test_empty_day_set_never_applies() {
        let cond = RuleCondition::DayOfWeek { days: vec![] };
        for day in Weekday::ALL {
            assert!(!cond.is_satisfied(&OrderContext::new(day, 100.0)));
        }
    }

    #[test]
    fn test_minimum_value_is_inclusive() {
        let cond = RuleCondition::MinimumOrderValue { value: 50.0 };
        assert!(cond.is_satisfied(&OrderContext::new(Weekday::Mon, 50.0)));
        assert!(cond.is_satisfied(&OrderContext::new(Weekday::Mon, 50.01)));
        assert!(!cond.is_satisfied(&OrderContext::new(Weekday::Mon, 49.99)));
    }

    #[test]
    fn test_unknown_condition_never_applies() {
        let cond = RuleCondition::Other {
            tipo: "COMBO".to_string(),
        };
        assert!(!cond.is_satisfied(&OrderContext::new(Weekday::Mon, 1000.0)));
    }

    #[test]
    fn test_percentage_discount() {
        let action = RuleAction::PercentageDiscount { value: 10.0 };
        assert_eq!(action.apply(100.0).price, 90.0);
        // 33% off 99.99 = 66.9933 -> 66.99
        let action = RuleAction::PercentageDiscount { value: 33.0 };
        assert_eq!(action.apply(99.99).price, 66.99);
    }

    #[test]
    fn test_fixed_discount_floors_at_zero() {
        let action = RuleAction::FixedDiscount { value: 5.0 };
        assert_eq!(action.apply(20.0).price, 15.0);
        assert_eq!(action.apply(3.0).price, 0.0);
    }

    #[test]
    fn test_gift_keeps_price() {
        let action = RuleAction::FreeGift {
            value: "Refrigerante".to_string(),
        };
        let outcome = action.apply(42.5);
        assert_eq!(outcome.price, 42.5);
        assert_eq!(outcome.gift.as_deref(), Some("Refrigerante"));
    }

    #[test]
    fn test_applicable_promotions_filters() {
        let promotions = vec![
            promotion(1, Some(json!({"tipo": "DIA_SEMANA", "dias": ["MON"]})), true),
            promotion(2, Some(json!({"tipo": "DIA_SEMANA", "dias": ["TUE"]})), true),
            promotion(3, None, true),
            promotion(4, None, false),
            promotion(5, Some(json!({"tipo": "VALOR_MINIMO"})), true),
            promotion(6, Some(json!({"tipo": "VALOR_MINIMO", "valor": 30})), true),
        ];
        let ctx = OrderContext::new(Weekday::Mon, 40.0);

        let ids: Vec<i64> = applicable_promotions(&promotions, &ctx)
            .iter()
            .map(|p| p.id_promocao)
            .collect();
        assert_eq!(ids, vec![1, 3, 6]);
    }
}
