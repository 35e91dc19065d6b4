//! Subscription plan entity.

use serde::Serialize;

use super::product::format_money;

/// A subscription tier offered on the sign-up page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    /// Billing period, e.g. "month".
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub badge: String,
}

impl SubscriptionPlan {
    /// "Free" for zero-priced plans, otherwise the formatted price.
    pub fn price_label(&self) -> String {
        if self.price == 0.0 {
            "Free".to_string()
        } else {
            format_money(self.price, &self.currency)
        }
    }

    /// Price with its billing period, e.g. "$7.00 / month".
    pub fn price_with_period(&self) -> String {
        format!("{} / {}", self.price_label(), self.period)
    }
}
