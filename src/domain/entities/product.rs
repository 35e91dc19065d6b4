//! Product entity and its sustainability attributes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fixed set of product categories shown in the catalog filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Refills,
    Kitchen,
    PersonalCare,
    Home,
    Pantry,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Refills,
        ProductCategory::Kitchen,
        ProductCategory::PersonalCare,
        ProductCategory::Home,
        ProductCategory::Pantry,
    ];

    /// Stable identifier used in URLs and JSON.
    pub fn id(self) -> &'static str {
        match self {
            ProductCategory::Refills => "refills",
            ProductCategory::Kitchen => "kitchen",
            ProductCategory::PersonalCare => "personal-care",
            ProductCategory::Home => "home",
            ProductCategory::Pantry => "pantry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Refills => "Refills",
            ProductCategory::Kitchen => "Kitchen",
            ProductCategory::PersonalCare => "Personal care",
            ProductCategory::Home => "Home",
            ProductCategory::Pantry => "Pantry",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Returned when a category id does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// Sustainability attributes of a product.
///
/// Every field is optional: a product may only publish part of its profile.
/// Readers fall back to neutral values (score 0, flags false).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sustainability {
    /// Comparative score in `0..=100`.
    pub carbon_score: Option<u8>,
    pub plastic_free: Option<bool>,
    pub vegan: Option<bool>,
    pub palm_oil_free: Option<bool>,
    /// Short packaging descriptor, e.g. "Aluminium tin".
    pub packaging: Option<String>,
}

impl Sustainability {
    pub fn score(&self) -> u8 {
        self.carbon_score.unwrap_or(0)
    }
}

/// A catalog product. Immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub currency: String,
    pub short_description: String,
    pub description: String,
    pub image: String,
    pub badges: Vec<String>,
    pub sustainability: Option<Sustainability>,
    /// Average rating in `0.0..=5.0`.
    pub rating: Option<f32>,
    pub reviews_count: u32,
    pub in_stock: bool,
    pub featured: bool,
}

impl Product {
    /// Carbon score with absent values treated as 0.
    pub fn carbon_score(&self) -> u8 {
        self.sustainability.as_ref().map_or(0, Sustainability::score)
    }

    /// Rating with absent values treated as the lowest possible rating.
    pub fn rating_or_lowest(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }

    pub fn packaging(&self) -> Option<&str> {
        self.sustainability
            .as_ref()
            .and_then(|s| s.packaging.as_deref())
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In stock"
        } else {
            "Currently unavailable"
        }
    }
}

/// Qualitative label for a carbon score.
pub fn score_label(score: u8) -> &'static str {
    match score {
        90.. => "Excellent",
        80..=89 => "Great",
        70..=79 => "Good",
        _ => "Fair",
    }
}

/// Formats an amount with its currency the way cards and plans display it.
///
/// Known currencies use their symbol (`$7.00`); anything else falls back to
/// `CODE 7.00`.
pub fn format_money(amount: f64, currency: &str) -> String {
    let symbol = match currency {
        "USD" | "AUD" | "CAD" | "NZD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    };

    match symbol {
        Some(symbol) => format!("{symbol}{amount:.2}"),
        None => format!("{currency} {amount:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sustainability: Option<Sustainability>, rating: Option<f32>) -> Product {
        Product {
            id: "p-test".to_string(),
            name: "Test".to_string(),
            category: ProductCategory::Home,
            price: 4.5,
            currency: "USD".to_string(),
            short_description: String::new(),
            description: String::new(),
            image: String::new(),
            badges: vec![],
            sustainability,
            rating,
            reviews_count: 0,
            in_stock: true,
            featured: false,
        }
    }

    #[test]
    fn test_category_round_trip_through_id() {
        for category in ProductCategory::ALL {
            assert_eq!(category.id().parse::<ProductCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "gadgets".parse::<ProductCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category 'gadgets'");
    }

    #[test]
    fn test_missing_attributes_default_to_neutral_values() {
        let p = product(None, None);
        assert_eq!(p.carbon_score(), 0);
        assert_eq!(p.rating_or_lowest(), 0.0);
        assert!(p.packaging().is_none());

        let partial = product(Some(Sustainability::default()), Some(4.2));
        assert_eq!(partial.carbon_score(), 0);
        assert_eq!(partial.rating_or_lowest(), 4.2);
    }

    #[test]
    fn test_score_label_thresholds() {
        assert_eq!(score_label(100), "Excellent");
        assert_eq!(score_label(90), "Excellent");
        assert_eq!(score_label(89), "Great");
        assert_eq!(score_label(80), "Great");
        assert_eq!(score_label(70), "Good");
        assert_eq!(score_label(69), "Fair");
        assert_eq!(score_label(0), "Fair");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(7.0, "USD"), "$7.00");
        assert_eq!(format_money(12.5, "EUR"), "€12.50");
        assert_eq!(format_money(3.0, "LKR"), "LKR 3.00");
    }

    #[test]
    fn test_stock_label() {
        let mut p = product(None, None);
        assert_eq!(p.stock_label(), "In stock");
        p.in_stock = false;
        assert_eq!(p.stock_label(), "Currently unavailable");
    }
}
