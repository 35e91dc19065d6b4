//! Filter and sort pipeline over the static collections.
//!
//! Both pipelines are pure functions of `(collection, criteria)`: they never
//! fabricate or duplicate items, and running them twice yields the same
//! order. Sorting uses the stable `sort_by`, so ties keep catalog order.

use std::str::FromStr;

use crate::domain::entities::{Post, PostCategory, Product, ProductCategory, UnknownCategory};

/// Category selection: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Parses `all` (or an empty value) as [`CategoryFilter::All`], anything
/// else as a category id.
impl<C: FromStr<Err = UnknownCategory>> FromStr for CategoryFilter<C> {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(CategoryFilter::All),
            id => id.parse().map(CategoryFilter::Only),
        }
    }
}

/// Coerces raw minimum-score input to a usable lower bound.
///
/// Non-numeric, non-finite and negative input all become `0.0`.
pub fn coerce_min_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Criteria for the product catalog. All criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCriteria {
    pub query: String,
    pub category: CategoryFilter<ProductCategory>,
    pub in_stock_only: bool,
    /// Inclusive lower bound on the carbon score; negative values act as 0.
    pub min_score: f64,
}

impl ProductCriteria {
    /// True when any criterion differs from "match everything".
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.category.is_all()
            || self.in_stock_only
            || self.min_score > 0.0
    }

    fn matches(&self, product: &Product, needle: &str) -> bool {
        self.category.matches(&product.category)
            && (!self.in_stock_only || product.in_stock)
            && f64::from(product.carbon_score()) >= self.min_score.max(0.0)
            && (needle.is_empty() || product_haystack(product).contains(needle))
    }
}

/// Criteria for community posts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostCriteria {
    pub query: String,
    pub category: CategoryFilter<PostCategory>,
}

impl PostCriteria {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !self.category.is_all()
    }

    fn matches(&self, post: &Post, needle: &str) -> bool {
        self.category.matches(&post.category)
            && (needle.is_empty() || post_haystack(post).contains(needle))
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn product_haystack(product: &Product) -> String {
    let mut parts: Vec<&str> = vec![
        product.name.as_str(),
        product.short_description.as_str(),
        product.description.as_str(),
        product.category.id(),
    ];
    parts.extend(product.badges.iter().map(String::as_str));
    parts.push(product.packaging().unwrap_or(""));
    parts.join(" ").to_lowercase()
}

fn post_haystack(post: &Post) -> String {
    let mut parts: Vec<&str> = vec![
        post.title.as_str(),
        post.excerpt.as_str(),
        post.author.as_str(),
        post.category.id(),
    ];
    parts.extend(post.tags.iter().map(String::as_str));
    parts.extend(post.content.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Filters products and orders them by featured flag, then carbon score
/// (descending), then rating (descending).
pub fn filter_products<'a>(products: &'a [Product], criteria: &ProductCriteria) -> Vec<&'a Product> {
    let needle = normalize_query(&criteria.query);

    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|p| criteria.matches(p, &needle))
        .collect();

    matches.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| b.carbon_score().cmp(&a.carbon_score()))
            .then_with(|| b.rating_or_lowest().total_cmp(&a.rating_or_lowest()))
    });

    matches
}

/// Filters posts and orders them newest first.
pub fn filter_posts<'a>(posts: &'a [Post], criteria: &PostCriteria) -> Vec<&'a Post> {
    let needle = normalize_query(&criteria.query);

    let mut matches: Vec<&Post> = posts
        .iter()
        .filter(|p| criteria.matches(p, &needle))
        .collect();

    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Sustainability;
    use chrono::NaiveDate;

    fn product(id: &str, featured: bool, score: Option<u8>, rating: Option<f32>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: ProductCategory::Kitchen,
            price: 10.0,
            currency: "USD".to_string(),
            short_description: String::new(),
            description: String::new(),
            image: String::new(),
            badges: vec![],
            sustainability: score.map(|s| Sustainability {
                carbon_score: Some(s),
                ..Sustainability::default()
            }),
            rating,
            reviews_count: 0,
            in_stock: true,
            featured,
        }
    }

    fn post(id: &str, day: u32, category: PostCategory) -> Post {
        Post {
            id: id.to_string(),
            slug: id.to_string(),
            title: format!("Post {id}"),
            category,
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            author: "Urban Harvest Team".to_string(),
            read_time: "3 min".to_string(),
            excerpt: String::new(),
            content: vec!["Rinse the lentils twice.".to_string()],
            tags: vec!["pantry".to_string()],
            cover_image: String::new(),
            callout: None,
        }
    }

    fn ids<'a>(items: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        items.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_featured_precedes_higher_score() {
        let products = vec![
            product("plain", false, Some(90), Some(5.0)),
            product("star", true, Some(40), Some(1.0)),
        ];

        let result = filter_products(&products, &ProductCriteria::default());
        assert_eq!(ids(result), vec!["star", "plain"]);
    }

    #[test]
    fn test_equal_score_ties_broken_by_rating() {
        let products = vec![
            product("low", false, Some(80), Some(3.9)),
            product("high", false, Some(80), Some(4.7)),
            product("unrated", false, Some(80), None),
        ];

        let result = filter_products(&products, &ProductCriteria::default());
        assert_eq!(ids(result), vec!["high", "low", "unrated"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let products = vec![
            product("a", false, Some(70), Some(4.0)),
            product("b", false, Some(70), Some(4.0)),
            product("c", false, Some(70), Some(4.0)),
        ];

        let result = filter_products(&products, &ProductCriteria::default());
        assert_eq!(ids(result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_score_sorts_as_zero() {
        let products = vec![
            product("none", false, None, Some(5.0)),
            product("some", false, Some(1), Some(1.0)),
        ];

        let result = filter_products(&products, &ProductCriteria::default());
        assert_eq!(ids(result), vec!["some", "none"]);
    }

    #[test]
    fn test_output_is_subset_without_duplicates_and_idempotent() {
        let products: Vec<Product> = (0..12)
            .map(|i| {
                product(
                    &format!("p{i}"),
                    i % 3 == 0,
                    Some((i * 7 % 100) as u8),
                    Some(i as f32 / 3.0),
                )
            })
            .collect();
        let criteria = ProductCriteria {
            min_score: 20.0,
            ..ProductCriteria::default()
        };

        let first = filter_products(&products, &criteria);
        let second = filter_products(&products, &criteria);
        assert_eq!(ids(first.clone()), ids(second));

        let mut seen = std::collections::HashSet::new();
        for p in &first {
            assert!(products.iter().any(|q| std::ptr::eq(q, *p)));
            assert!(seen.insert(p.id.clone()));
        }
    }

    #[test]
    fn test_negative_min_score_excludes_nothing() {
        let products = vec![
            product("zero", false, Some(0), None),
            product("missing", false, None, None),
        ];
        let criteria = ProductCriteria {
            min_score: -5.0,
            ..ProductCriteria::default()
        };

        assert_eq!(filter_products(&products, &criteria).len(), 2);
        assert_eq!(coerce_min_score("-5"), 0.0);
    }

    #[test]
    fn test_min_score_is_inclusive() {
        let products = vec![
            product("edge", false, Some(80), None),
            product("below", false, Some(79), None),
        ];
        let criteria = ProductCriteria {
            min_score: coerce_min_score("80"),
            ..ProductCriteria::default()
        };

        assert_eq!(ids(filter_products(&products, &criteria)), vec!["edge"]);
    }

    #[test]
    fn test_coerce_min_score() {
        assert_eq!(coerce_min_score(""), 0.0);
        assert_eq!(coerce_min_score("abc"), 0.0);
        assert_eq!(coerce_min_score("NaN"), 0.0);
        assert_eq!(coerce_min_score("inf"), 0.0);
        assert_eq!(coerce_min_score(" 75 "), 75.0);
        assert_eq!(coerce_min_score("62.5"), 62.5);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let mut wraps = product("wraps", false, Some(88), None);
        wraps.badges = vec!["Plastic-free".to_string()];
        let mut tin = product("tin", false, Some(81), None);
        tin.sustainability.as_mut().unwrap().packaging = Some("Aluminium tin".to_string());
        let products = vec![wraps, tin];

        let by_badge = ProductCriteria {
            query: "  PLASTIC ".to_string(),
            ..ProductCriteria::default()
        };
        assert_eq!(ids(filter_products(&products, &by_badge)), vec!["wraps"]);

        let by_packaging = ProductCriteria {
            query: "aluminium".to_string(),
            ..ProductCriteria::default()
        };
        assert_eq!(ids(filter_products(&products, &by_packaging)), vec!["tin"]);

        let by_category = ProductCriteria {
            query: "kitchen".to_string(),
            ..ProductCriteria::default()
        };
        assert_eq!(filter_products(&products, &by_category).len(), 2);
    }

    #[test]
    fn test_category_and_stock_filters() {
        let mut soap = product("soap", false, Some(90), None);
        soap.category = ProductCategory::Refills;
        let mut brush = product("brush", false, Some(84), None);
        brush.in_stock = false;
        let products = vec![soap, brush];

        let refills = ProductCriteria {
            category: CategoryFilter::Only(ProductCategory::Refills),
            ..ProductCriteria::default()
        };
        assert_eq!(ids(filter_products(&products, &refills)), vec!["soap"]);

        let in_stock = ProductCriteria {
            in_stock_only: true,
            ..ProductCriteria::default()
        };
        assert_eq!(ids(filter_products(&products, &in_stock)), vec!["soap"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let products = vec![product("a", true, Some(90), Some(4.0))];
        let criteria = ProductCriteria {
            query: "nothing matches this".to_string(),
            ..ProductCriteria::default()
        };

        assert!(filter_products(&products, &criteria).is_empty());
    }

    #[test]
    fn test_criteria_activity() {
        assert!(!ProductCriteria::default().is_active());
        assert!(
            !ProductCriteria {
                query: "   ".to_string(),
                min_score: 0.0,
                ..ProductCriteria::default()
            }
            .is_active()
        );
        assert!(
            ProductCriteria {
                in_stock_only: true,
                ..ProductCriteria::default()
            }
            .is_active()
        );
        assert!(
            PostCriteria {
                category: CategoryFilter::Only(PostCategory::Tips),
                ..PostCriteria::default()
            }
            .is_active()
        );
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(
            "all".parse::<CategoryFilter<ProductCategory>>(),
            Ok(CategoryFilter::All)
        );
        assert_eq!(
            "".parse::<CategoryFilter<PostCategory>>(),
            Ok(CategoryFilter::All)
        );
        assert_eq!(
            "personal-care".parse::<CategoryFilter<ProductCategory>>(),
            Ok(CategoryFilter::Only(ProductCategory::PersonalCare))
        );
        assert!("gadgets".parse::<CategoryFilter<ProductCategory>>().is_err());
    }

    #[test]
    fn test_posts_newest_first_with_stable_ties() {
        let posts = vec![
            post("old", 1, PostCategory::Recipes),
            post("same-a", 5, PostCategory::Tips),
            post("new", 7, PostCategory::Stories),
            post("same-b", 5, PostCategory::Guides),
        ];

        let result: Vec<&str> = filter_posts(&posts, &PostCriteria::default())
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(result, vec!["new", "same-a", "same-b", "old"]);
    }

    #[test]
    fn test_post_query_searches_tags_author_and_body() {
        let posts = vec![post("a", 1, PostCategory::Recipes)];

        for query in ["PANTRY", "lentils", "harvest team", "recipes"] {
            let criteria = PostCriteria {
                query: query.to_string(),
                ..PostCriteria::default()
            };
            assert_eq!(filter_posts(&posts, &criteria).len(), 1, "query {query}");
        }
    }

    #[test]
    fn test_post_category_filter() {
        let posts = vec![
            post("a", 1, PostCategory::Recipes),
            post("b", 2, PostCategory::Guides),
        ];
        let criteria = PostCriteria {
            category: CategoryFilter::Only(PostCategory::Guides),
            ..PostCriteria::default()
        };

        let result = filter_posts(&posts, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }
}
