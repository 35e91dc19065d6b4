//! Authored site content loaded into [`super::StaticCatalog`] at startup.

use chrono::NaiveDate;

use crate::domain::entities::{
    Callout, ImpactHighlight, ImpactStat, Panel, Post, PostCategory, Product, ProductCategory,
    SubscriptionPlan, Sustainability,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn panel(id: &str, title: &str, content: &str) -> Panel {
    Panel {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    category: ProductCategory,
    price: f64,
    short_description: &'static str,
    description: &'static str,
    badges: &'static [&'static str],
    sustainability: Option<Sustainability>,
    rating: Option<f32>,
    reviews_count: u32,
    in_stock: bool,
    featured: bool,
}

impl ProductSeed {
    fn build(self) -> Product {
        Product {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            price: self.price,
            currency: "USD".to_string(),
            short_description: self.short_description.to_string(),
            description: self.description.to_string(),
            image: format!("https://picsum.photos/seed/uh-{}/900/700", self.id),
            badges: strings(self.badges),
            sustainability: self.sustainability,
            rating: self.rating,
            reviews_count: self.reviews_count,
            in_stock: self.in_stock,
            featured: self.featured,
        }
    }
}

fn profile(
    score: u8,
    plastic_free: bool,
    vegan: bool,
    palm_oil_free: bool,
    packaging: &str,
) -> Option<Sustainability> {
    Some(Sustainability {
        carbon_score: Some(score),
        plastic_free: Some(plastic_free),
        vegan: Some(vegan),
        palm_oil_free: Some(palm_oil_free),
        packaging: Some(packaging.to_string()),
    })
}

pub fn products() -> Vec<Product> {
    vec![
        ProductSeed {
            id: "prod-001",
            name: "Refillable Dish Soap Concentrate",
            category: ProductCategory::Refills,
            price: 12.0,
            short_description: "Plant-based concentrate, makes 4 bottles.",
            description: "A citrus-scented dish soap concentrate that you dilute at home. One pouch refills your glass bottle four times, cutting shipping weight and plastic.",
            badges: &["Refill", "Best seller"],
            sustainability: profile(92, false, true, true, "Compostable pouch"),
            rating: Some(4.8),
            reviews_count: 214,
            in_stock: true,
            featured: true,
        }
        .build(),
        ProductSeed {
            id: "prod-002",
            name: "Beeswax Food Wraps (Set of 3)",
            category: ProductCategory::Kitchen,
            price: 18.0,
            short_description: "Reusable cling-film alternative.",
            description: "Organic cotton coated in beeswax, jojoba oil and tree resin. Wrap cheese, bread or half an avocado and wash in cool water to reuse for about a year.",
            badges: &["Reusable", "Plastic-free"],
            sustainability: profile(88, true, false, true, "Recycled paper sleeve"),
            rating: Some(4.6),
            reviews_count: 158,
            in_stock: true,
            featured: true,
        }
        .build(),
        ProductSeed {
            id: "prod-003",
            name: "Solid Shampoo Bar",
            category: ProductCategory::PersonalCare,
            price: 9.5,
            short_description: "Equivalent to three bottles of shampoo.",
            description: "A concentrated shampoo bar with coconut-derived cleansers and rosemary oil. Lathers in seconds and travels without leaks.",
            badges: &["Zero-waste", "Vegan"],
            sustainability: profile(95, true, true, true, "Cardboard box"),
            rating: Some(4.5),
            reviews_count: 302,
            in_stock: true,
            featured: true,
        }
        .build(),
        ProductSeed {
            id: "prod-004",
            name: "Bamboo Dish Brush",
            category: ProductCategory::Kitchen,
            price: 7.0,
            short_description: "Replaceable head, compostable handle.",
            description: "A sturdy bamboo brush with plant-fibre bristles. When the head wears out, swap it and keep the handle.",
            badges: &["Compostable"],
            sustainability: profile(84, true, true, true, "Paper band"),
            rating: Some(4.3),
            reviews_count: 97,
            in_stock: false,
            featured: false,
        }
        .build(),
        ProductSeed {
            id: "prod-005",
            name: "Laundry Powder Refill (2 kg)",
            category: ProductCategory::Refills,
            price: 21.0,
            short_description: "Enzyme-based, gentle on fabrics.",
            description: "A phosphate-free laundry powder that works at 30°C. Refill your tin and return the bag through our take-back scheme.",
            badges: &["Refill", "Take-back"],
            sustainability: profile(86, false, true, true, "Paper bag"),
            rating: Some(4.4),
            reviews_count: 121,
            in_stock: true,
            featured: false,
        }
        .build(),
        ProductSeed {
            id: "prod-006",
            name: "Organic Red Lentils (1 kg)",
            category: ProductCategory::Pantry,
            price: 6.5,
            short_description: "Bulk pantry staple from a regional farm.",
            description: "Split red lentils grown without synthetic pesticides. Cook in 15 minutes for soups, dals and salads.",
            badges: &["Local", "Organic"],
            sustainability: profile(78, false, true, true, "Paper bag"),
            rating: Some(4.7),
            reviews_count: 64,
            in_stock: true,
            featured: false,
        }
        .build(),
        ProductSeed {
            id: "prod-007",
            name: "Glass Storage Jar Set",
            category: ProductCategory::Kitchen,
            price: 29.0,
            short_description: "Three airtight jars for bulk buying.",
            description: "Borosilicate glass jars with bamboo lids and silicone seals. Built for refills and pantry organisation.",
            badges: &["Reusable"],
            sustainability: profile(74, true, true, true, "Corrugated cardboard"),
            rating: Some(4.9),
            reviews_count: 45,
            in_stock: true,
            featured: false,
        }
        .build(),
        ProductSeed {
            id: "prod-008",
            name: "Natural Deodorant Paste",
            category: ProductCategory::PersonalCare,
            price: 11.0,
            short_description: "Baking-soda free formula.",
            description: "A gentle deodorant with arrowroot and shea butter, scented with lavender. Applied with fingertips from a reusable tin.",
            badges: &["Sensitive skin"],
            sustainability: profile(81, true, false, true, "Aluminium tin"),
            rating: Some(4.1),
            reviews_count: 88,
            in_stock: true,
            featured: false,
        }
        .build(),
        ProductSeed {
            id: "prod-009",
            name: "Compost Caddy",
            category: ProductCategory::Home,
            price: 24.0,
            short_description: "Countertop bin with charcoal filter.",
            description: "A 5 litre steel caddy with a replaceable charcoal filter in the lid to keep kitchen scraps odour-free.",
            badges: &["Durable"],
            sustainability: profile(70, true, true, true, "Recycled cardboard"),
            rating: Some(4.2),
            reviews_count: 73,
            in_stock: true,
            featured: true,
        }
        .build(),
        ProductSeed {
            id: "prod-010",
            name: "Seasonal Pantry Bundle",
            category: ProductCategory::Pantry,
            price: 34.0,
            short_description: "Grains, legumes and spices for the month.",
            description: "A rotating selection from small suppliers. Contents change with the season and ship together to cut deliveries.",
            badges: &["Bundle", "Local"],
            sustainability: Some(Sustainability {
                carbon_score: Some(76),
                packaging: Some("Reusable crate".to_string()),
                ..Sustainability::default()
            }),
            rating: None,
            reviews_count: 0,
            in_stock: false,
            featured: false,
        }
        .build(),
        ProductSeed {
            id: "prod-011",
            name: "Linen Produce Bags (Set of 5)",
            category: ProductCategory::Home,
            price: 15.0,
            short_description: "Washable bags for loose fruit and veg.",
            description: "Drawstring linen bags in three sizes with tare weights printed on the label.",
            badges: &["Reusable", "Plastic-free"],
            sustainability: None,
            rating: Some(4.0),
            reviews_count: 39,
            in_stock: true,
            featured: false,
        }
        .build(),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "post-001".to_string(),
            slug: "one-pan-seasonal-veggie-bowl".to_string(),
            title: "One-pan seasonal veggie bowl (zero-waste friendly)".to_string(),
            category: PostCategory::Recipes,
            date: date(2026, 1, 30),
            author: "Urban Harvest Team".to_string(),
            read_time: "4 min".to_string(),
            excerpt: "A flexible, tasty bowl that uses whatever vegetables you already have, perfect for reducing food waste.".to_string(),
            content: strings(&[
                "Start by chopping leftover vegetables (carrots, beans, pumpkin, greens).",
                "Toss with olive oil, salt, pepper, and any spice mix you like.",
                "Roast or pan-sear until tender and slightly browned.",
                "Serve over rice, quinoa, or even leftover noodles.",
                "Top with a quick dressing: lemon + tahini + a splash of water.",
            ]),
            tags: strings(&["zero-waste", "meal-prep", "plant-based"]),
            cover_image: "https://picsum.photos/seed/uh-post-001/900/600".to_string(),
            callout: Some(Callout {
                title: "Sustainability tip".to_string(),
                text: "Keep a \"fridge clean-out\" box. Cook whatever's inside before buying new produce.".to_string(),
            }),
        },
        Post {
            id: "post-002".to_string(),
            slug: "how-to-start-a-kitchen-compost-setup".to_string(),
            title: "How to start composting in a small kitchen".to_string(),
            category: PostCategory::Guides,
            date: date(2026, 2, 2),
            author: "Community Contributor".to_string(),
            read_time: "6 min".to_string(),
            excerpt: "No garden? No problem. A simple countertop setup can reduce your food waste and keep your bin smell-free.".to_string(),
            content: strings(&[
                "Pick a container with a lid (or a compost caddy).",
                "Line it with newspaper or a compostable bag to reduce mess.",
                "Add browns: dry leaves, shredded paper, cardboard (small pieces).",
                "Add greens: fruit/veg peels, coffee grounds, tea leaves.",
                "Avoid: meat, oily food, and dairy in a small setup.",
                "Empty to a community compost point or compost service weekly.",
            ]),
            tags: strings(&["compost", "beginner", "home"]),
            cover_image: "https://picsum.photos/seed/uh-post-002/900/600".to_string(),
            callout: Some(Callout {
                title: "Quick win".to_string(),
                text: "Coffee grounds are great for balancing wet scraps, and they reduce odors.".to_string(),
            }),
        },
        Post {
            id: "post-003".to_string(),
            slug: "refill-vs-single-use-the-math".to_string(),
            title: "Refill vs single-use: the simple math behind it".to_string(),
            category: PostCategory::Tips,
            date: date(2026, 2, 5),
            author: "Urban Harvest Team".to_string(),
            read_time: "5 min".to_string(),
            excerpt: "Refills often cost less over time and cut packaging waste dramatically. Here's a simple way to compare options.".to_string(),
            content: strings(&[
                "Compare the price per 100ml/100g rather than the sticker price.",
                "Check packaging type: glass, aluminum, recycled plastic, compostable.",
                "Estimate how many bottles you use per month.",
                "Refill packs typically reduce packaging weight and volume.",
                "If available, choose local refills to reduce shipping emissions.",
            ]),
            tags: strings(&["refill", "plastic", "budget"]),
            cover_image: "https://picsum.photos/seed/uh-post-003/900/600".to_string(),
            callout: Some(Callout {
                title: "Try this".to_string(),
                text: "Take a photo of unit prices while shopping; it helps you spot the best value fast.".to_string(),
            }),
        },
        Post {
            id: "post-004".to_string(),
            slug: "community-spotlight-local-makers".to_string(),
            title: "Community spotlight: local makers doing it right".to_string(),
            category: PostCategory::Stories,
            date: date(2026, 2, 7),
            author: "Community Contributor".to_string(),
            read_time: "7 min".to_string(),
            excerpt: "Meet a few of our small suppliers and learn how they reduce waste, support fair wages, and keep quality high.".to_string(),
            content: strings(&[
                "Small-batch production reduces overstock and landfill waste.",
                "Transparent sourcing makes it easier to verify ethical practices.",
                "Durable packaging (or take-back programs) improves reusability.",
                "Local networks reduce transport distance and emissions.",
                "Community feedback helps makers improve products quickly.",
            ]),
            tags: strings(&["community", "local", "suppliers"]),
            cover_image: "https://picsum.photos/seed/uh-post-004/900/600".to_string(),
            callout: Some(Callout {
                title: "Support local".to_string(),
                text: "Buying small-batch often means fewer additives and better traceability.".to_string(),
            }),
        },
    ]
}

fn plan(
    id: &str,
    name: &str,
    price: f64,
    description: &str,
    features: &[&str],
    highlighted: bool,
    badge: &str,
) -> SubscriptionPlan {
    SubscriptionPlan {
        id: id.to_string(),
        name: name.to_string(),
        price,
        currency: "USD".to_string(),
        period: "month".to_string(),
        description: description.to_string(),
        features: strings(features),
        highlighted,
        badge: badge.to_string(),
    }
}

pub fn plans() -> Vec<SubscriptionPlan> {
    vec![
        plan(
            "plan-starter",
            "Starter",
            0.0,
            "Perfect for browsing and saving favorites.",
            &[
                "Save products to favorites",
                "Basic sustainability tips",
                "Monthly newsletter",
                "Access to public community posts",
            ],
            false,
            "Free",
        ),
        plan(
            "plan-plus",
            "Plus",
            7.0,
            "For everyday low-waste habits and recipes.",
            &[
                "Weekly recipe drops",
                "Seasonal swaps & shopping list",
                "Community comments & reactions",
                "Early access to new product launches",
            ],
            true,
            "Most popular",
        ),
        plan(
            "plan-green",
            "Green",
            19.0,
            "Best for refills and carbon-aware routines.",
            &[
                "Monthly refill bundle options",
                "Carbon footprint estimate per order",
                "Priority customer support",
                "Exclusive guides & workshops",
            ],
            false,
            "Best value",
        ),
    ]
}

fn stat(id: &str, label: &str, value: u64, unit: &str, note: &str) -> ImpactStat {
    ImpactStat {
        id: id.to_string(),
        label: label.to_string(),
        value,
        unit: unit.to_string(),
        note: note.to_string(),
    }
}

pub fn impact_stats() -> Vec<ImpactStat> {
    vec![
        stat(
            "co2_saved",
            "Estimated CO₂ saved",
            12_450,
            "kg",
            "Based on lower-impact packaging + optimized deliveries.",
        ),
        stat(
            "plastic_avoided",
            "Single-use plastic avoided",
            89_000,
            "items",
            "Refill packs + reusable options.",
        ),
        stat(
            "trees_supported",
            "Trees supported",
            320,
            "trees",
            "Partner reforestation contributions.",
        ),
        stat(
            "community_posts",
            "Community recipes & tips",
            540,
            "posts",
            "Shared by members of Urban Harvest.",
        ),
        stat(
            "orders_offset",
            "Orders with carbon offset",
            68,
            "%",
            "Opt-in offsets applied at checkout.",
        ),
        stat(
            "local_suppliers",
            "Local suppliers onboarded",
            27,
            "suppliers",
            "Small-batch makers and farms.",
        ),
    ]
}

pub fn impact_highlights() -> Vec<ImpactHighlight> {
    [
        (
            "packaging",
            "Low-impact packaging",
            "We prioritize recycled and recyclable materials and reduce filler wherever possible.",
        ),
        (
            "sourcing",
            "Ethical sourcing",
            "We work with suppliers who demonstrate fair labor, transparent sourcing, and responsible harvesting.",
        ),
        (
            "delivery",
            "Smarter deliveries",
            "Grouped dispatches and regional fulfillment reduce transport emissions and packaging waste.",
        ),
    ]
    .into_iter()
    .map(|(id, title, description)| ImpactHighlight {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn subscription_faq() -> Vec<Panel> {
    vec![
        panel(
            "faq-1",
            "Can I cancel anytime?",
            "Yes. You can cancel at any time from your dashboard, and your plan will remain active until the end of the billing period.",
        ),
        panel(
            "faq-2",
            "Do you offer student discounts?",
            "We occasionally run student and community discounts. Check the subscription page banner or newsletter for current offers.",
        ),
        panel(
            "faq-3",
            "How do refills work?",
            "Refills ship in reduced packaging. You reuse your main container and replace only what's needed each month.",
        ),
    ]
}

pub fn community_faq() -> Vec<Panel> {
    vec![
        panel(
            "faq-1",
            "Can anyone submit a post?",
            "Yes. Community posts are open to members. Submissions should be original, respectful, and practical. Recipes, sustainability tips, and short guides are all welcome.",
        ),
        panel(
            "faq-2",
            "What kind of content performs best?",
            "Short, actionable posts with simple steps. People love quick swaps, meal-prep ideas, and beginner-friendly guides that fit into busy routines.",
        ),
        panel(
            "faq-3",
            "How do you keep posts accessible?",
            "We encourage clear headings, short paragraphs, and descriptive titles. Images should include meaningful alt text, and content should avoid relying on color alone to communicate meaning.",
        ),
    ]
}

pub fn about_faq() -> Vec<Panel> {
    vec![
        panel(
            "faq-ethics",
            "How do you evaluate ethical sourcing?",
            "We prioritise suppliers who can demonstrate transparent sourcing, fair labour standards, and responsible harvesting or manufacturing practices. Where possible, we request documentation and certifications, and we maintain ongoing dialogue with our partners.",
        ),
        panel(
            "faq-carbon",
            "What does a carbon score represent?",
            "The carbon score is an internal comparative indicator based on packaging type, estimated transport distance, and product lifecycle considerations. It is designed to help users compare options quickly rather than provide a precise scientific calculation.",
        ),
        panel(
            "faq-packaging",
            "Why focus on refills and reusables?",
            "Refills and reusable formats reduce single-use packaging and often lower total material use over time. Small, consistent swaps in packaging have measurable impact when adopted at scale.",
        ),
    ]
}

pub fn about_process() -> Vec<Panel> {
    vec![
        panel(
            "step-1",
            "Evaluation",
            "Suppliers are assessed based on material sourcing, packaging, labour practices, and production transparency.",
        ),
        panel(
            "step-2",
            "Logistics optimisation",
            "Grouped deliveries and regional fulfilment are prioritised to reduce unnecessary transport emissions.",
        ),
        panel(
            "step-3",
            "Community feedback",
            "User feedback and product ratings inform continuous improvement and long-term supplier relationships.",
        ),
    ]
}
