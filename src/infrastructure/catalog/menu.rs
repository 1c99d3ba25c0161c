//! Static demo menu

use crate::domain::entities::{Ingredient, MenuItem, Nutrition, QuickFacts, RecipeDetails};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ingredients(items: &[(&str, &str)]) -> Vec<Ingredient> {
    items
        .iter()
        .map(|(name, qty)| Ingredient {
            name: name.to_string(),
            qty: qty.to_string(),
        })
        .collect()
}

fn quick_facts(kcal: u32, protein_g: u32, tags: &[&str]) -> QuickFacts {
    QuickFacts {
        kcal: Some(kcal),
        protein_g: Some(protein_g),
        tags: Some(strings(tags)),
    }
}

fn image(seed: &str, width: u32, height: u32) -> String {
    format!("https://picsum.photos/seed/{seed}/{width}/{height}")
}

/// The four dishes served by the demo server, in menu order
pub fn demo_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "r1".to_string(),
            title: "Garlic Lemon Salmon".to_string(),
            image_url: image("salmon", 512, 384),
            quick_facts: quick_facts(420, 35, &["pescatarian", "quick"]),
            details: RecipeDetails {
                ingredients: ingredients(&[
                    ("Salmon fillet", "200 g"),
                    ("Garlic", "2 cloves"),
                    ("Lemon", "1/2"),
                    ("Olive oil", "1 tbsp"),
                    ("Salt", "to taste"),
                ]),
                steps: strings(&[
                    "Pat salmon dry; season with salt.",
                    "Pan-sear 3–4 min/side; add garlic + lemon to finish.",
                ]),
                nutrition: Nutrition {
                    kcal: 420,
                    protein_g: 35,
                    carb_g: 2,
                    fat_g: 28,
                },
                benefits: strings(&["High in omega-3", "Good protein-to-calorie ratio"]),
                tags: strings(&["pescatarian", "quick", "gluten-free"]),
                image_url: image("salmon", 1024, 768),
            },
        },
        MenuItem {
            id: "r2".to_string(),
            title: "Spicy Chickpea Bowl".to_string(),
            image_url: image("chickpea", 512, 384),
            quick_facts: quick_facts(540, 22, &["vegan", "high-fiber"]),
            details: RecipeDetails {
                ingredients: ingredients(&[
                    ("Chickpeas (cooked)", "1 cup"),
                    ("Paprika", "1 tsp"),
                    ("Cumin", "1/2 tsp"),
                    ("Olive oil", "1 tbsp"),
                    ("Lemon", "1/2"),
                ]),
                steps: strings(&["Toast spices in oil.", "Toss chickpeas; finish with lemon."]),
                nutrition: Nutrition {
                    kcal: 540,
                    protein_g: 22,
                    carb_g: 68,
                    fat_g: 18,
                },
                benefits: strings(&["Plant protein", "Budget-friendly"]),
                tags: strings(&["vegan", "one-pan"]),
                image_url: image("chickpea", 1024, 768),
            },
        },
        MenuItem {
            id: "r3".to_string(),
            title: "Chicken Avocado Wrap".to_string(),
            image_url: image("wrap", 512, 384),
            quick_facts: quick_facts(610, 36, &["high-protein", "lunch"]),
            details: RecipeDetails {
                ingredients: ingredients(&[
                    ("Tortilla", "1 large"),
                    ("Chicken breast (cooked)", "150 g"),
                    ("Avocado", "1/2"),
                    ("Lettuce", "a handful"),
                    ("Yogurt sauce", "2 tbsp"),
                ]),
                steps: strings(&[
                    "Warm tortilla.",
                    "Layer chicken, avocado, lettuce; drizzle sauce; roll.",
                ]),
                nutrition: Nutrition {
                    kcal: 610,
                    protein_g: 36,
                    carb_g: 54,
                    fat_g: 26,
                },
                benefits: strings(&["Balanced macros", "Quick meal prep"]),
                tags: strings(&["high-protein", "meal-prep"]),
                image_url: image("wrap", 1024, 768),
            },
        },
        MenuItem {
            id: "r4".to_string(),
            title: "Caprese Pasta Salad".to_string(),
            image_url: image("caprese", 512, 384),
            quick_facts: quick_facts(480, 18, &["vegetarian", "summer"]),
            details: RecipeDetails {
                ingredients: ingredients(&[
                    ("Pasta", "120 g"),
                    ("Cherry tomatoes", "1 cup"),
                    ("Mozzarella", "100 g"),
                    ("Basil", "a handful"),
                    ("Olive oil", "1 tbsp"),
                ]),
                steps: strings(&[
                    "Cook pasta; cool.",
                    "Toss with tomatoes, mozzarella, basil, olive oil.",
                ]),
                nutrition: Nutrition {
                    kcal: 480,
                    protein_g: 18,
                    carb_g: 60,
                    fat_g: 18,
                },
                benefits: strings(&["Simple ingredients", "Crowd-pleaser"]),
                tags: strings(&["vegetarian", "make-ahead"]),
                image_url: image("caprese", 1024, 768),
            },
        },
    ]
}
