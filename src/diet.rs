// src/diet.rs
//! Diet tags and the ingredient-composition inference rule.
//!
//! Tags are never authored: a recipe carries a tag exactly when every one
//! of its ingredients passes the corresponding predicate. Ingredient flags
//! are classified once at build time from the configured keyword lists and
//! stored on the ingredient node, so query-time checks never re-derive them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// The fixed set of inferred diet tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DietTag {
    Vegan,
    Vegetarian,
    GlutenFree,
}

impl DietTag {
    /// Declaration-order list of all tags. `list_diets` returns these
    /// labels regardless of whether any recipe carries them.
    pub const ALL: [DietTag; 3] = [DietTag::Vegan, DietTag::Vegetarian, DietTag::GlutenFree];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DietTag::Vegan => "Vegan",
            DietTag::Vegetarian => "Vegetarian",
            DietTag::GlutenFree => "Gluten-Free",
        }
    }

    /// Lenient parse of a user-supplied diet word. Unknown words yield
    /// `None`, which callers treat as "no diet filter".
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "vegan" => Some(DietTag::Vegan),
            "vegetarian" => Some(DietTag::Vegetarian),
            "gluten-free" | "glutenfree" | "gluten free" => Some(DietTag::GlutenFree),
            _ => None,
        }
    }
}

/// Per-ingredient classification flags, fixed at build time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientFlags {
    pub animal_product: bool,
    pub meat: bool,
    pub gluten: bool,
}

/// Classifies an ingredient label by substring match against the keyword
/// lists. Matching is case-insensitive; "Grilled CHICKEN breast" is an
/// animal product.
#[must_use]
pub fn classify(label: &str, config: &Config) -> IngredientFlags {
    let lowered = label.to_lowercase();
    let contains_any = |terms: &[String]| terms.iter().any(|t| lowered.contains(t.as_str()));
    IngredientFlags {
        animal_product: contains_any(&config.animal_products),
        meat: contains_any(&config.meat_products),
        gluten: contains_any(&config.gluten_grains),
    }
}

/// Computes the diet-tag set for one recipe from its ingredient flags.
#[must_use]
pub fn infer_tags<I>(flags: I) -> BTreeSet<DietTag>
where
    I: IntoIterator<Item = IngredientFlags>,
{
    let mut has_animal = false;
    let mut has_meat = false;
    let mut has_gluten = false;
    for f in flags {
        has_animal |= f.animal_product;
        has_meat |= f.meat;
        has_gluten |= f.gluten;
    }

    let mut tags = BTreeSet::new();
    if !has_animal {
        tags.insert(DietTag::Vegan);
    }
    if !has_meat {
        // Dairy and eggs are fine for vegetarians; only the meat/fish
        // subset breaks this predicate.
        tags.insert(DietTag::Vegetarian);
    }
    if !has_gluten {
        tags.insert(DietTag::GlutenFree);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(label: &str) -> IngredientFlags {
        classify(label, &Config::new())
    }

    #[test]
    fn classify_is_case_insensitive_substring() {
        assert!(flags("Grilled CHICKEN breast").animal_product);
        assert!(flags("Grilled CHICKEN breast").meat);
        assert!(flags("whole wheat flour").gluten);
        assert!(!flags("red lentils").animal_product);
        assert!(!flags("red lentils").gluten);
    }

    #[test]
    fn dairy_breaks_vegan_but_not_vegetarian() {
        let f = flags("unsalted butter");
        assert!(f.animal_product);
        assert!(!f.meat);
        let tags = infer_tags([f]);
        assert!(!tags.contains(&DietTag::Vegan));
        assert!(tags.contains(&DietTag::Vegetarian));
    }

    #[test]
    fn all_plant_gets_all_three_tags() {
        let tags = infer_tags([flags("olive oil"), flags("tomatoes"), flags("basil")]);
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec![DietTag::Vegan, DietTag::Vegetarian, DietTag::GlutenFree]
        );
    }

    #[test]
    fn empty_ingredient_set_passes_every_predicate() {
        assert_eq!(infer_tags(std::iter::empty::<IngredientFlags>()).len(), 3);
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(DietTag::parse("Vegan"), Some(DietTag::Vegan));
        assert_eq!(DietTag::parse("GLUTEN-FREE"), Some(DietTag::GlutenFree));
        assert_eq!(DietTag::parse("gluten free"), Some(DietTag::GlutenFree));
        assert_eq!(DietTag::parse("keto"), None);
    }

    #[test]
    fn labels_are_stable() {
        let labels: Vec<_> = DietTag::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Vegan", "Vegetarian", "Gluten-Free"]);
    }
}
