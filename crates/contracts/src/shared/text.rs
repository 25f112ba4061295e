//! Derived-state helpers shared by the list view.
//!
//! Tags are stored as an opaque comma-separated string and ingredients as a
//! free-text block, so both of these split conventions live in one place.

use crate::domain::recipe::aggregate::Recipe;
use std::collections::HashSet;

/// Collect the distinct tags across a loaded result set, in first-seen order.
/// Splits each record's `tags` string on commas and trims whitespace. Scoped
/// to the given slice, not the whole store: the filter dropdown only offers
/// tags that are currently visible.
pub fn unique_tags(recipes: &[Recipe]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for recipe in recipes {
        let Some(tags) = recipe.tags.as_deref() else {
            continue;
        };
        for tag in tags.split(',') {
            let tag = tag.trim();
            if !tag.is_empty() && seen.insert(tag.to_string()) {
                out.push(tag.to_string());
            }
        }
    }
    out
}

/// First `max` ingredient entries for the card preview. Splits on newline or
/// comma, trims each entry and drops empties.
pub fn ingredient_preview(ingredients: &str, max: usize) -> Vec<String> {
    ingredients
        .split(['\n', ','])
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .take(max)
        .map(|item| item.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::aggregate::{Recipe, RecipeDto};

    fn recipe(tags: Option<&str>) -> Recipe {
        let dto = RecipeDto {
            title: "Tart".into(),
            ingredients: "flour".into(),
            tags: tags.map(|s| s.to_string()),
            image_url: None,
        };
        Recipe::new_for_insert(&dto)
    }

    #[test]
    fn test_unique_tags_trims_and_dedupes() {
        let recipes = vec![
            recipe(Some("Dessert, Quick")),
            recipe(Some(" Quick ,Vegan")),
            recipe(None),
            recipe(Some(",,Dessert")),
        ];
        assert_eq!(unique_tags(&recipes), vec!["Dessert", "Quick", "Vegan"]);
    }

    #[test]
    fn test_unique_tags_empty_input() {
        assert!(unique_tags(&[]).is_empty());
    }

    #[test]
    fn test_ingredient_preview_caps_at_limit() {
        let items = ingredient_preview("flour\nsugar\nbutter\neggs", 3);
        assert_eq!(items, vec!["flour", "sugar", "butter"]);
    }

    #[test]
    fn test_ingredient_preview_splits_on_newline_or_comma() {
        let items = ingredient_preview("flour, sugar\r\nbutter,\n\n", 5);
        assert_eq!(items, vec!["flour", "sugar", "butter"]);
    }
}
