use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique recipe identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RecipeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A shared recipe. `ingredients` is a free-text block (one ingredient per
/// line by convention) and `tags` is an opaque comma-separated string; the
/// store never parses either.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: String,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe for insertion. Assigns a fresh id and sets both
    /// timestamps to the same instant.
    pub fn new_for_insert(dto: &RecipeDto) -> Self {
        let now = Utc::now();
        Self {
            id: RecipeId::new_v4(),
            title: dto.title.clone(),
            ingredients: dto.ingredients.clone(),
            tags: dto.normalized_tags(),
            image_url: dto.normalized_image_url(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of all mutable fields from a DTO. Id and `created_at`
    /// stay untouched.
    pub fn apply(&mut self, dto: &RecipeDto) {
        self.title = dto.title.clone();
        self.ingredients = dto.ingredients.clone();
        self.tags = dto.normalized_tags();
        self.image_url = dto.normalized_image_url();
    }

    pub fn touch_updated(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Hook before persisting an update
    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload. Same shape for POST and PUT.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub title: String,
    pub ingredients: String,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RecipeDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title and ingredients are required".into());
        }
        if self.ingredients.trim().is_empty() {
            return Err("Title and ingredients are required".into());
        }
        Ok(())
    }

    /// Absent or blank tags count as "no value"
    pub fn normalized_tags(&self) -> Option<String> {
        none_if_blank(self.tags.as_deref())
    }

    pub fn normalized_image_url(&self) -> Option<String> {
        none_if_blank(self.image_url.as_deref())
    }
}

fn none_if_blank(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        let dto = RecipeDto {
            title: "  ".into(),
            ingredients: "flour".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = RecipeDto {
            title: "Tart".into(),
            ingredients: "".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = RecipeDto {
            title: "Tart".into(),
            ingredients: "flour\nsugar".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_optionals_normalize_to_none() {
        let dto = RecipeDto {
            title: "Tart".into(),
            ingredients: "flour".into(),
            tags: Some("".into()),
            image_url: Some("   ".into()),
        };
        let recipe = Recipe::new_for_insert(&dto);
        assert_eq!(recipe.tags, None);
        assert_eq!(recipe.image_url, None);
        assert_eq!(recipe.created_at, recipe.updated_at);
    }

    #[test]
    fn test_apply_replaces_fields_but_not_identity() {
        let dto = RecipeDto {
            title: "Tart".into(),
            ingredients: "flour".into(),
            tags: Some("Dessert, Quick".into()),
            image_url: None,
        };
        let mut recipe = Recipe::new_for_insert(&dto);
        let id = recipe.id;
        let created_at = recipe.created_at;

        let update = RecipeDto {
            title: "Lemon Tart".into(),
            ingredients: "flour\nlemons".into(),
            tags: Some("".into()),
            image_url: Some("https://example.com/tart.jpg".into()),
        };
        recipe.apply(&update);

        assert_eq!(recipe.id, id);
        assert_eq!(recipe.created_at, created_at);
        assert_eq!(recipe.title, "Lemon Tart");
        assert_eq!(recipe.tags, None);
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://example.com/tart.jpg")
        );
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let dto = RecipeDto {
            title: "Tart".into(),
            ingredients: "flour".into(),
            tags: None,
            image_url: Some("https://example.com/tart.jpg".into()),
        };
        let recipe = Recipe::new_for_insert(&dto);
        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("image_url").is_none());
    }
}
