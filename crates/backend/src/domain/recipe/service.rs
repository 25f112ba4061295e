use super::repository;
use contracts::domain::recipe::aggregate::{Recipe, RecipeDto};
use contracts::domain::recipe::query::RecipeListRequest;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy of the command path. Handlers translate this to HTTP
/// status codes; the underlying store error is only logged server-side.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("recipe not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Read path: translate the optional filter/sort parameters into one store
/// query.
pub async fn list(db: &DatabaseConnection, req: &RecipeListRequest) -> anyhow::Result<Vec<Recipe>> {
    repository::list(db, req).await
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<Option<Recipe>> {
    repository::get_by_id(db, id).await
}

/// Create a new recipe. Validation runs before anything touches the store.
pub async fn create(db: &DatabaseConnection, dto: RecipeDto) -> Result<Recipe, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;

    let recipe = Recipe::new_for_insert(&dto);
    repository::insert(db, &recipe).await?;
    Ok(recipe)
}

/// Full replace of the mutable fields of an existing recipe. Bumps
/// `updated_at`; id and `created_at` never change.
pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    dto: RecipeDto,
) -> Result<Recipe, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;

    let mut recipe = repository::get_by_id(db, id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    recipe.apply(&dto);
    recipe.before_write();

    repository::update(db, &recipe).await?;
    Ok(recipe)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    if repository::delete(db, id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use std::time::Duration;

    fn dto(title: &str, ingredients: &str, tags: Option<&str>) -> RecipeDto {
        RecipeDto {
            title: title.into(),
            ingredients: ingredients.into(),
            tags: tags.map(|s| s.to_string()),
            image_url: None,
        }
    }

    fn list_request(search: Option<&str>, tag: Option<&str>, sort: Option<&str>) -> RecipeListRequest {
        RecipeListRequest {
            search: search.map(|s| s.to_string()),
            tag: tag.map(|s| s.to_string()),
            sort: sort.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let db = connect_in_memory().await.unwrap();

        let created = create(&db, dto("Tart", "flour\nsugar", Some("Dessert, Quick")))
            .await
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = get_by_id(&db, created.id.value()).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Tart");
        assert_eq!(fetched.ingredients, "flour\nsugar");
        assert_eq!(fetched.tags.as_deref(), Some("Dessert, Quick"));
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_fields() {
        let db = connect_in_memory().await.unwrap();

        let result = create(&db, dto("", "flour", None)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let result = create(&db, dto("Tart", "   ", None)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        // Nothing reached the store
        let all = list(&db, &RecipeListRequest::default()).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_update_bumps_updated_at_only() {
        let db = connect_in_memory().await.unwrap();
        let created = create(&db, dto("Tart", "flour", Some("Dessert")))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;

        let updated = update(
            &db,
            created.id.value(),
            dto("Lemon Tart", "flour\nlemons", Some("")),
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > updated.created_at);
        assert_eq!(updated.title, "Lemon Tart");
        // Blank tags collapse to "no value"
        assert_eq!(updated.tags, None);

        let fetched = get_by_id(&db, created.id.value()).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Lemon Tart");
        assert_eq!(fetched.tags, None);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let db = connect_in_memory().await.unwrap();
        let result = update(&db, Uuid::new_v4(), dto("Tart", "flour", None)).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let db = connect_in_memory().await.unwrap();
        let created = create(&db, dto("Tart", "flour", None)).await.unwrap();

        delete(&db, created.id.value()).await.unwrap();
        assert!(get_by_id(&db, created.id.value()).await.unwrap().is_none());

        // Second delete of the same id is NotFound
        let result = delete(&db, created.id.value()).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let db = connect_in_memory().await.unwrap();
        create(&db, dto("Chocolate Cake", "cocoa", None)).await.unwrap();
        create(&db, dto("Vanilla Cake", "vanilla", None)).await.unwrap();

        let found = list(&db, &list_request(Some("choc"), None, None))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Chocolate Cake");
    }

    #[tokio::test]
    async fn test_search_and_tag_combine_with_and() {
        let db = connect_in_memory().await.unwrap();
        create(&db, dto("Chocolate Cake", "cocoa", Some("Dessert")))
            .await
            .unwrap();
        create(&db, dto("Chocolate Mousse", "cocoa", Some("Quick")))
            .await
            .unwrap();

        let found = list(&db, &list_request(Some("choc"), Some("dessert"), None))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Chocolate Cake");

        // Records without tags never match a tag filter
        create(&db, dto("Chocolate Bar", "cocoa", None)).await.unwrap();
        let found = list(&db, &list_request(None, Some("dessert"), None))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_sort_orders() {
        let db = connect_in_memory().await.unwrap();
        create(&db, dto("Brownies", "cocoa", None)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        create(&db, dto("Apple Pie", "apples", None)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        create(&db, dto("Carrot Soup", "carrots", None)).await.unwrap();

        let titles = |items: Vec<Recipe>| -> Vec<String> {
            items.into_iter().map(|r| r.title).collect()
        };

        let asc = list(&db, &list_request(None, None, Some("asc")))
            .await
            .unwrap();
        assert_eq!(titles(asc), vec!["Apple Pie", "Brownies", "Carrot Soup"]);

        let desc = list(&db, &list_request(None, None, Some("desc")))
            .await
            .unwrap();
        assert_eq!(titles(desc), vec!["Carrot Soup", "Brownies", "Apple Pie"]);

        // Absent or unrecognized sort: newest first
        let newest = list(&db, &RecipeListRequest::default()).await.unwrap();
        assert_eq!(titles(newest), vec!["Carrot Soup", "Apple Pie", "Brownies"]);

        let fallback = list(&db, &list_request(None, None, Some("sideways")))
            .await
            .unwrap();
        assert_eq!(
            titles(fallback),
            vec!["Carrot Soup", "Apple Pie", "Brownies"]
        );
    }
}
