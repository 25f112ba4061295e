use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::domain::recipe::service::{self, ServiceError};
use crate::AppState;
use contracts::domain::recipe::aggregate::{Recipe, RecipeDto};
use contracts::domain::recipe::query::RecipeListRequest;

type ErrorBody = (StatusCode, Json<serde_json::Value>);

fn error_body(status: StatusCode, message: &str) -> ErrorBody {
    (status, Json(json!({ "error": message })))
}

fn write_error(e: ServiceError, context: &str) -> ErrorBody {
    match e {
        ServiceError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, &msg),
        ServiceError::NotFound => error_body(StatusCode::NOT_FOUND, "Recipe not found"),
        ServiceError::Store(err) => {
            tracing::error!("{}: {:#}", context, err);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, context)
        }
    }
}

/// GET /api/recipes
///
/// The success payload of the list endpoint is always an array. On a store
/// failure we keep that shape: 500 plus an empty array, so the client never
/// has to branch on response shape.
pub async fn list(
    State(state): State<AppState>,
    Query(req): Query<RecipeListRequest>,
) -> (StatusCode, Json<Vec<Recipe>>) {
    match service::list(&state.db, &req).await {
        Ok(items) => (StatusCode::OK, Json(items)),
        Err(e) => {
            tracing::error!("Error fetching recipes: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))
        }
    }
}

/// GET /api/recipes/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ErrorBody> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid recipe id"))?;

    match service::get_by_id(&state.db, uuid).await {
        Ok(Some(recipe)) => Ok(Json(recipe)),
        Ok(None) => Err(error_body(StatusCode::NOT_FOUND, "Recipe not found")),
        Err(e) => {
            tracing::error!("Error fetching recipe: {:#}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch recipe",
            ))
        }
    }
}

/// POST /api/recipes
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<RecipeDto>,
) -> Result<(StatusCode, Json<Recipe>), ErrorBody> {
    match service::create(&state.db, dto).await {
        Ok(recipe) => Ok((StatusCode::CREATED, Json(recipe))),
        Err(e) => Err(write_error(e, "Failed to create recipe")),
    }
}

/// PUT /api/recipes/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<RecipeDto>,
) -> Result<Json<Recipe>, ErrorBody> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid recipe id"))?;

    match service::update(&state.db, uuid, dto).await {
        Ok(recipe) => Ok(Json(recipe)),
        Err(e) => Err(write_error(e, "Failed to update recipe")),
    }
}

/// DELETE /api/recipes/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ErrorBody> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid recipe id"))?;

    match service::delete(&state.db, uuid).await {
        Ok(()) => Ok(Json(json!({ "message": "Recipe deleted successfully" }))),
        Err(e) => Err(write_error(e, "Failed to delete recipe")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::recipe::aggregate::RecipeDto;

    #[tokio::test]
    async fn test_list_answers_empty_array_when_store_is_unreachable() {
        let db = connect_in_memory().await.unwrap();
        let state = AppState { db: db.clone() };
        // Closing the pool makes every subsequent query fail
        db.close().await.unwrap();

        let (status, Json(items)) =
            list(State(state), Query(RecipeListRequest::default())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_400_for_missing_fields() {
        let db = connect_in_memory().await.unwrap();
        let state = AppState { db };

        let dto = RecipeDto {
            title: "".into(),
            ingredients: "flour".into(),
            ..Default::default()
        };
        let result = create(State(state), Json(dto)).await;
        let (status, _) = result.err().expect("expected a validation error");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
