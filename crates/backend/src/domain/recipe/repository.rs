use contracts::domain::recipe::aggregate::{Recipe, RecipeId};
use contracts::domain::recipe::query::{RecipeListRequest, SortOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub ingredients: String,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Recipe {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        Recipe {
            id: RecipeId::new(uuid),
            title: m.title,
            ingredients: m.ingredients,
            tags: m.tags,
            image_url: m.image_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// List recipes with the optional title/tag filters and the requested order.
/// Both filters are substring matches; SQLite's LIKE is case-insensitive,
/// which gives them their case-insensitive contract.
pub async fn list(
    db: &DatabaseConnection,
    req: &RecipeListRequest,
) -> anyhow::Result<Vec<Recipe>> {
    let mut query = Entity::find();

    if let Some(search) = req.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(Column::Title.contains(search));
    }
    if let Some(tag) = req.tag.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(Column::Tags.contains(tag));
    }

    query = match req.sort_order() {
        SortOrder::TitleAsc => query.order_by_asc(Column::Title),
        SortOrder::TitleDesc => query.order_by_desc(Column::Title),
        SortOrder::Newest => query.order_by_desc(Column::CreatedAt),
    };

    let items = query.all(db).await?.into_iter().map(Into::into).collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<Option<Recipe>> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, recipe: &Recipe) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(recipe.id.as_string()),
        title: Set(recipe.title.clone()),
        ingredients: Set(recipe.ingredients.clone()),
        tags: Set(recipe.tags.clone()),
        image_url: Set(recipe.image_url.clone()),
        created_at: Set(recipe.created_at),
        updated_at: Set(recipe.updated_at),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn update(db: &DatabaseConnection, recipe: &Recipe) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(recipe.id.as_string()),
        title: Set(recipe.title.clone()),
        ingredients: Set(recipe.ingredients.clone()),
        tags: Set(recipe.tags.clone()),
        image_url: Set(recipe.image_url.clone()),
        updated_at: Set(recipe.updated_at),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(db).await?;
    Ok(())
}

/// Hard delete. Returns false when no row matched the id.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
