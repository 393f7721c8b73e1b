//! SQL-backed record stores over the sea-orm entities.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use tracing::error;
use wardrobe_common::clothing::ClothingItem;
use wardrobe_common::outfit::OutfitRecommendation;
use wardrobe_common::store::{
    ClothingStore, ListOptions, OutfitStore, PreferenceStore, StoreError,
};

use crate::entity::{clothing_item, outfit_recommendation, user_preference};

#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn backend(op: &'static str) -> impl FnOnce(DbErr) -> StoreError {
    move |e| {
        error!(op, error = %e, "Record store query failed");
        StoreError::Backend(e.to_string())
    }
}

/// Newest first, then the limit. `id` breaks ties since UUIDv7 ids sort by creation.
fn list_query<E, C>(query: Select<E>, created_at: C, id: C, options: ListOptions) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    let query = query.order_by_desc(created_at).order_by_desc(id);
    match options.limit {
        Some(limit) => query.limit(limit),
        None => query,
    }
}

impl From<clothing_item::Model> for ClothingItem {
    fn from(model: clothing_item::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            image_url: model.image_url,
            category: model.category,
            subcategory: model.subcategory,
            color: model.color,
            style: model.style,
            season: model.season,
            ai_description: model.ai_description,
            created_at: model.created_at,
        }
    }
}

fn outfit_from_model(model: outfit_recommendation::Model) -> Result<OutfitRecommendation, StoreError> {
    Ok(OutfitRecommendation {
        id: model.id,
        user_id: model.user_id,
        occasion: model.occasion,
        weather: model.weather,
        style_vibe: model.style_vibe,
        recommended_items: serde_json::from_str(&model.recommended_items)?,
        missing_items: serde_json::from_str(&model.missing_items)?,
        ai_explanation: model.ai_explanation,
        created_at: model.created_at,
    })
}

#[async_trait]
impl ClothingStore for SeaOrmStore {
    async fn create_item(&self, item: &ClothingItem) -> Result<(), StoreError> {
        let model = clothing_item::ActiveModel {
            id: Set(item.id.clone()),
            user_id: Set(item.user_id.clone()),
            image_url: Set(item.image_url.clone()),
            category: Set(item.category.clone()),
            subcategory: Set(item.subcategory.clone()),
            color: Set(item.color.clone()),
            style: Set(item.style.clone()),
            season: Set(item.season.clone()),
            ai_description: Set(item.ai_description.clone()),
            created_at: Set(item.created_at),
        };
        clothing_item::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(backend("create_item"))?;
        Ok(())
    }

    async fn list_items(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<ClothingItem>, StoreError> {
        let query = clothing_item::Entity::find().filter(clothing_item::Column::UserId.eq(user_id));
        let models = list_query(
            query,
            clothing_item::Column::CreatedAt,
            clothing_item::Column::Id,
            options,
        )
        .all(&self.db)
        .await
        .map_err(backend("list_items"))?;

        Ok(models.into_iter().map(ClothingItem::from).collect())
    }

    async fn count_items(&self, user_id: &str) -> Result<u64, StoreError> {
        clothing_item::Entity::find()
            .filter(clothing_item::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(backend("count_items"))
    }

    async fn delete_item(&self, user_id: &str, id: &str) -> Result<bool, StoreError> {
        let result = clothing_item::Entity::delete_many()
            .filter(clothing_item::Column::Id.eq(id))
            .filter(clothing_item::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(backend("delete_item"))?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl OutfitStore for SeaOrmStore {
    async fn create_outfit(&self, outfit: &OutfitRecommendation) -> Result<(), StoreError> {
        let model = outfit_recommendation::ActiveModel {
            id: Set(outfit.id.clone()),
            user_id: Set(outfit.user_id.clone()),
            occasion: Set(outfit.occasion.clone()),
            weather: Set(outfit.weather.clone()),
            style_vibe: Set(outfit.style_vibe.clone()),
            recommended_items: Set(serde_json::to_string(&outfit.recommended_items)?),
            missing_items: Set(serde_json::to_string(&outfit.missing_items)?),
            ai_explanation: Set(outfit.ai_explanation.clone()),
            created_at: Set(outfit.created_at),
        };
        outfit_recommendation::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(backend("create_outfit"))?;
        Ok(())
    }

    async fn list_outfits(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<OutfitRecommendation>, StoreError> {
        let query = outfit_recommendation::Entity::find()
            .filter(outfit_recommendation::Column::UserId.eq(user_id));
        let models = list_query(
            query,
            outfit_recommendation::Column::CreatedAt,
            outfit_recommendation::Column::Id,
            options,
        )
        .all(&self.db)
        .await
        .map_err(backend("list_outfits"))?;

        models.into_iter().map(outfit_from_model).collect()
    }

    async fn count_outfits(&self, user_id: &str) -> Result<u64, StoreError> {
        outfit_recommendation::Entity::find()
            .filter(outfit_recommendation::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(backend("count_outfits"))
    }
}

#[async_trait]
impl PreferenceStore for SeaOrmStore {
    async fn get_preference(&self, user_id: &str, key: &str) -> Result<Option<String>, StoreError> {
        let record = user_preference::Entity::find_by_id((user_id.to_string(), key.to_string()))
            .one(&self.db)
            .await
            .map_err(backend("get_preference"))?;
        Ok(record.map(|r| r.value))
    }

    async fn set_preference(&self, user_id: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let model = user_preference::ActiveModel {
            user_id: Set(user_id.to_string()),
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(Utc::now()),
        };
        user_preference::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    user_preference::Column::UserId,
                    user_preference::Column::Key,
                ])
                .update_columns([
                    user_preference::Column::Value,
                    user_preference::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend("set_preference"))?;
        Ok(())
    }
}
