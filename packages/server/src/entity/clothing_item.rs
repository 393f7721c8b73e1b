use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clothing_item")]
pub struct Model {
    /// UUIDv7 in canonical string form.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Subject of the token that created the item.
    pub user_id: String,

    pub image_url: String,

    /// Stored as returned by the classifier or edited by the owner.
    pub category: String,
    pub subcategory: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
    pub season: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub ai_description: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
