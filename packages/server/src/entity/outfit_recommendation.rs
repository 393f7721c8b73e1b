use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "outfit_recommendation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,

    pub occasion: String,
    pub weather: String,
    pub style_vibe: String,

    /// JSON array of item descriptions.
    #[sea_orm(column_type = "Text")]
    pub recommended_items: String,
    /// JSON array of missing item descriptions.
    #[sea_orm(column_type = "Text")]
    pub missing_items: String,

    #[sea_orm(column_type = "Text")]
    pub ai_explanation: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
