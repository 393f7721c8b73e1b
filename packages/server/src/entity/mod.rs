pub mod clothing_item;
pub mod outfit_recommendation;
pub mod user_preference;
