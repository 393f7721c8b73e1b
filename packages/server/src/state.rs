use std::sync::Arc;

use sea_orm::DatabaseConnection;
use wardrobe_common::ai::AiService;
use wardrobe_common::i18n::Localizer;
use wardrobe_common::storage::BlobStore;
use wardrobe_common::{Classifier, Stylist, Wardrobe};

use crate::config::AppConfig;
use crate::stores::SeaOrmStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub blob_store: Arc<dyn BlobStore>,
    pub ai: Arc<dyn AiService>,
}

impl AppState {
    pub fn store(&self) -> Arc<SeaOrmStore> {
        Arc::new(SeaOrmStore::new(self.db.clone()))
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.blob_store.clone(), self.ai.clone())
    }

    pub fn wardrobe(&self) -> Wardrobe {
        Wardrobe::new(self.store())
    }

    pub fn stylist(&self) -> Stylist {
        let store = self.store();
        Stylist::new(store.clone(), store, self.ai.clone())
    }

    pub fn localizer(&self) -> Localizer {
        Localizer::new(self.store())
    }
}
