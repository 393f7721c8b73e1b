use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use serde_json::Value;
use tempfile::TempDir;
use wardrobe_common::ai::{AiError, AiService, TextRequest};
use wardrobe_common::clothing::ClothingItem;
use wardrobe_common::store::ClothingStore;
use wardrobe_common::config::{AiAppConfig, StorageAppConfig};
use wardrobe_common::storage::filesystem::FilesystemBlobStore;

use wardrobe_server::config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};
use wardrobe_server::state::AppState;
use wardrobe_server::stores::SeaOrmStore;
use wardrobe_server::utils::jwt;

pub const JWT_SECRET: &str = "test-secret-for-integration-tests";

pub mod routes {
    pub const CLOTHING: &str = "/api/v1/clothing";
    pub const CLOTHING_ANALYZE: &str = "/api/v1/clothing/analyze";
    pub const CLOTHING_UPGRADE: &str = "/api/v1/clothing/upgrade";
    pub const CLOTHING_OPTIONS: &str = "/api/v1/clothing/options";
    pub const QUIZ: &str = "/api/v1/outfits/quiz";
    pub const RECOMMENDATIONS: &str = "/api/v1/outfits/recommendations";
    pub const STATS: &str = "/api/v1/profile/stats";
    pub const LANGUAGE: &str = "/api/v1/preferences/language";
    pub const TRANSLATIONS: &str = "/api/v1/translations";

    pub fn clothing_item(id: &str) -> String {
        format!("/api/v1/clothing/{id}")
    }
}

/// AI stand-in that answers with queued replies and records every request.
#[derive(Default)]
pub struct ScriptedAi {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<TextRequest>>,
}

impl ScriptedAi {
    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AiService for ScriptedAi {
    async fn generate_text(&self, request: TextRequest) -> Result<String, AiError> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AiError::Service(message)),
            None => Err(AiError::Request("no scripted reply left".into())),
        }
    }
}

/// A running test server backed by a throwaway SQLite file and blob directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub ai: Arc<ScriptedAi>,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let db = wardrobe_server::database::init_db(&db_url)
            .await
            .expect("Failed to initialize test database");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        let storage = StorageAppConfig {
            base_path: dir.path().join("blobs"),
            public_base_url: format!("http://{addr}/api/v1/media"),
            max_blob_size: 1024 * 1024,
        };
        let blob_store = FilesystemBlobStore::new(
            storage.base_path.clone(),
            storage.public_base_url.clone(),
            storage.max_blob_size,
        )
        .await
        .expect("Failed to initialize blob store");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig { url: db_url },
            auth: AuthConfig {
                jwt_secret: JWT_SECRET.to_string(),
            },
            storage,
            ai: AiAppConfig::default(),
        };

        let ai = Arc::new(ScriptedAi::default());
        let state = AppState {
            db: db.clone(),
            config: app_config,
            blob_store: Arc::new(blob_store),
            ai: ai.clone(),
        };

        let app = wardrobe_server::build_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            ai,
            db,
            _dir: dir,
        }
    }

    /// A valid token for `user_id`.
    pub fn token(&self, user_id: &str) -> String {
        jwt::sign(user_id, JWT_SECRET, chrono::Duration::hours(1)).expect("Failed to sign token")
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn put_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn delete_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    pub async fn upload_image(&self, bytes: Vec<u8>, token: &str) -> TestResponse {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("photo.jpg")
            .mime_str("image/jpeg")
            .expect("Failed to set MIME type");
        let form = reqwest::multipart::Form::new().part("image", part);

        let res = self
            .client
            .post(self.url(routes::CLOTHING_ANALYZE))
            .header("Authorization", format!("Bearer {token}"))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    /// Insert `count` items for `user_id` directly into the database, bypassing the gate.
    pub async fn seed_items(&self, user_id: &str, count: usize) {
        let store = SeaOrmStore::new(self.db.clone());
        for n in 0..count {
            let item = ClothingItem {
                id: uuid::Uuid::now_v7().to_string(),
                user_id: user_id.to_string(),
                image_url: format!("http://localhost/api/v1/media/clothing/{user_id}/{n}.jpg"),
                category: "tops".to_string(),
                subcategory: None,
                color: None,
                style: None,
                season: None,
                ai_description: None,
                created_at: Utc::now(),
            };
            store
                .create_item(&item)
                .await
                .expect("Failed to seed clothing item");
        }
    }

    /// Make every outfit insert after the first `accept` rows fail.
    pub async fn limit_outfit_inserts(&self, accept: u32) {
        self.db
            .execute_raw(Statement::from_string(
                DbBackend::Sqlite,
                format!(
                    "CREATE TRIGGER outfit_insert_limit BEFORE INSERT ON outfit_recommendation \
                     WHEN (SELECT COUNT(*) FROM outfit_recommendation) >= {accept} \
                     BEGIN SELECT RAISE(ABORT, 'outfit insert rejected'); END"
                ),
            ))
            .await
            .expect("Failed to create trigger");
    }

    /// Save an item straight through the API and return its `id`.
    pub async fn save_item(&self, token: &str, category: &str) -> String {
        let res = self
            .post_with_token(routes::CLOTHING, &draft(category), token)
            .await;
        assert_eq!(res.status, 201, "save_item failed: {}", res.text);
        res.id()
    }
}

/// A complete edit-form payload for `category`.
pub fn draft(category: &str) -> Value {
    serde_json::json!({
        "image_url": "http://localhost/api/v1/media/clothing/u/1.jpg",
        "category": category,
        "subcategory": "t-shirt",
        "color": "white",
        "style": "casual",
        "season": "summer",
        "description": "Plain tee",
    })
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("response body should contain 'id'")
            .to_string()
    }
}
