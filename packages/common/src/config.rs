use std::path::PathBuf;

use serde::Deserialize;

/// Blob storage configuration shared by the server and tooling.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageAppConfig {
    /// Directory holding uploaded images. Default: "./data/blobs".
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
    /// Prefix of the public URLs handed back after upload.
    /// Default: "http://localhost:3000/api/v1/media".
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Largest accepted upload in bytes. Default: 10 MiB.
    #[serde(default = "default_max_blob_size")]
    pub max_blob_size: u64,
}

fn default_base_path() -> PathBuf {
    PathBuf::from("./data/blobs")
}
fn default_public_base_url() -> String {
    "http://localhost:3000/api/v1/media".into()
}
fn default_max_blob_size() -> u64 {
    10 * 1024 * 1024
}

impl Default for StorageAppConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            public_base_url: default_public_base_url(),
            max_blob_size: default_max_blob_size(),
        }
    }
}

/// OpenAI-compatible AI endpoint configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AiAppConfig {
    /// Base URL up to and including the API version. Default: "https://api.openai.com/v1".
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Bearer key sent with each request. Empty disables the header.
    #[serde(default)]
    pub api_key: String,
    /// Model used for both classification and recommendations. Default: "gpt-4o-mini".
    #[serde(default = "default_model")]
    pub model: String,
    /// Completion token cap. Default: 1024.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds. Default: 60.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_max_tokens() -> u32 {
    1024
}
fn default_timeout_secs() -> u64 {
    60
}

impl Default for AiAppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
