//! Test doubles shared by the unit tests of the flows.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::ai::{AiError, AiService, TextRequest};
use crate::outfit::OutfitRecommendation;
use crate::store::{ListOptions, MemoryStore, OutfitStore, StoreError};

/// Replies with queued responses in order; errors once the queue is drained.
pub struct ScriptedAi {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<TextRequest>>,
}

impl ScriptedAi {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<TextRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiService for ScriptedAi {
    async fn generate_text(&self, request: TextRequest) -> Result<String, AiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AiError::Request("no scripted response left".into()))
    }
}

/// Outfit store that accepts `accept` creates and fails every one after.
pub struct FlakyOutfitStore {
    inner: MemoryStore,
    accept: usize,
    calls: AtomicUsize,
}

impl FlakyOutfitStore {
    pub fn new(accept: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            accept,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OutfitStore for FlakyOutfitStore {
    async fn create_outfit(&self, outfit: &OutfitRecommendation) -> Result<(), StoreError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) >= self.accept {
            return Err(StoreError::Backend("connection reset".into()));
        }
        self.inner.create_outfit(outfit).await
    }

    async fn list_outfits(
        &self,
        user_id: &str,
        options: ListOptions,
    ) -> Result<Vec<OutfitRecommendation>, StoreError> {
        self.inner.list_outfits(user_id, options).await
    }
}
