use crate::domain::model::Mode;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

/// Object-safe port over the fetch helpers. Payloads are `serde_json::Value`
/// so the trait stays mockable; `JsonClient` additionally exposes generic
/// inherent methods for typed payloads.
#[async_trait]
pub trait JsonFetch: Send + Sync {
    async fn sfetch(&self, url: &str, mode: Mode, data: Option<&Value>) -> Result<Response>;

    async fn get(&self, url: &str) -> Result<Response> {
        self.sfetch(url, Mode::Get, None).await
    }

    async fn post(&self, url: &str, data: &Value) -> Result<Response> {
        self.sfetch(url, Mode::Post, Some(data)).await
    }

    async fn del(&self, url: &str) -> Result<Response> {
        self.sfetch(url, Mode::Delete, None).await
    }
}
