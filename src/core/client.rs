use crate::domain::model::Mode;
use crate::domain::ports::JsonFetch;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

pub const ACCEPT_JSON: &str = "application/json, text/plain, */*";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// JSON 請求的薄封裝，重用同一個 `reqwest::Client` 連線池
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// 使用呼叫端自備的 `reqwest::Client`（例如帶自訂 timeout）
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends a request to `url` with the fixed JSON headers. A body is
    /// attached only for POST; an absent payload serializes as `null`.
    /// The response handle is returned as-is, whatever its status.
    pub async fn sfetch<T>(&self, url: &str, mode: Mode, data: Option<&T>) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .request(mode.as_method(), url)
            .header(ACCEPT, ACCEPT_JSON)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);

        // 只有 POST 帶 body
        if mode == Mode::Post {
            request = request.body(serde_json::to_string(&data)?);
        }

        tracing::debug!("📡 {} {}", mode, url);
        let response = request.send().await?;
        tracing::debug!("📡 response status: {}", response.status());

        Ok(response)
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        self.sfetch::<Value>(url, Mode::Get, None).await
    }

    pub async fn post<T>(&self, url: &str, data: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        self.sfetch(url, Mode::Post, Some(data)).await
    }

    pub async fn del(&self, url: &str) -> Result<Response> {
        self.sfetch::<Value>(url, Mode::Delete, None).await
    }
}

impl Default for JsonClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonFetch for JsonClient {
    async fn sfetch(&self, url: &str, mode: Mode, data: Option<&Value>) -> Result<Response> {
        JsonClient::sfetch(self, url, mode, data).await
    }
}
