use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::errors;

/// Minimal JSON-RPC 2.0 client over HTTP.
#[derive(Debug)]
pub struct JsonRpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

#[derive(serde::Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a serde_json::Value,
}

#[derive(serde::Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, serde::Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl JsonRpcClient {
    /// Every request fails with `RPCError` if the node has not answered within `timeout`.
    pub fn connect(url: &str, timeout: Duration) -> crate::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, url))
    }

    pub fn with_client(http: reqwest::Client, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `method` and decodes its `result`; a `null` result decodes into `Option::None`.
    pub(crate) async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> crate::Result<R> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            target: crate::LOGGER_MSG,
            "RPC request #{}: {} {}\nTo node: {}",
            id,
            method,
            params,
            self.url
        );
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params: &params,
        };
        let response: RpcResponse = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        decode_response(method, response)
    }
}

fn decode_response<R: DeserializeOwned>(method: &str, response: RpcResponse) -> crate::Result<R> {
    if let Some(error) = response.error {
        return Err(errors::ErrorKind::RPCError(format!(
            "{} failed with code {}: {}",
            method, error.code, error.message
        ))
        .into());
    }
    Ok(serde_json::from_value(
        response.result.unwrap_or(serde_json::Value::Null),
    )?)
}
