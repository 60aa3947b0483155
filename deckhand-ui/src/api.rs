//! API client for communicating with the Deckhand backend

use deckhand_common::dashboard::Backend;
use deckhand_common::{
    decode, endpoints, ActionStatus, ClusterInfo, DeleteRequest, DeploymentRequest, Error, Image,
    Result, StatusResponse,
};
use leptos::logging::warn;
use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Browser transport. An empty base URL keeps requests relative to the
/// page origin, which is where the backend serves this UI from.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = Request::get(&url).send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            Error::Transport(e.to_string())
        })?;

        read(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let body = serde_json::to_string(body).map_err(|e| Error::Malformed(e.to_string()))?;

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                Error::Transport(e.to_string())
            })?;

        read(response).await
    }
}

/// Decode a 2xx body, or turn a non-2xx body into the backend's error
async fn read<T: DeserializeOwned>(response: Response) -> Result<T> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    if ok {
        decode(&body)
    } else {
        Err(Error::from_response(status, &body))
    }
}

impl Backend for ApiClient {
    async fn images(&self) -> Result<Vec<Image>> {
        self.get(endpoints::IMAGES).await
    }

    async fn cluster_info(&self) -> Result<ClusterInfo> {
        self.get(endpoints::CLUSTER_INFO).await
    }

    async fn deploy(&self, request: &DeploymentRequest) -> Result<ActionStatus> {
        self.post(endpoints::DEPLOY, request).await
    }

    async fn delete(&self, request: &DeleteRequest) -> Result<ActionStatus> {
        self.post(endpoints::DELETE, request).await
    }

    async fn status(&self, namespace: &str) -> Result<StatusResponse> {
        self.get(&endpoints::status(namespace)).await
    }
}
