///! API client for the Deckhand backend

use deckhand_common::dashboard::Backend;
use deckhand_common::{
    decode, endpoints, ActionStatus, ClusterInfo, DeleteRequest, DeploymentRequest, Error, Image,
    Result, StatusResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        read(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        read(response).await
    }
}

async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    if status.is_success() {
        decode(&body)
    } else {
        debug!(status = status.as_u16(), "request rejected");
        Err(Error::from_response(status.as_u16(), &body))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url(endpoints::CLUSTER_INFO), "http://localhost:5000/cluster_info");
        assert_eq!(
            client.url(&endpoints::status("shop dev")),
            "http://localhost:5000/status?namespace=shop%20dev"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let result = client.images().await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
