//! Common types and utilities shared between deckhand-ui and deckhand-cli

pub mod dashboard;
pub mod tables;

use serde::{Deserialize, Serialize};

/// Host that serves the deployed client, one path per namespace
pub const CLIENT_HOST: &str = "client.example.com";

/// Deployable container image reference, e.g. `ghcr.io/acme/shop-api:latest`
pub type Image = String;

/// Cluster node as reported by `/cluster_info`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub status: String,
}

/// Cluster namespace as reported by `/cluster_info`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
}

/// Cluster topology snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterInfo {
    pub nodes: Vec<Node>,
    pub namespaces: Vec<Namespace>,
}

/// Pod of a deployed application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pod {
    pub name: String,
    pub status: String,
}

/// Body of `POST /deploy`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub api_image: String,
    pub client_image: String,
    pub namespace: String,
}

/// Body of `POST /delete`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteRequest {
    pub namespace: String,
}

/// Success body of deploy and delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionStatus {
    pub status: String,
}

/// Failure body returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /status`: either the pods of the namespace or an error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusResponse {
    Pods(Vec<Pod>),
    Error(ErrorBody),
}

/// Link to the client deployed into `namespace`
pub fn client_url(namespace: &str) -> String {
    format!("http://{}/{}", CLIENT_HOST, namespace)
}

/// Backend endpoint paths, relative to the server base URL
pub mod endpoints {
    pub const IMAGES: &str = "/get_images";
    pub const CLUSTER_INFO: &str = "/cluster_info";
    pub const DEPLOY: &str = "/deploy";
    pub const DELETE: &str = "/delete";
    pub const STATUS: &str = "/status";

    /// `/status` with the namespace as query parameter
    pub fn status(namespace: &str) -> String {
        format!("{}?namespace={}", STATUS, urlencoding::encode(namespace))
    }
}

/// Form that issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Deploy,
    Delete,
    Status,
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deploy => write!(f, "deploy"),
            Self::Delete => write!(f, "delete"),
            Self::Status => write!(f, "status"),
        }
    }
}

/// Client-side error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(String),

    /// Display is the backend's message verbatim
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("A {0} request is already in progress")]
    Busy(Form),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build the error for a non-2xx response from its raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(body) => Error::Backend { status, message: body.error },
            Err(_) => Error::Malformed(format!("HTTP {} without an error message", status)),
        }
    }
}

/// Decode a 2xx body
pub fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_request_wire_format() {
        let request = DeploymentRequest {
            api_image: "img-a".to_string(),
            client_image: "img-b".to_string(),
            namespace: "ns1".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"api_image":"img-a","client_image":"img-b","namespace":"ns1"}"#
        );
    }

    #[test]
    fn test_status_response_variants() {
        let pods: StatusResponse =
            serde_json::from_str(r#"[{"name":"pod-1","status":"Running"}]"#).unwrap();
        assert_eq!(
            pods,
            StatusResponse::Pods(vec![Pod {
                name: "pod-1".to_string(),
                status: "Running".to_string(),
            }])
        );

        let error: StatusResponse = serde_json::from_str(r#"{"error":"not found"}"#).unwrap();
        assert_eq!(
            error,
            StatusResponse::Error(ErrorBody { error: "not found".to_string() })
        );

        let empty: StatusResponse = serde_json::from_str("[]").unwrap();
        assert_eq!(empty, StatusResponse::Pods(vec![]));
    }

    #[test]
    fn test_error_from_response() {
        let error = Error::from_response(500, r#"{"error":"quota exceeded"}"#);
        assert_eq!(error.to_string(), "quota exceeded");

        let error = Error::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            error,
            Error::Malformed("HTTP 502 without an error message".to_string())
        );
    }

    #[test]
    fn test_status_endpoint_encodes_namespace() {
        assert_eq!(endpoints::status("ns1"), "/status?namespace=ns1");
        assert_eq!(endpoints::status("a b&c"), "/status?namespace=a%20b%26c");
    }

    #[test]
    fn test_client_url() {
        assert_eq!(client_url("ns1"), "http://client.example.com/ns1");
    }

    #[test]
    fn test_cluster_info_requires_both_lists() {
        assert!(decode::<ClusterInfo>(r#"{"nodes":[]}"#).is_err());

        let info: ClusterInfo = decode(
            r#"{"nodes":[{"name":"minikube","status":"Ready"}],"namespaces":[{"name":"default"}]}"#,
        )
        .unwrap();
        assert_eq!(info.nodes.len(), 1);
        assert_eq!(info.namespaces[0].name, "default");
    }
}
