//! Dashboard controller
//!
//! Bridges operator intent (initial load, form submissions) and backend
//! responses to whatever surface renders them:
//! - `Backend` issues one HTTP call per endpoint
//! - `Render` draws one view per kind of result
//! - `Dashboard` sequences the two and guards each form against
//!   duplicate submissions while a request is in flight

use std::cell::Cell;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    ActionStatus, ClusterInfo, DeleteRequest, DeploymentRequest, Error, Form, Image, Pod, Result,
    StatusResponse,
};

/// Transport for the backend endpoints
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /get_images`
    async fn images(&self) -> Result<Vec<Image>>;

    /// `GET /cluster_info`
    async fn cluster_info(&self) -> Result<ClusterInfo>;

    /// `POST /deploy`
    async fn deploy(&self, request: &DeploymentRequest) -> Result<ActionStatus>;

    /// `POST /delete`
    async fn delete(&self, request: &DeleteRequest) -> Result<ActionStatus>;

    /// `GET /status?namespace=...`
    async fn status(&self, namespace: &str) -> Result<StatusResponse>;
}

/// Output surface, one method per view
pub trait Render {
    /// Replace the options of both image selectors
    fn images(&self, images: &[Image]);

    /// Replace the node and namespace tables
    fn cluster(&self, info: &ClusterInfo);

    /// Replace the status output with the pod table of `namespace`
    fn pods(&self, namespace: &str, pods: &[Pod]);

    /// Replace the status output with an error paragraph
    fn status_error(&self, message: &str);

    /// Show a transient, non-blocking message
    fn notify(&self, notice: Notice);

    /// A form's request started or settled
    fn pending(&self, form: Form, pending: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// Message shown to the operator after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into() }
    }

    /// Busy rejections are warnings, everything else is an error
    pub fn from_error(error: &Error) -> Self {
        let level = match error {
            Error::Busy(_) => Level::Warning,
            _ => Level::Error,
        };
        Self { level, message: error.to_string() }
    }

    pub fn is_failure(&self) -> bool {
        self.level != Level::Success
    }
}

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Re-fetch cluster info after a successful deploy or delete
    pub refresh_after_change: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self { refresh_after_change: true }
    }
}

pub struct Dashboard<B, R> {
    backend: B,
    view: R,
    options: DashboardOptions,
    in_flight: [Cell<bool>; 3],
}

/// Clears the form's in-flight flag when the request settles
struct InFlight<'a, R: Render> {
    flag: &'a Cell<bool>,
    view: &'a R,
    form: Form,
}

impl<R: Render> Drop for InFlight<'_, R> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.view.pending(self.form, false);
    }
}

fn slot(form: Form) -> usize {
    match form {
        Form::Deploy => 0,
        Form::Delete => 1,
        Form::Status => 2,
    }
}

impl<B: Backend, R: Render> Dashboard<B, R> {
    pub fn new(backend: B, view: R) -> Self {
        Self {
            backend,
            view,
            options: DashboardOptions::default(),
            in_flight: Default::default(),
        }
    }

    pub fn with_options(mut self, options: DashboardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn view(&self) -> &R {
        &self.view
    }

    pub fn is_in_flight(&self, form: Form) -> bool {
        self.in_flight[slot(form)].get()
    }

    /// Load images and cluster info concurrently.
    ///
    /// Each fetch renders its own view; a failure renders the empty state
    /// for that view only. Returns the first failure.
    pub async fn initialize(&self) -> Result<()> {
        let (images, cluster) = futures::join!(self.load_images(), self.load_cluster_info());
        images.and(cluster)
    }

    pub async fn load_images(&self) -> Result<()> {
        match self.backend.images().await {
            Ok(images) => {
                debug!(count = images.len(), "loaded images");
                self.view.images(&images);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to load images");
                self.view.images(&[]);
                self.view.notify(Notice::error(format!("Failed to load images: {}", e)));
                Err(e)
            }
        }
    }

    pub async fn load_cluster_info(&self) -> Result<()> {
        match self.backend.cluster_info().await {
            Ok(info) => {
                debug!(
                    nodes = info.nodes.len(),
                    namespaces = info.namespaces.len(),
                    "loaded cluster info"
                );
                self.view.cluster(&info);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to load cluster info");
                self.view.cluster(&ClusterInfo::default());
                self.view.notify(Notice::error(format!("Failed to load cluster info: {}", e)));
                Err(e)
            }
        }
    }

    /// Submit a deployment exactly as entered; the backend validates it
    pub async fn deploy(&self, request: DeploymentRequest) -> Result<ActionStatus> {
        let guard = self.begin(Form::Deploy)?;
        debug!(
            namespace = %request.namespace,
            api_image = %request.api_image,
            client_image = %request.client_image,
            "submitting deployment"
        );
        let result = self.backend.deploy(&request).await;
        drop(guard);
        self.settle(Form::Deploy, result).await
    }

    pub async fn destroy(&self, request: DeleteRequest) -> Result<ActionStatus> {
        let guard = self.begin(Form::Delete)?;
        debug!(namespace = %request.namespace, "submitting delete");
        let result = self.backend.delete(&request).await;
        drop(guard);
        self.settle(Form::Delete, result).await
    }

    /// Query the pods of `namespace`.
    ///
    /// An error inside a 2xx body replaces the status output; a non-2xx
    /// response only raises a notice and leaves the output as it was.
    pub async fn get_status(&self, namespace: &str) -> Result<StatusResponse> {
        let _guard = self.begin(Form::Status)?;
        debug!(namespace, "querying status");

        match self.backend.status(namespace).await {
            Ok(response) => {
                match &response {
                    StatusResponse::Pods(pods) => self.view.pods(namespace, pods),
                    StatusResponse::Error(body) => self.view.status_error(&body.error),
                }
                Ok(response)
            }
            Err(e) => {
                warn!(namespace, error = %e, "status request failed");
                self.view.notify(Notice::from_error(&e));
                Err(e)
            }
        }
    }

    fn begin(&self, form: Form) -> Result<InFlight<'_, R>> {
        let flag = &self.in_flight[slot(form)];
        if flag.replace(true) {
            let error = Error::Busy(form);
            warn!(%form, "rejected duplicate submission");
            self.view.notify(Notice::from_error(&error));
            return Err(error);
        }

        self.view.pending(form, true);
        Ok(InFlight { flag, view: &self.view, form })
    }

    async fn settle(&self, form: Form, result: Result<ActionStatus>) -> Result<ActionStatus> {
        match result {
            Ok(status) => {
                info!(%form, status = %status.status, "request succeeded");
                self.view.notify(Notice::success(status.status.clone()));
                if self.options.refresh_after_change {
                    // failures are already rendered as a notice
                    let _ = self.load_cluster_info().await;
                }
                Ok(status)
            }
            Err(e) => {
                warn!(%form, error = %e, "request failed");
                self.view.notify(Notice::from_error(&e));
                Err(e)
            }
        }
    }
}
