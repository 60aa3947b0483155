//! Signal-backed implementation of the dashboard views

use deckhand_common::dashboard::{Notice, Render};
use deckhand_common::tables::Table;
use deckhand_common::{ClusterInfo, Form, Image, Pod};
use leptos::*;

/// How long a notice stays on screen
#[cfg(target_arch = "wasm32")]
const TOAST_MS: u64 = 5000;

/// Content of the status-output container
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatusOutput {
    #[default]
    Empty,
    Pods(Table),
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Reactive state the page components read from. Every field is a signal,
/// so the view is `Copy` and can be moved into any event handler.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub images: RwSignal<Vec<Image>>,
    pub api_image: RwSignal<String>,
    pub client_image: RwSignal<String>,
    pub cluster: RwSignal<Option<ClusterInfo>>,
    pub status: RwSignal<StatusOutput>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: RwSignal<u64>,
    deploying: RwSignal<bool>,
    deleting: RwSignal<bool>,
    querying: RwSignal<bool>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            images: create_rw_signal(Vec::new()),
            api_image: create_rw_signal(String::new()),
            client_image: create_rw_signal(String::new()),
            cluster: create_rw_signal(None),
            status: create_rw_signal(StatusOutput::Empty),
            toasts: create_rw_signal(Vec::new()),
            next_toast: create_rw_signal(0),
            deploying: create_rw_signal(false),
            deleting: create_rw_signal(false),
            querying: create_rw_signal(false),
        }
    }

    fn pending_signal(&self, form: Form) -> RwSignal<bool> {
        match form {
            Form::Deploy => self.deploying,
            Form::Delete => self.deleting,
            Form::Status => self.querying,
        }
    }

    pub fn is_pending(&self, form: Form) -> bool {
        self.pending_signal(form).get()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for SignalView {
    fn images(&self, images: &[Image]) {
        // a freshly filled <select> shows its first option
        let first = images.first().cloned().unwrap_or_default();
        self.api_image.set(first.clone());
        self.client_image.set(first);
        self.images.set(images.to_vec());
    }

    fn cluster(&self, info: &ClusterInfo) {
        self.cluster.set(Some(info.clone()));
    }

    fn pods(&self, namespace: &str, pods: &[Pod]) {
        self.status.set(StatusOutput::Pods(Table::pods(namespace, pods)));
    }

    fn status_error(&self, message: &str) {
        self.status.set(StatusOutput::Error(message.to_string()));
    }

    fn notify(&self, notice: Notice) {
        let id = self.next_toast.get_untracked();
        self.next_toast.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        #[cfg(target_arch = "wasm32")]
        {
            let view = *self;
            set_timeout(
                move || view.dismiss(id),
                std::time::Duration::from_millis(TOAST_MS),
            );
        }
    }

    fn pending(&self, form: Form, pending: bool) {
        self.pending_signal(form).set(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_common::tables::Cell;

    #[test]
    fn test_images_replace_options_and_select_first() {
        let runtime = create_runtime();
        let view = SignalView::new();

        view.images(&["old:1".to_string()]);
        view.images(&["api:latest".to_string(), "client:latest".to_string()]);

        assert_eq!(view.images.get(), vec!["api:latest", "client:latest"]);
        assert_eq!(view.api_image.get(), "api:latest");
        assert_eq!(view.client_image.get(), "api:latest");

        view.images(&[]);
        assert!(view.images.get().is_empty());
        assert_eq!(view.api_image.get(), "");

        runtime.dispose();
    }

    #[test]
    fn test_status_output_is_replaced() {
        let runtime = create_runtime();
        let view = SignalView::new();

        view.status_error("not found");
        assert_eq!(view.status.get(), StatusOutput::Error("not found".to_string()));

        let pods = vec![Pod { name: "pod-1".to_string(), status: "Running".to_string() }];
        view.pods("ns1", &pods);
        match view.status.get() {
            StatusOutput::Pods(table) => {
                assert_eq!(table.rows.len(), 1);
                assert_eq!(table.rows[0][2].plain(), "http://client.example.com/ns1");
                assert!(matches!(table.rows[0][2], Cell::Link { .. }));
            }
            other => panic!("expected pod table, got {:?}", other),
        }

        runtime.dispose();
    }

    #[test]
    fn test_notices_and_pending_flags() {
        let runtime = create_runtime();
        let view = SignalView::new();

        view.notify(Notice::error("quota exceeded"));
        view.notify(Notice::success("Deployment created successfully"));
        let toasts = view.toasts.get();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].notice.message, "quota exceeded");
        assert_ne!(toasts[0].id, toasts[1].id);

        view.dismiss(toasts[0].id);
        assert_eq!(view.toasts.get().len(), 1);

        view.pending(Form::Delete, true);
        assert!(view.is_pending(Form::Delete));
        assert!(!view.is_pending(Form::Deploy));

        runtime.dispose();
    }
}
