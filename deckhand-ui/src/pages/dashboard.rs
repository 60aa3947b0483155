//! Deployment dashboard page
//!
//! Cluster overview plus the deploy, status and delete forms. Element ids
//! are part of the contract with the host page styling and must not change.

use std::rc::Rc;

use deckhand_common::dashboard::{Dashboard, DashboardOptions};
use deckhand_common::tables::{status_error_text, Cell, Section, Table};
use deckhand_common::{DeleteRequest, DeploymentRequest, Form, Image};
use leptos::*;

use crate::api::ApiClient;
use crate::toast::NoticeToasts;
use crate::view::{SignalView, StatusOutput};

type Controller = Rc<Dashboard<ApiClient, SignalView>>;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = SignalView::new();
    let dashboard: Controller = Rc::new(
        Dashboard::new(ApiClient::default(), state).with_options(DashboardOptions::default()),
    );

    let (namespace, set_namespace) = create_signal(String::new());
    let (delete_namespace, set_delete_namespace) = create_signal(String::new());
    let (status_namespace, set_status_namespace) = create_signal(String::new());

    // Load data on mount
    let loader = dashboard.clone();
    create_effect(move |_| {
        let dashboard = loader.clone();
        spawn_local(async move {
            let _ = dashboard.initialize().await;
        });
    });

    let deployer = dashboard.clone();
    let on_deploy = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = DeploymentRequest {
            api_image: state.api_image.get_untracked(),
            client_image: state.client_image.get_untracked(),
            namespace: namespace.get_untracked(),
        };

        let dashboard = deployer.clone();
        spawn_local(async move {
            let _ = dashboard.deploy(request).await;
        });
    };

    let querier = dashboard.clone();
    let on_status = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let namespace = status_namespace.get_untracked();
        let dashboard = querier.clone();
        spawn_local(async move {
            let _ = dashboard.get_status(&namespace).await;
        });
    };

    let deleter = dashboard;
    let on_delete = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = DeleteRequest { namespace: delete_namespace.get_untracked() };
        let dashboard = deleter.clone();
        spawn_local(async move {
            let _ = dashboard.destroy(request).await;
        });
    };

    view! {
        <div class="dashboard">
            <NoticeToasts state=state/>

            <div class="dashboard-section">
                <h2>"Cluster Information"</h2>
                <div id="cluster-info">
                    {move || state.cluster.get().map(|info| {
                        Section::cluster(&info)
                            .into_iter()
                            .map(|section| view! {
                                <h3>{section.heading}</h3>
                                <DataTable table=section.table/>
                            })
                            .collect_view()
                    })}
                </div>
            </div>

            <div class="dashboard-section">
                <h2>"Deploy Application"</h2>
                <form id="deploy-form" on:submit=on_deploy>
                    <div class="form-group">
                        <ImageSelect
                            id="api-image"
                            label="API Server Image"
                            images=state.images
                            selected=state.api_image
                        />
                    </div>
                    <div class="form-group">
                        <ImageSelect
                            id="client-image"
                            label="Client Image"
                            images=state.images
                            selected=state.client_image
                        />
                    </div>
                    <div class="form-group">
                        <label for="namespace">"Namespace"</label>
                        <input
                            id="namespace"
                            type="text"
                            placeholder="shop-dev"
                            on:input=move |ev| set_namespace.set(event_target_value(&ev))
                            prop:value=namespace
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || state.is_pending(Form::Deploy)
                    >
                        {move || if state.is_pending(Form::Deploy) { "Deploying..." } else { "Deploy" }}
                    </button>
                </form>
            </div>

            <div class="dashboard-section">
                <h2>"Application Status"</h2>
                <form id="status-form" on:submit=on_status>
                    <div class="form-group">
                        <label for="status-namespace">"Namespace"</label>
                        <input
                            id="status-namespace"
                            type="text"
                            on:input=move |ev| set_status_namespace.set(event_target_value(&ev))
                            prop:value=status_namespace
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn-secondary"
                        disabled=move || state.is_pending(Form::Status)
                    >
                        "Get Status"
                    </button>
                </form>
                <div id="status-output">
                    {move || match state.status.get() {
                        StatusOutput::Empty => ().into_view(),
                        StatusOutput::Pods(table) => view! { <DataTable table=table/> }.into_view(),
                        StatusOutput::Error(message) => {
                            view! { <p class="error">{status_error_text(&message)}</p> }.into_view()
                        }
                    }}
                </div>
            </div>

            <div class="dashboard-section">
                <h2>"Delete Application"</h2>
                <form id="delete-form" on:submit=on_delete>
                    <div class="form-group">
                        <label for="delete-namespace">"Namespace"</label>
                        <input
                            id="delete-namespace"
                            type="text"
                            on:input=move |ev| set_delete_namespace.set(event_target_value(&ev))
                            prop:value=delete_namespace
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn-danger"
                        disabled=move || state.is_pending(Form::Delete)
                    >
                        {move || if state.is_pending(Form::Delete) { "Deleting..." } else { "Delete" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Selector whose options are replaced wholesale on every image load
#[component]
fn ImageSelect(
    id: &'static str,
    label: &'static str,
    images: RwSignal<Vec<Image>>,
    selected: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <select
            id=id
            on:change=move |ev| selected.set(event_target_value(&ev))
            prop:value=move || selected.get()
        >
            {move || {
                images
                    .get()
                    .into_iter()
                    .map(|image| view! { <option value=image.clone()>{image}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
fn DataTable(table: Table) -> impl IntoView {
    let Table { headers, rows } = table;

    view! {
        <table>
            <thead>
                <tr>
                    {headers.into_iter().map(|header| view! { <th>{header}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            {row.into_iter().map(|cell| view! { <td>{render_cell(cell)}</td> }).collect_view()}
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn render_cell(cell: Cell) -> View {
    match cell {
        Cell::Text(text) => text.into_view(),
        Cell::Link { href, label } => view! {
            <a href=href target="_blank">{label}</a>
        }
        .into_view(),
    }
}
