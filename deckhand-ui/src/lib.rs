use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod pages;
mod toast;
mod view;

use pages::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/deckhand-ui.css"/>
        <Title text="Deckhand - Application Deployments"/>
        <Meta name="description" content="Deploy, inspect and tear down namespaced applications"/>

        <Router>
            <nav class="navbar">
                <div class="navbar-brand">
                    <h1>"Deckhand"</h1>
                    <span class="tagline">"API server + client deployments per namespace"</span>
                </div>
            </nav>

            <main class="container">
                <Routes>
                    <Route path="/" view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("deckhand-ui starting");
    mount_to_body(|| view! { <App/> });
}
