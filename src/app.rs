//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{index::IndexPage, login::LoginPage};
use crate::state::auth::{TokenStore, install_storage_sync};
use crate::state::ui::UiState;
use crate::util::storage::{LocalStorage, SharedStore};

/// Root application component.
///
/// Builds the storage backend, token store, and UI state once, provides them
/// as contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let storage: SharedStore = Arc::new(LocalStorage);
    let tokens = TokenStore::new(storage.clone(), &config.token_key);
    install_storage_sync(&tokens);
    let ui = RwSignal::new(UiState::load(&*storage, &config));
    let title = config.title.clone();

    provide_context(config);
    provide_context(storage);
    provide_context(tokens);
    provide_context(ui);

    view! {
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
