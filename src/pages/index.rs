//! Home page showing the signed-in user and the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::state::auth::TokenStore;
use crate::state::ui::UiState;
use crate::util::storage::SharedStore;

#[component]
pub fn IndexPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let storage = expect_context::<SharedStore>();
    let tokens = expect_context::<TokenStore>();
    let ui = expect_context::<RwSignal<UiState>>();
    let identity = tokens.identity_signal();
    let title = config.title.clone();

    let on_toggle_theme = move |_| {
        ui.update(|state| state.toggle_dark_mode(&*storage, &config));
    };

    view! {
        <main class="index-page">
            <header class="index-page__header">
                <h1>{title}</h1>
                <button class="theme-toggle" on:click=on_toggle_theme>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>
            </header>
            {move || {
                let name = identity.get();
                if name.is_empty() {
                    view! {
                        <div class="index-page__signed-out">
                            <p>"You are not signed in."</p>
                            <A href="/login">"Sign in"</A>
                        </div>
                    }
                        .into_any()
                } else {
                    let tokens = tokens.clone();
                    view! {
                        <div class="index-page__signed-in">
                            <p>"Signed in as " <strong>{name}</strong></p>
                            <button class="signout-button" on:click=move |_| tokens.clear()>
                                "Sign out"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
