//! Login page that stores a pasted token.
//!
//! The token issuer lives elsewhere; this page only writes what it is given
//! into the token slot and returns to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::TokenStore;
use crate::util::token::decode_username;

/// Trim the submitted token and require a value.
pub(crate) fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("Paste a token first.");
    }
    Ok(token.to_owned())
}

pub(crate) fn unreadable_token_message(reason: &str) -> String {
    format!("Token saved, but no username could be read from it: {reason}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let tokens = expect_context::<TokenStore>();
    let navigate = use_navigate();
    let input = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = match validate_token_input(&input.get()) {
            Ok(token) => token,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let decoded = decode_username(&token);
        tokens.write(token);
        match decoded {
            Ok(username) => {
                log::info!("signed in as {username}");
                navigate("/", NavigateOptions::default());
            }
            Err(e) => {
                log::warn!("stored token without readable username: {e}");
                info.set(unreadable_token_message(&e.to_string()));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="header.payload.signature"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
