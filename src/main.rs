//! Browser entry point, built with `trunk serve --features csr`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting app");

    leptos::mount::mount_to_body(token_scaffold::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("This binary runs in the browser. Build it with `trunk serve --features csr`.");
}
