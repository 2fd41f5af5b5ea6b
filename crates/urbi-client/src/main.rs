//! Urbi Admin Client
//!
//! Yew WASM single-page application for managing videos and short-links.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "urbi-client only supports wasm32 target. Use: cargo check -p urbi-client --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod services;
mod state;
mod storage;
#[cfg(test)]
mod test_util;
mod util;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    // Saves the panic message and redirects to the panic page
    pages::set_panic_hook();

    let filter = EnvFilter::new("info,urbi_client=debug,urbi_core=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
