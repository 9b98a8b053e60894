use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        backend::init_tracing();

        // Missing store config is not fatal: the dashboard still serves and
        // every fetch reports the problem as an error status.
        match backend::init_store() {
            Ok(()) => {
                if let Some(store) = backend::GLOBAL_STORE.get() {
                    eprintln!("[store] initialized: {}", store.endpoint());
                }
            }
            Err(e) => eprintln!("[store] failed to init: {e:#}"),
        }

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "check" {
                let api_key = args.next().unwrap_or_default();
                let rt = tokio::runtime::Runtime::new().expect("rt");
                rt.block_on(async move {
                    let Some(store) = backend::GLOBAL_STORE.get() else {
                        eprintln!("[check] metrics store not initialized");
                        std::process::exit(1);
                    };
                    match backend::check::run_check(store, &api_key).await {
                        Ok(state) => eprint!("{}", backend::check::render_report(&state)),
                        Err(e) => {
                            eprintln!("[check] {e:#}");
                            std::process::exit(1);
                        }
                    }
                });
                return;
            }
        }
    }
    dioxus::launch(app::App);
}
