use dioxus::prelude::*;

use crate::components::HealthCard;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let mut api_key = use_signal(String::new);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "Alti Guard" }
        document::Meta { name: "theme-color", content: "#09090b" } // zinc-950
        document::Meta { name: "color-scheme", content: "dark" }
        main { class: "flex min-h-screen flex-col items-center justify-center bg-zinc-950 text-white p-4 font-sans",
            div { class: "w-full max-w-2xl space-y-6",
                // Header: title and key input
                div { class: "flex justify-between items-center",
                    div {
                        h1 { class: "text-2xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-emerald-400", "Alti Guard" }
                        p { class: "text-xs text-zinc-500", "Live Observability Platform" }
                    }
                    input {
                        class: "bg-zinc-900 border border-zinc-800 rounded px-3 py-2 text-sm focus:border-blue-500 outline-none w-48 transition-all",
                        r#type: "text",
                        placeholder: "Enter API Key...",
                        value: "{api_key}",
                        oninput: move |e| api_key.set(e.value()),
                    }
                }
                HealthCard { api_key }
            }
        }
    }
}
