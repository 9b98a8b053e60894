use dioxus::prelude::*;
use futures::StreamExt;

use dioxus::logger::tracing::{debug, warn};

use crate::api::recent_health_metrics;
use crate::components::ScoreChart;
use crate::shared::display::{DisplayState, Status};
use crate::shared::palette::Tone;
use crate::shared::poll::{on_command, on_response, PollCommand, PollGate};

#[allow(non_snake_case)]
#[component]
pub fn HealthCard(api_key: ReadOnlySignal<String>) -> Element {
    let mut display = use_signal(DisplayState::default);
    let mut gate = use_signal(PollGate::default);

    // Every fetch runs as its own task so a slow response never blocks the
    // command queue; the gate drops stale ones and skips overlapping ticks.
    let poller = use_coroutine(move |mut rx: UnboundedReceiver<PollCommand>| async move {
        while let Some(cmd) = rx.next().await {
            let Some(ticket) = on_command(&mut gate.write(), &mut display.write(), cmd) else {
                continue;
            };
            spawn(async move {
                let result = recent_health_metrics(ticket.api_key().to_string())
                    .await
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    warn!("[health_card] fetch failed: {e}");
                }
                if !on_response(&mut gate.write(), &mut display.write(), &ticket, result) {
                    debug!("[health_card] discarding stale response");
                }
            });
        }
    });

    // Timer: one interval per key, torn down before the next one starts
    #[cfg(feature = "web")]
    {
        use crate::shared::poll::POLL_INTERVAL_MS;
        use dioxus::logger::tracing::info;
        use gloo_timers::callback::Interval;

        let timer_handle: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut timer_handle = timer_handle.clone();
            move || {
                if let Some(h) = timer_handle.write().take() {
                    h.cancel();
                }
            }
        });

        use_effect({
            let mut timer_handle = timer_handle.clone();
            move || {
                // Reading the key subscribes the effect to it
                let key = api_key();

                if let Some(prev) = timer_handle.write().take() {
                    prev.cancel();
                }
                poller.send(PollCommand::Rekey(key));

                info!(
                    "[health_card] polling every {} ms for the current key",
                    POLL_INTERVAL_MS
                );
                let handle = Interval::new(POLL_INTERVAL_MS, move || {
                    poller.send(PollCommand::Tick);
                });
                timer_handle.set(Some(handle));
            }
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = (api_key, poller);

    let state = display.read();
    let status = state.status().as_str().to_string();
    let tone = Tone::for_status(&status);
    let readout = state.readout();
    let points = state.history().to_vec();
    let stroke = tone.line_color().to_string();
    let card_class = tone.card_class();
    let badge_class = tone.badge_class();
    let error_line = match state.status() {
        Status::Error => state.last_error().map(str::to_string),
        _ => None,
    };

    rsx! {
        div { class: card_class,
            // Top row: score and status
            div { class: "flex justify-between items-start mb-8",
                div {
                    p { class: "text-xs font-medium text-zinc-500 uppercase tracking-widest", "Refusal Score" }
                    h2 { class: "text-6xl font-bold font-mono mt-2", "{readout}" }
                }
                span { class: badge_class, "{status}" }
            }
            ScoreChart { points, stroke }
            if let Some(err) = error_line {
                div { class: "mt-4 pt-2 border-t border-zinc-800 text-xs text-red-400", "Last fetch failed: {err}" }
            }
        }
    }
}
