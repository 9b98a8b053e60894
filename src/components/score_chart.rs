use dioxus::prelude::*;

use crate::shared::types::HistoryPoint;
use crate::utils::format::format_percent_value;

const VIEW_W: f32 = 600.0;
const VIEW_H: f32 = 192.0;
const PAD: f32 = 8.0;

/// Projects percentages onto the chart canvas. The y-domain is fixed to
/// [0, 100]; out-of-range values are pinned to the edges.
pub fn plot_coords(points: &[HistoryPoint]) -> Vec<(f32, f32)> {
    let inner_w = VIEW_W - PAD * 2.0;
    let inner_h = VIEW_H - PAD * 2.0;
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f32
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() > 1 {
                PAD + step * i as f32
            } else {
                VIEW_W / 2.0
            };
            let v = (p.score_percent as f32).clamp(0.0, 100.0);
            let y = PAD + inner_h * (1.0 - v / 100.0);
            (x, y)
        })
        .collect()
}

pub fn line_path(coords: &[(f32, f32)]) -> String {
    coords
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{cmd} {x:.2} {y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(non_snake_case)]
#[component]
pub fn ScoreChart(points: Vec<HistoryPoint>, stroke: String) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let coords = plot_coords(&points);
    let d = line_path(&coords);
    let view_box = format!("0 0 {VIEW_W} {VIEW_H}");
    let column_w = if coords.len() > 1 {
        (VIEW_W - PAD * 2.0) / (coords.len() - 1) as f32
    } else {
        VIEW_W
    };

    rsx! {
        div { class: "h-48 w-full",
            svg { class: "block overflow-visible", view_box: "{view_box}", width: "100%", height: "100%",
                if coords.len() > 1 {
                    path { d: "{d}", fill: "none", stroke: "{stroke}", stroke_width: "3", stroke_linejoin: "round", stroke_linecap: "round" }
                }
                // Invisible hover columns, one per point
                {
                    coords.iter().enumerate().map(|(i, &(x, _))| {
                        let left = x - column_w / 2.0;
                        rsx!{ rect {
                            key: "{i}", x: "{left}", y: "0", width: "{column_w}", height: "{VIEW_H}", fill: "transparent",
                            onmouseenter: move |_| *hovered.write() = Some(i),
                            onmouseleave: move |_| *hovered.write() = None,
                            ontouchstart: move |_| *hovered.write() = Some(i),
                            ontouchend: move |_| *hovered.write() = None,
                        }}
                    })
                }
                {
                    // The series may have shrunk since the pointer entered
                    match (*hovered.read()).and_then(|i| points.get(i).zip(coords.get(i))) {
                        Some((p, &(x, y))) => {
                            let time_label = p.display_time.clone();
                            let value_label = format_percent_value(p.score_percent);
                            let cw = 7.0f32; // approx char width at 11px
                            let tip_w = (time_label.len().max(value_label.len()) as f32) * cw + 16.0;
                            let tip_h = 36.0f32;
                            let tip_x = (x + 10.0).min(VIEW_W - tip_w - 2.0).max(2.0);
                            let tip_y = (y - tip_h - 10.0).max(2.0);
                            rsx!{ g { key: "tooltip",
                                circle { cx: "{x}", cy: "{y}", r: "6", fill: "#fff" }
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "8", fill: "#18181b", stroke: "#27272a", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 15.0}", class: "fill-current text-[11px] text-zinc-500", "{time_label}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 29.0}", class: "fill-current text-[11px] text-white", "{value_label}" }
                            }}
                        }
                        None => rsx!{ Fragment {} }
                    }
                }
            }
        }
    }
}
