use dioxus::prelude::*;

use crate::utils::chart::arc_path;

/// Ring gauge filled from `start_angle` towards `stop_angle` by `value` percent.
/// A 360° span draws a closed ring (used for battery state of charge).
#[allow(non_snake_case)]
#[component]
pub fn Gauge(
    value: f64,
    start_angle: f32,
    stop_angle: f32,
    size: i32,
    stroke: i32,
    track_color: String,
    progress_color: String,
    children: Element,
) -> Element {
    // Normalize & clamp
    let val = value.clamp(0.0, 100.0) as f32;
    // An arc cannot start and end on the same point
    let span = (stop_angle - start_angle).abs().clamp(0.0001, 359.99);
    let end_angle = start_angle + span * (val / 100.0);

    let c = (size as f32) / 2.0;
    let r = c - (stroke as f32) / 2.0 - 1.0; // small padding

    // 0° points up
    let angle_offset = -90.0;
    let start0 = start_angle + angle_offset;
    let stop0 = start_angle + span + angle_offset;
    let end0 = end_angle + angle_offset;

    let track_d = arc_path(c, c, r, start0, stop0);
    let progress_d = arc_path(c, c, r, start0, end0);

    let size_attr = size.to_string();
    let view_box = format!("0 0 {size} {size}");
    let stroke_width = stroke.to_string();
    let container_style = format!("width:{size}px;height:{size}px");

    rsx! {
        div { class: "relative", style: "{container_style}",
            svg { width: "{size_attr}", height: "{size_attr}", view_box: "{view_box}",
                // Track
                path { d: "{track_d}", fill: "none", stroke: "{track_color}", stroke_width: "{stroke_width}", stroke_linecap: "round" }
                // Progress
                if val > 0.0 {
                    path { d: "{progress_d}", fill: "none", stroke: "{progress_color}", stroke_width: "{stroke_width}", stroke_linecap: "round" }
                }
            }
            // Center content
            div { class: "absolute inset-0 grid place-items-center", {children} }
        }
    }
}
