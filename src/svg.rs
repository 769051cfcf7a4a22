//! SVG visualization of a computed layout.
//!
//! Draws the container, the padded usable rectangle, and each placed token
//! as a circle of diameter `size`. Tokens from the degradation pass are
//! dashed. Useful for eyeballing policy changes.
//!
//! # Example
//!
//! ```
//! use bubblelayout::{compute_layout_seeded, derive_policy, svg::render_layout_svg};
//!
//! let items = [(); 6];
//! let result = compute_layout_seeded(&items, 800.0, 400.0, 1200.0, 7);
//!
//! let svg = render_layout_svg(&result, &derive_policy(1200.0), 800.0, 400.0);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::placement::LayoutResult;
use crate::policy::PlacementConstraints;

/// Maximum drawing width for the container panel.
const MAX_PANEL_W: f64 = 600.0;
/// Maximum drawing height for the container panel.
const MAX_PANEL_H: f64 = 400.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin above the label.
const MARGIN_TOP: f64 = 20.0;
/// Height of the label text area above the panel.
const LABEL_H: f64 = 22.0;

/// Render a complete SVG document for one layout.
///
/// `constraints`, `container_w`, and `container_h` must be the values the
/// layout was computed with.
pub fn render_layout_svg(
    result: &LayoutResult,
    constraints: &PlacementConstraints,
    container_w: f64,
    container_h: f64,
) -> String {
    let (pw, ph, scale) = scale_to_fit(container_w, container_h);
    let total_w = pw.max(1.0) + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + ph.max(1.0) + MARGIN_TOP;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .usable { fill: none; stroke: #7baed0; stroke-width: 1; stroke-dasharray: 4,2; }
  .token { fill: #6ba3d6; fill-opacity: 0.8; stroke: #2c6faa; stroke-width: 1.5; }
  .degraded { fill: #d6a36b; fill-opacity: 0.8; stroke: #aa6f2c; stroke-width: 1.5; stroke-dasharray: 3,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .container { fill: #2d2d2d; stroke: #555; }
    .usable { stroke: #4a7a9e; }
    .token { fill: #3a72a4; stroke: #5a9fd4; }
    .degraded { fill: #a4723a; stroke: #d49f5a; }
  }
</style>
"##,
    );

    let label = format!(
        "{}×{}  {} placed  {:?}",
        container_w,
        container_h,
        result.accepted_count(),
        result.termination
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN_TOP + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');

    let ox = MARGIN_X;
    let oy = MARGIN_TOP + LABEL_H;

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="container" rx="2"/>"#,
        ox, oy, pw, ph
    ));
    svg.push('\n');

    let pad = &constraints.padding;
    let (uw, uh) = pad.usable_extent(container_w, container_h);
    if uw > 0.0 && uh > 0.0 {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="usable"/>"#,
            ox + pad.left * scale,
            oy + pad.top * scale,
            uw * scale,
            uh * scale
        ));
        svg.push('\n');
    }

    for p in result {
        let (cx, cy) = p.center();
        let class = if p.degraded { "degraded" } else { "token" };
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" class="{}"/>"#,
            ox + cx * scale,
            oy + cy * scale,
            p.size / 2.0 * scale,
            class
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Scale container dimensions to fit the panel, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if !(w > 0.0 && h > 0.0) || !w.is_finite() || !h.is_finite() {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
