//! SVG rendering of a [`BlochScene`].

use crate::camera::{OrbitCamera, ScreenPoint};
use crate::scene::{BlochScene, Polyline, Rgb};

/// Default viewport height, in pixels.
pub const DEFAULT_SIZE: u32 = 320;

/// Render `scene` as a standalone SVG document of `width`×`height` pixels.
///
/// Lines are drawn back to front in scene order; segments that fall
/// behind the camera are dropped.
pub fn render_svg(scene: &BlochScene, camera: &OrbitCamera, width: u32, height: u32) -> String {
    let (w, h) = (f64::from(width), f64::from(height));
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    // Sphere silhouette.
    let (right, _, _) = camera.view_basis();
    let center = camera.project(crate::math::Vec3::ZERO, w, h);
    let rim = camera.project(right * scene.sphere_radius, w, h);
    if let (Some(c), Some(r)) = (center, rim) {
        let radius = ((r.x - c.x).powi(2) + (r.y - c.y).powi(2)).sqrt();
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            c.x,
            c.y,
            radius,
            Rgb::SHELL.hex(),
            scene.sphere_opacity
        ));
    }

    for line in scene.lines() {
        if let Some(element) = polyline(line, camera, w, h) {
            svg.push_str(&element);
        }
    }

    for label in scene.labels() {
        if let Some(p) = camera.project(label.anchor, w, h) {
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" text-anchor=\"middle\" fill=\"{}\">{}</text>\n",
                p.x,
                p.y,
                label.color.hex(),
                escape(&label.text)
            ));
        }
    }

    let origin = camera.project(crate::math::Vec3::ZERO, w, h);
    let tip = camera.project(scene.arrow.tip, w, h);
    if let (Some(o), Some(t)) = (origin, tip) {
        let color = scene.arrow.color.hex();
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{color}\" stroke-width=\"3\"/>\n",
            o.x, o.y, t.x, t.y
        ));
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"{color}\"/>\n",
            t.x, t.y
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn polyline(line: &Polyline, camera: &OrbitCamera, w: f64, h: f64) -> Option<String> {
    let points: Vec<ScreenPoint> = line
        .points
        .iter()
        .filter_map(|p| camera.project(*p, w, h))
        .collect();
    if points.len() < 2 {
        return None;
    }
    let coords = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    Some(format!(
        "  <polyline points=\"{coords}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"/>\n",
        line.color.hex(),
        line.width,
        line.opacity
    ))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
