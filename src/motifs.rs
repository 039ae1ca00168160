use crate::canvas::{Canvas, Rgb};
use crate::theme::Theme;

// Unrecognized theme names dispatch to Default, so rendering never
// fails on a custom theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motif {
    AiMl,
    SeoAnalytics,
    Automation,
    Strategy,
    Default,
}

impl Motif {
    pub fn for_theme(name: &str) -> Self {
        match name {
            "ai_ml" => Motif::AiMl,
            "seo_analytics" => Motif::SeoAnalytics,
            "automation" => Motif::Automation,
            "strategy" => Motif::Strategy,
            _ => Motif::Default,
        }
    }
}

/// Coordinates are fixed constants laid out for the 1200x630 canvas;
/// connectors go down before nodes so nodes sit on top.
#[derive(Debug, Clone, Default)]
pub struct VisualRenderer;

impl VisualRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, mut canvas: Canvas, theme: &Theme) -> Canvas {
        let accent = theme.accent_color;
        match Motif::for_theme(&theme.name) {
            Motif::AiMl => draw_ai_ml(&mut canvas, accent),
            Motif::SeoAnalytics => draw_seo_analytics(&mut canvas, accent),
            Motif::Automation => draw_automation(&mut canvas, accent),
            Motif::Strategy => draw_strategy(&mut canvas, accent),
            Motif::Default => draw_default(&mut canvas, accent),
        }
        canvas
    }
}

// Minimal fallback: two semi-transparent accent circles.
fn draw_default(canvas: &mut Canvas, accent: Rgb) {
    canvas.circle(1000.0, 200.0, 100.0, accent, 0.3);
    canvas.circle(200.0, 500.0, 100.0, accent, 0.3);
}

// Connected node network: glowing hub with six satellites.
fn draw_ai_ml(canvas: &mut Canvas, accent: Rgb) {
    let (center_x, center_y) = (900.0, 400.0);
    let satellites = [
        (center_x - 200.0, center_y - 150.0),
        (center_x, center_y - 200.0),
        (center_x + 200.0, center_y - 150.0),
        (center_x + 200.0, center_y + 100.0),
        (center_x, center_y + 200.0),
        (center_x - 200.0, center_y + 100.0),
    ];

    // Hub glow, then solid hub.
    canvas.circle(center_x, center_y, 80.0, accent, 0.2);
    canvas.circle(center_x, center_y, 50.0, Rgb::WHITE, 0.7);

    // Spokes before satellites, so the nodes cover line ends.
    for (sat_x, sat_y) in satellites {
        canvas.line(center_x, center_y, sat_x, sat_y, Rgb::WHITE, 0.3, 2.0);
    }
    for (sat_x, sat_y) in satellites {
        canvas.circle(sat_x, sat_y, 35.0, Rgb::WHITE, 0.7);
    }
}

// Bar chart with highlight caps and a rising trend line over it.
fn draw_seo_analytics(canvas: &mut Canvas, accent: Rgb) {
    let base_x = 850.0;
    let base_y = 500.0;
    let bar_width = 40.0;
    let bar_spacing = 20.0;
    let bar_heights = [120.0, 180.0, 140.0, 220.0, 260.0];

    for (idx, height) in bar_heights.iter().enumerate() {
        let x = base_x + idx as f32 * (bar_width + bar_spacing);
        let y = base_y - height;
        canvas.fill_rect(x, y, bar_width, *height, accent, 0.7);
        canvas.fill_rect(x, y, bar_width, 5.0, Rgb::WHITE, 0.5);
    }

    let trend = [
        (base_x - 50.0, base_y - 80.0),
        (base_x + 80.0, base_y - 140.0),
        (base_x + 180.0, base_y - 180.0),
        (base_x + 280.0, base_y - 240.0),
    ];
    for pair in trend.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        canvas.line(x1, y1, x2, y2, accent, 0.8, 4.0);
    }
    for (x, y) in trend {
        canvas.circle(x, y, 8.0, Rgb::WHITE, 0.5);
    }
}

// Three interlocking gear nodes with connectors and an arrow glyph.
fn draw_automation(canvas: &mut Canvas, accent: Rgb) {
    let nodes: [(f32, f32, f32); 3] = [
        (850.0, 250.0, 80.0),
        (950.0, 400.0, 70.0),
        (750.0, 400.0, 70.0),
    ];

    canvas.line(nodes[0].0, nodes[0].1, nodes[1].0, nodes[1].1, accent, 0.7, 3.0);
    canvas.line(nodes[0].0, nodes[0].1, nodes[2].0, nodes[2].1, accent, 0.7, 3.0);
    canvas.line(nodes[1].0, nodes[1].1, nodes[2].0, nodes[2].1, accent, 0.7, 3.0);

    for (x, y, radius) in nodes {
        canvas.circle(x, y, radius + 10.0, accent, 0.5);
        canvas.outlined_circle(x, y, radius, Rgb::WHITE, 0.7, accent, 0.7, 3.0);
        canvas.circle(x, y, 15.0, accent, 0.7);
    }

    // Arrow pointing down at the bottom-right gear.
    let (tip_x, tip_y) = (950.0, 350.0);
    canvas.polygon(
        &[
            (tip_x, tip_y),
            (tip_x - 10.0, tip_y - 15.0),
            (tip_x + 10.0, tip_y - 15.0),
        ],
        accent,
        0.7,
    );
}

// Three-level hierarchy pyramid; the bottom row switches to the accent
// fill to read as "execution" under the white strategy/tactics levels.
fn draw_strategy(canvas: &mut Canvas, accent: Rgb) {
    let (top_x, top_y) = (900.0f32, 180.0f32);
    let (top_w, top_h) = (140.0f32, 60.0f32);
    canvas.outlined_rect(
        top_x - top_w / 2.0,
        top_y - top_h / 2.0,
        top_w,
        top_h,
        Rgb::WHITE,
        0.7,
        accent,
        0.8,
        2.0,
    );

    let level2_y = 320.0;
    let level2 = [(800.0f32, level2_y), (1000.0f32, level2_y)];
    let (node2_w, node2_h) = (120.0f32, 50.0f32);
    for (node_x, node_y) in level2 {
        canvas.line(
            top_x,
            top_y + top_h / 2.0,
            node_x,
            node_y - node2_h / 2.0,
            accent,
            0.8,
            3.0,
        );
        canvas.outlined_rect(
            node_x - node2_w / 2.0,
            node_y - node2_h / 2.0,
            node2_w,
            node2_h,
            Rgb::WHITE,
            0.7,
            accent,
            0.8,
            2.0,
        );
    }

    let level3_y = 480.0;
    let level3 = [(750.0f32, level3_y), (900.0f32, level3_y), (1050.0f32, level3_y)];
    let (node3_w, node3_h) = (100.0f32, 45.0f32);
    for (idx, (node_x, node_y)) in level3.into_iter().enumerate() {
        // First bottom node hangs off the first middle node, the other
        // two off the second.
        let parent = if idx == 0 { level2[0] } else { level2[1] };
        canvas.line(
            parent.0,
            parent.1 + node2_h / 2.0,
            node_x,
            node_y - node3_h / 2.0,
            accent,
            0.8,
            2.0,
        );
        canvas.outlined_rect(
            node_x - node3_w / 2.0,
            node_y - node3_h / 2.0,
            node3_w,
            node3_h,
            accent,
            0.5,
            accent,
            0.8,
            2.0,
        );
    }
}
