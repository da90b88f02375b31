use macroquad::prelude::*;

use super::{FONT_SIZE, LINE_SPACING, SHADOW_OFFSET};
use crate::app::user_settings::UserSettings;
use crate::graph::Graph;
use crate::histogram::Histogram;

const MARGIN_LEFT: f32 = 25.0;
const HELP: &str = "[Tab] shape  [Up/Down] buckets  [R] reset  [Space] pause";

pub fn draw(settings: &UserSettings, histogram: &Histogram, graph: &Graph) {
    let status = if settings.paused { " (paused)" } else { "" };
    let lines = [
        format!("shape: {}{}", histogram.shape().name(), status),
        format!("buckets: {}", histogram.buckets()),
        format!("samples: {}", histogram.total()),
        format!("scale: {:.0}", graph.current_max()),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_shadowed(line, MARGIN_LEFT, LINE_SPACING * (i + 1) as f32, WHITE);
    }
    draw_shadowed(HELP, MARGIN_LEFT, screen_height() - LINE_SPACING / 2.0, LIGHTGRAY);
}

// text with a dark copy offset behind it so it stays readable over the bars
fn draw_shadowed(text: &str, x: f32, y: f32, color: Color) {
    let params = |color| TextParams {
        font_size: FONT_SIZE,
        color,
        ..Default::default()
    };
    draw_text_ex(text, x + SHADOW_OFFSET, y + SHADOW_OFFSET, params(BLACK));
    draw_text_ex(text, x, y, params(color));
}
