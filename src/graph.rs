/*
 * Bar chart model. Chart space has its origin at the centre of the screen
 * with y pointing up, measured in pixels. Bars are anchored at their
 * bottom-left corner.
 */

use macroquad::logging::{debug, info};
use macroquad::math::{Rect, Vec2};

// graph region margins, as fractions of the half-extent of the screen
const MARGIN_BOTTOM: f32 = 0.15;
const MARGIN_H: f32 = 0.05;
const MARGIN_TOP: f32 = 0.1;
const MARGIN_BETWEEN: f32 = 0.0;

// the tallest bar is kept between these fractions of the scale
const LOW_WATER: f32 = 0.45;
const HIGH_WATER: f32 = 0.9;

/*
 * halves or doubles the scale until actual_max sits in
 * [LOW_WATER * scale, HIGH_WATER * scale]. The band spans a factor of two,
 * so a small change in actual_max usually leaves the scale alone.
 * Empty or all-zero charts keep the current scale. The scale stops at the
 * largest and smallest powers of two that f32 can hold.
 */
pub fn next_scale(current: f32, actual_max: f32) -> f32 {
    if !(actual_max > 0.0 && actual_max.is_finite()) {
        return current;
    }

    let mut scale = if current > 0.0 && current.is_finite() { current } else { 1.0 };
    loop {
        if actual_max < scale * LOW_WATER {
            let halved = scale / 2.0;
            if halved == 0.0 {
                return scale;
            }
            scale = halved;
        } else if actual_max > scale * HIGH_WATER {
            let doubled = scale * 2.0;
            if !doubled.is_finite() {
                return scale;
            }
            scale = doubled;
        } else {
            return scale;
        }
    }
}

// region of chart space the bars are drawn in
pub fn graph_extents(screen: Vec2) -> Rect {
    let v_extent = screen.y / 2.0;
    let h_extent = screen.x / 2.0;

    let bottom = -v_extent * (1.0 - MARGIN_BOTTOM * 2.0);
    let left = -h_extent * (1.0 - MARGIN_H * 2.0);
    let right = h_extent * (1.0 - MARGIN_H * 2.0);
    let top = v_extent * (1.0 - MARGIN_TOP * 2.0);

    Rect::new(left, bottom, right - left, top - bottom)
}

pub struct Graph {
    weights: Vec<f32>,
    current_max: f32,
    screen: Vec2,
    extents: Rect,
    bars: Vec<Rect>,
}

impl Graph {
    pub fn new(screen: Vec2) -> Self {
        Self {
            weights: Vec::new(),
            current_max: 1.0,
            screen,
            extents: graph_extents(screen),
            bars: Vec::new(),
        }
    }

    /*
     * replaces the weights and recomputes bar heights. Returns true when the
     * number of weights changed and the bars were rebuilt.
     */
    pub fn set_weights(&mut self, weights: &[f32]) -> bool {
        let rebuild = weights.len() != self.weights.len();

        self.weights.clear();
        self.weights.extend_from_slice(weights);

        let max_weight = weights.iter().copied().fold(0.0, f32::max);
        self.current_max = next_scale(self.current_max, max_weight);

        if rebuild {
            info!("Resizing graph as the number of weights has changed");
            self.setup();
        }
        self.redraw();

        rebuild
    }

    pub fn resize(&mut self, screen: Vec2) {
        self.screen = screen;
        self.setup();
        self.redraw();
    }

    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    pub fn extents(&self) -> Rect {
        self.extents
    }

    pub fn bars(&self) -> &[Rect] {
        &self.bars
    }

    pub fn current_max(&self) -> f32 {
        self.current_max
    }

    // lays out one zero-height bar per weight across the graph region
    fn setup(&mut self) {
        let num_bars = self.weights.len();
        debug!("Setting up {} bars", num_bars);

        self.extents = graph_extents(self.screen);
        self.bars.clear();
        if num_bars == 0 {
            return;
        }

        let margin_width = MARGIN_BETWEEN * self.screen.x;
        let bar_width = (self.extents.w - (num_bars - 1) as f32 * margin_width) / num_bars as f32;
        for i in 0..num_bars {
            let bar_x = i as f32 * (bar_width + margin_width) + self.extents.x;
            self.bars.push(Rect::new(bar_x, self.extents.y, bar_width, 0.0));
        }
    }

    fn redraw(&mut self) {
        for (bar, &weight) in self.bars.iter_mut().zip(&self.weights) {
            bar.h = self.extents.h * (weight / self.current_max);
        }
    }
}
