use macroquad::logging::info;
use macroquad::prelude::*;

use crate::geometry::{rect_to_screen, world_to_screen};
use crate::graph::Graph;

const BAR_COLOR: Color = SKYBLUE;
const BAR_OUTLINE: Color = BLACK;
const AXIS_COLOR: Color = GRAY;

/*
 * Draws the graph and keeps its layout in step with the window size.
 */
pub struct Renderer {
    screen: Vec2,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            screen: vec2(screen_width(), screen_height()),
        }
    }

    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    // rebuilds the graph layout when the window has been resized since last frame
    pub fn update(&mut self, graph: &mut Graph) {
        let screen = vec2(screen_width(), screen_height());
        if screen != self.screen {
            self.screen = screen;
            info!("Resizing graph as screen size has changed");
            graph.resize(screen);
        }
    }

    pub fn draw(&self, graph: &Graph) {
        let screen = graph.screen();

        for bar in graph.bars() {
            let rect = rect_to_screen(*bar, screen);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, BAR_COLOR);
            if rect.h > 0.0 {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BAR_OUTLINE);
            }
        }

        // baseline
        let extents = graph.extents();
        let (x0, y0) = world_to_screen(extents.x, extents.y, screen);
        let (x1, y1) = world_to_screen(extents.x + extents.w, extents.y, screen);
        draw_line(x0, y0, x1, y1, 2.0, AXIS_COLOR);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
