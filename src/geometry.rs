use macroquad::prelude::*;

// converts chart x and y (origin at screen centre, y up) to graphical coordinates
pub fn world_to_screen(x: f32, y: f32, screen: Vec2) -> (f32, f32) {
    (screen.x / 2.0 + x, screen.y / 2.0 - y)
}

// converts a chart-space rect anchored at its bottom-left corner to a screen rect anchored top-left
pub fn rect_to_screen(rect: Rect, screen: Vec2) -> Rect {
    let (x, y) = world_to_screen(rect.x, rect.y + rect.h, screen);
    Rect::new(x, y, rect.w, rect.h)
}
