//! Midpoint circle rasterizer, integer only.
//!
//! One eighth of the circle is walked and mirrored eight ways; the same
//! walk in its diameter form produces the arc point list the hand mapper
//! indexes into, so the exact step sequence is load-bearing.

use crate::canvas::Canvas;

// The eight symmetric images of one octant point around the centre.
fn plot_octants(canvas: &mut Canvas, cx: i32, cy: i32, x: i32, y: i32, norm_x: bool, norm_y: bool) {
    canvas.set_pixel(cx + x, cy + y, true, norm_x, norm_y);
    canvas.set_pixel(cx + x, cy - y, true, norm_x, norm_y);
    canvas.set_pixel(cx - x, cy + y, true, norm_x, norm_y);
    canvas.set_pixel(cx - x, cy - y, true, norm_x, norm_y);
    canvas.set_pixel(cx + y, cy + x, true, norm_x, norm_y);
    canvas.set_pixel(cx + y, cy - x, true, norm_x, norm_y);
    canvas.set_pixel(cx - y, cy + x, true, norm_x, norm_y);
    canvas.set_pixel(cx - y, cy - x, true, norm_x, norm_y);
}

/// Stroke a full circle outline around (cx, cy).
pub(crate) fn draw_circle(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    radius: i32,
    norm_x: bool,
    norm_y: bool,
) {
    if radius <= 0 {
        canvas.set_pixel(cx, cy, true, norm_x, norm_y);
        return;
    }
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    plot_octants(canvas, cx, cy, x, y, norm_x, norm_y);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        plot_octants(canvas, cx, cy, x, y, norm_x, norm_y);
    }
}

/// Offsets for one eighth of a circle of the given diameter, from
/// (0, radius) down to the diagonal. Never empty; y never increases and x
/// never decreases along the list.
pub(crate) fn eighth_arc(diameter: i32) -> Vec<(i32, i32)> {
    let mut x = 0;
    let mut y = diameter / 2;
    let mut d = 3 - diameter;
    let mut points = vec![(x, y)];
    while y > x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        points.push((x, y));
    }
    points
}
