//! Integer Bresenham line strokers, planar and spatial.

use anyhow::{bail, Result};

use crate::canvas::Canvas;

/// Stroke a straight path between two points. The longer of |dx|, |dy|
/// drives (x on a tie); both endpoints are plotted, max(|dx|, |dy|) + 1
/// pixels in total.
pub(crate) fn draw_line(
    canvas: &mut Canvas,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    norm_x: bool,
    norm_y: bool,
) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 >= x1 { 1 } else { -1 };
    let sy = if y2 >= y1 { 1 } else { -1 };
    let (mut x, mut y) = (x1, y1);
    canvas.set_pixel(x, y, true, norm_x, norm_y);

    if dx >= dy {
        let mut p = 2 * dy - dx;
        while x != x2 {
            x += sx;
            if p >= 0 {
                y += sy;
                p -= 2 * dx;
            }
            p += 2 * dy;
            canvas.set_pixel(x, y, true, norm_x, norm_y);
        }
    } else {
        let mut p = 2 * dx - dy;
        while y != y2 {
            y += sy;
            if p >= 0 {
                x += sx;
                p -= 2 * dy;
            }
            p += 2 * dx;
            canvas.set_pixel(x, y, true, norm_x, norm_y);
        }
    }
}

/// Spatial Bresenham between two (x, y, z) points. The largest of |dx|,
/// |dy|, |dz| drives, ties broken in the order x, y, z; z is stepped but
/// projected out of the plot. A failure to pick a driving axis is
/// reported, never a silent empty stroke.
pub(crate) fn draw_line3(
    canvas: &mut Canvas,
    from: (i32, i32, i32),
    to: (i32, i32, i32),
    norm_x: bool,
    norm_y: bool,
) -> Result<()> {
    let (mut x, mut y, mut z) = from;
    let dx = (to.0 - x).abs();
    let dy = (to.1 - y).abs();
    let dz = (to.2 - z).abs();
    let sx = if to.0 >= x { 1 } else { -1 };
    let sy = if to.1 >= y { 1 } else { -1 };
    let sz = if to.2 >= z { 1 } else { -1 };

    canvas.set_pixel(x, y, true, norm_x, norm_y);

    if dx >= dy && dx >= dz {
        let mut p1 = 2 * dy - dx;
        let mut p2 = 2 * dz - dx;
        while x != to.0 {
            x += sx;
            if p1 >= 0 {
                y += sy;
                p1 -= 2 * dx;
            }
            if p2 >= 0 {
                z += sz;
                p2 -= 2 * dx;
            }
            p1 += 2 * dy;
            p2 += 2 * dz;
            canvas.set_pixel(x, y, true, norm_x, norm_y);
        }
    } else if dy >= dx && dy >= dz {
        let mut p1 = 2 * dx - dy;
        let mut p2 = 2 * dz - dy;
        while y != to.1 {
            y += sy;
            if p1 >= 0 {
                x += sx;
                p1 -= 2 * dy;
            }
            if p2 >= 0 {
                z += sz;
                p2 -= 2 * dy;
            }
            p1 += 2 * dx;
            p2 += 2 * dz;
            canvas.set_pixel(x, y, true, norm_x, norm_y);
        }
    } else if dz >= dx && dz >= dy {
        let mut p1 = 2 * dy - dz;
        let mut p2 = 2 * dx - dz;
        while z != to.2 {
            z += sz;
            if p1 >= 0 {
                y += sy;
                p1 -= 2 * dz;
            }
            if p2 >= 0 {
                x += sx;
                p2 -= 2 * dz;
            }
            p1 += 2 * dy;
            p2 += 2 * dx;
            canvas.set_pixel(x, y, true, norm_x, norm_y);
        }
    } else {
        bail!("no driving axis for line {from:?} -> {to:?}");
    }
    Ok(())
}
