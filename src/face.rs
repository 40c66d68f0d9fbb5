//! The dial itself: static furniture drawn once, hands re-drawn per tick.

use anyhow::Result;

use crate::canvas::{Canvas, BLANK};
use crate::circle::{draw_circle, eighth_arc};
use crate::config::Settings;
use crate::hand::{hand_index, hand_point, Direction};
use crate::line::{draw_line, draw_line3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WallTime {
    pub(crate) hour: u32,
    pub(crate) min: u32,
    pub(crate) sec: u32,
}

pub(crate) struct ClockFace {
    radius: i32,
    dir: Direction,
    show_digital: bool,
    furniture: Vec<char>,
    second_arc: Vec<(i32, i32)>,
    minute_arc: Vec<(i32, i32)>,
    hour_arc: Vec<(i32, i32)>,
}

impl ClockFace {
    /// Size the dial from the canvas and draw the static furniture: rim,
    /// hour marks, pivot decoration, title. The furnished canvas is
    /// snapshotted so every frame starts from it.
    pub(crate) fn new(canvas: &mut Canvas, settings: &Settings) -> Self {
        // the pixel grid is rows tall and cols/4 wide on each side of the
        // centre (x doubles into cells)
        let radius = (canvas.rows().min(canvas.cols() / 4) - 2).max(1);
        let dir = if settings.counterclockwise {
            Direction::Counterclockwise
        } else {
            Direction::Clockwise
        };

        draw_circle(canvas, 0, 0, radius, true, true);

        // hour marks sit just inside the rim, at every fifth minute
        let marks = eighth_arc(2 * (radius - 2).max(0));
        let span = marks.len() - 1;
        for hour in 0..12 {
            let (mx, my) = hand_point(&marks, hand_index(hour * 5, 60, span), dir);
            canvas.set_pixel(mx, my, true, true, true);
        }

        canvas.set_cell(-1, 0, '(', true, true);
        canvas.set_cell(1, 0, ')', true, true);
        canvas.draw_text(0, 0, &settings.title, true, false);
        if settings.counterclockwise {
            // a backwards clock wears its label below the dial instead
            let len = settings.title.chars().count() as i32;
            canvas.move_text(0, 0, 0, 2 * (canvas.rows() - 1), len, 1, BLANK, true, false);
        }

        Self {
            radius,
            dir,
            show_digital: settings.show_digital,
            furniture: canvas.snapshot(),
            second_arc: eighth_arc(2 * (radius - 2).max(0)),
            minute_arc: eighth_arc(2 * (radius * 3 / 4)),
            hour_arc: eighth_arc(2 * (radius / 2)),
        }
    }

    /// One frame: wind the canvas back to the furniture, stroke the three
    /// hands from the centre, then the digital readout under the dial.
    pub(crate) fn draw_time(&self, canvas: &mut Canvas, t: WallTime) -> Result<()> {
        canvas.restore(&self.furniture);

        let (hx, hy) = hand_point(
            &self.hour_arc,
            hand_index(t.hour % 12, 12, self.hour_arc.len() - 1),
            self.dir,
        );
        let (mx, my) = hand_point(
            &self.minute_arc,
            hand_index(t.min, 60, self.minute_arc.len() - 1),
            self.dir,
        );
        let (sx, sy) = hand_point(
            &self.second_arc,
            hand_index(t.sec, 60, self.second_arc.len() - 1),
            self.dir,
        );

        draw_line(canvas, 0, 0, hx, hy, true, true);
        draw_line(canvas, 0, 0, mx, my, true, true);
        // the second hand goes through the spatial stroker with z pinned
        // flat, as the hands always have
        draw_line3(canvas, (0, 0, 0), (sx, sy, 0), true, true)?;

        if self.show_digital {
            let readout = format!("{:02}:{:02}:{:02}", t.hour, t.min, t.sec);
            // the backwards dial mirrors its text layout, readout above
            let y = match self.dir {
                Direction::Clockwise => self.radius + 4,
                Direction::Counterclockwise => -(self.radius + 4),
            };
            canvas.draw_text(0, y, &readout, true, true);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // an 80x24 grid sizes the dial at radius 18 (pixel half-extents 20
    // across, 24 down, minus the margin)
    fn face_on(cols: u16, rows: u16) -> (Canvas, ClockFace) {
        let mut canvas = Canvas::new(cols, rows);
        let face = ClockFace::new(&mut canvas, &Settings::default());
        (canvas, face)
    }

    #[test]
    fn dial_rim_reaches_all_four_cardinal_points() {
        let (canvas, _face) = face_on(80, 24);
        for (x, y) in [(0, -18), (0, 18), (18, 0), (-18, 0)] {
            assert!(canvas.pixel(x, y, true, true), "no rim at ({x}, {y})");
        }
    }

    #[test]
    fn furniture_comes_back_every_frame() {
        let (mut canvas, face) = face_on(80, 24);
        let furnished = canvas.snapshot();
        face.draw_time(&mut canvas, WallTime { hour: 9, min: 41, sec: 5 }).unwrap();
        assert_ne!(canvas.snapshot(), furnished);
        face.draw_time(&mut canvas, WallTime { hour: 9, min: 41, sec: 5 }).unwrap();
        // a second identical frame draws the same picture, not more of it
        let first = canvas.snapshot();
        face.draw_time(&mut canvas, WallTime { hour: 9, min: 41, sec: 5 }).unwrap();
        assert_eq!(canvas.snapshot(), first);
    }

    #[test]
    fn midnight_points_every_hand_at_twelve() {
        let (mut canvas, face) = face_on(80, 24);
        face.draw_time(&mut canvas, WallTime { hour: 0, min: 0, sec: 0 }).unwrap();
        // the longest hand runs 16 pixels straight up from the pivot
        for y in -16..0 {
            assert!(canvas.pixel(0, y, true, true), "gap at (0, {y})");
        }
    }

    #[test]
    fn hands_are_redrawn_not_accumulated() {
        let (mut canvas, face) = face_on(80, 24);
        face.draw_time(&mut canvas, WallTime { hour: 0, min: 0, sec: 0 }).unwrap();
        assert!(canvas.pixel(0, -1, true, true));
        face.draw_time(&mut canvas, WallTime { hour: 6, min: 30, sec: 45 }).unwrap();
        // nothing points up any more
        assert!(!canvas.pixel(0, -1, true, true));
        // second hand now points at nine o'clock
        assert!(canvas.pixel(-3, 0, true, true));
    }

    #[test]
    fn digital_readout_sits_under_the_dial() {
        let (mut canvas, face) = face_on(80, 24);
        face.draw_time(&mut canvas, WallTime { hour: 12, min: 34, sec: 56 }).unwrap();
        // pixel row radius+4 below centre, halved into cell row 23
        let text: String = (36..44).map(|c| canvas.cell(c, 23)).collect();
        assert_eq!(text, "12:34:56");
    }

    #[test]
    fn title_sits_above_the_dial_centred() {
        let (canvas, _face) = face_on(80, 24);
        let text: String = (38..43).map(|c| canvas.cell(c, 0)).collect();
        assert_eq!(text, "CLOCK");
    }

    #[test]
    fn backwards_dial_moves_its_label_below() {
        let mut canvas = Canvas::new(80, 24);
        let settings = Settings {
            counterclockwise: true,
            ..Settings::default()
        };
        let face = ClockFace::new(&mut canvas, &settings);
        let top: String = (38..43).map(|c| canvas.cell(c, 0)).collect();
        let bottom: String = (38..43).map(|c| canvas.cell(c, 23)).collect();
        assert_eq!(top, "     ");
        assert_eq!(bottom, "CLOCK");

        // and the second hand sweeps the other way: 15 seconds past is
        // nine o'clock on this dial
        face.draw_time(&mut canvas, WallTime { hour: 0, min: 0, sec: 15 }).unwrap();
        assert!(canvas.pixel(-3, 0, true, true));
        assert!(!canvas.pixel(3, 0, true, true));
        // mirrored layout puts the readout above the dial
        let readout: String = (36..44).map(|c| canvas.cell(c, 1)).collect();
        assert_eq!(readout, "00:00:15");
    }

    #[test]
    fn tiny_terminal_still_builds_a_face() {
        let mut canvas = Canvas::new(8, 3);
        let face = ClockFace::new(&mut canvas, &Settings::default());
        face.draw_time(&mut canvas, WallTime { hour: 23, min: 59, sec: 59 }).unwrap();
        // every hand collapses to the pivot on a dial this small
        assert!(canvas.pixel(0, 0, true, true));
    }
}
