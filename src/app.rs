use crate::canvas::Canvas;
use crate::config::{load_settings, project_paths};
use crate::face::{ClockFace, WallTime};
use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

pub(crate) trait TimeSource {
    fn now(&self) -> WallTime;
}

pub(crate) struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> WallTime {
        let t = Local::now();
        WallTime {
            hour: t.hour(),
            min: t.minute(),
            sec: t.second(),
        }
    }
}

pub(crate) fn run() -> Result<()> {
    let paths = project_paths()?;
    let settings = load_settings(&paths.settings_path);

    let (cols, rows) = terminal::size().context("could not query terminal size")?;
    // keep a line below the canvas for the shell prompt
    let rows = rows.saturating_sub(settings.reserved_rows).max(3);
    let mut canvas = Canvas::new(cols, rows);
    let face = ClockFace::new(&mut canvas, &settings);

    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), cursor::Hide)?;
    let res = run_loop(
        &face,
        &mut canvas,
        &mut out,
        &LocalClock,
        |d| std::thread::sleep(d),
        Duration::from_millis(settings.tick_ms),
        None,
    );
    execute!(out, cursor::Show)?;
    res
}

/// The frame loop proper. Clock and sleep come in from the caller so a
/// test can run ticks without touching wall-clock time; `max_frames`
/// bounds the loop for the same reason, `None` runs until killed.
pub(crate) fn run_loop<W: Write>(
    face: &ClockFace,
    canvas: &mut Canvas,
    out: &mut W,
    clock: &dyn TimeSource,
    mut sleep: impl FnMut(Duration),
    tick: Duration,
    max_frames: Option<u64>,
) -> Result<()> {
    let mut frame = 0u64;
    loop {
        face.draw_time(canvas, clock.now())?;
        queue!(out, cursor::MoveTo(0, 0), Print(canvas.render()))?;
        out.flush()?;
        frame += 1;
        if let Some(limit) = max_frames {
            if frame >= limit {
                return Ok(());
            }
        }
        sleep(tick);
    }
}
