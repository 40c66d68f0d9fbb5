mod app;
mod canvas;
mod circle;
mod config;
mod face;
mod hand;
mod line;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
