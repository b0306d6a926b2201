//! Interactive Bézier curve editor.
//!
//! Left click on empty space adds a control point, left drag moves one,
//! right click removes one. The mouse wheel changes the sample step,
//! F1 toggles markers/line segments, F2 samples the quadratic of the first
//! three points, C clears the canvas, Escape quits.

use std::path::PathBuf;
use std::time::Instant;

use casteljau::{CanvasWindow, Flow, Frame, ViewerOptions};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("casteljau v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(ViewerOptions::config_path);
    let options = ViewerOptions::load_from_file(&config_path);

    let mut window = CanvasWindow::new("Bezier Curves", options.canvas_width, options.canvas_height)?;
    let mut controller = options.controller();
    let style = options.frame_style();
    let frame_interval = options.frame_interval();
    let mut frame = Frame::new();

    loop {
        let started = Instant::now();

        if controller.drain(window.poll_events()) == Flow::Quit {
            break;
        }
        frame.compose(&mut window, &controller, &style)?;

        if let Some(rest) = frame_interval.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("quit with {} control points", controller.points().len());
    Ok(())
}
