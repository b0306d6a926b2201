//! Runtime options of the viewer.
//!
//! `ViewerOptions` is read from a TOML file; every field is optional and
//! falls back to the `const` defaults of the respective module.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::*;

/// File name looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "casteljau.toml";

/// Frame rate the main loop is paced to.
pub const TARGET_FPS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Logical canvas size in pixels
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub target_fps: u32,
    /// Edge length of point and sample markers
    pub marker_size: NativeFloat,
    pub sample_step: NativeFloat,
    pub sample_step_delta: NativeFloat,
    /// Show the on-curve probe under the pointer
    pub show_probe: bool,
    pub probe_threshold: NativeFloat,
    pub palette: Palette,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        ViewerOptions {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            target_fps: TARGET_FPS,
            marker_size: MARKER_SIZE,
            sample_step: SAMPLE_STEP,
            sample_step_delta: SAMPLE_STEP_DELTA,
            show_probe: false,
            probe_threshold: PROBE_THRESHOLD,
            palette: Palette::default(),
        }
    }
}

impl ViewerOptions {
    /// Loads options from a TOML file. Falls back to defaults if it is missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ViewerOptions>(&content) {
                Ok(opts) => {
                    log::info!("options loaded from {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("malformed options file {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no options file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Writes the options as TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("options saved to {}", path.display());
        Ok(())
    }

    /// Options file next to the binary
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("casteljau"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Replace values the viewer cannot work with by their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.canvas_width == 0 || self.canvas_height == 0 {
            log::warn!("canvas size must not be zero, using {}x{}", CANVAS_WIDTH, CANVAS_HEIGHT);
            self.canvas_width = defaults.canvas_width;
            self.canvas_height = defaults.canvas_height;
        }
        if self.target_fps == 0 {
            log::warn!("target_fps must be positive, using {}", TARGET_FPS);
            self.target_fps = defaults.target_fps;
        }
        if !(self.sample_step_delta.is_finite() && self.sample_step_delta > 0.0) {
            log::warn!("sample_step_delta must be positive, using {}", SAMPLE_STEP_DELTA);
            self.sample_step_delta = defaults.sample_step_delta;
        }
        if !self.sample_step.is_finite() {
            self.sample_step = defaults.sample_step;
        }
        if !(self.marker_size.is_finite() && self.marker_size > 0.0) {
            self.marker_size = defaults.marker_size;
        }
        self
    }

    /// Time budget of one frame
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(1.0 / self.target_fps.max(1) as f32)
    }

    pub fn sample_step(&self) -> SampleStep<NativeFloat> {
        SampleStep::new(self.sample_step, self.sample_step_delta)
    }

    pub fn frame_style(&self) -> FrameStyle {
        FrameStyle {
            palette: self.palette,
            marker_size: self.marker_size,
            show_probe: self.show_probe,
            probe_threshold: self.probe_threshold,
        }
    }

    /// A fresh controller for an empty canvas
    pub fn controller(&self) -> Controller<Vec2> {
        Controller::new(ControlPointSet::with_marker_size(self.marker_size), self.sample_step())
    }
}
