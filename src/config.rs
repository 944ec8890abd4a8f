//! User configuration: state-machine tuning, host settings, persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/reveal-pager/config.toml` (default
//! `~/.config/reveal-pager/config.toml`).  The implicit default file is read
//! leniently; a file named with `--config` must parse cleanly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::core::tuning::Tuning;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `key = value`, got {text:?}")]
    Malformed { line: usize, text: String },
    #[error("line {line}: unknown setting `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: invalid value {value:?} for `{key}`")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Intro / navigation constants.
    pub tuning: Tuning,
    /// Frame rate of the render + animation loop.
    pub fps: u32,
    /// Pixels represented by one terminal row.
    pub px_per_row: f64,
    /// Wheel delta reported per mouse-wheel notch.
    pub wheel_notch_delta: f64,
    /// Skip the unrolling intro and reveal the page right after loading.
    pub skip_intro: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            fps: 60,
            px_per_row: 20.0,
            wheel_notch_delta: 100.0,
            skip_intro: false,
        }
    }
}

impl AppConfig {
    /// Duration of one frame at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default path, falling back to defaults.
    /// Problems are logged and the offending lines skipped.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let (config, problems) = Self::parse_config(&contents);
                for problem in problems {
                    warn!(path = %path.display(), "{problem}");
                }
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "config unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Load an explicitly requested config file.  Any problem is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (config, mut problems) = Self::parse_config(&contents);
        if problems.is_empty() {
            Ok(config)
        } else {
            Err(problems.remove(0))
        }
    }

    /// Persist current config to `path` (default path when `None`).
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let path = path.map_or_else(config_path, Path::to_path_buf);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(path)
    }

    fn parse_config(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        for (idx, raw) in s.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                problems.push(ConfigError::Malformed {
                    line,
                    text: trimmed.to_string(),
                });
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match config.apply(key, value) {
                Apply::Ok => {}
                Apply::UnknownKey => problems.push(ConfigError::UnknownKey {
                    line,
                    key: key.to_string(),
                }),
                Apply::BadValue => problems.push(ConfigError::InvalidValue {
                    line,
                    key: key.to_string(),
                    value: value.to_string(),
                }),
            }
        }

        (config, problems)
    }

    /// Set one setting from its textual form.  Values are clamped to sane
    /// ranges for predictable behaviour.
    fn apply(&mut self, key: &str, value: &str) -> Apply {
        let t = &mut self.tuning;
        let ok = match key {
            "intro_sensitivity" => set_f64(&mut t.intro_sensitivity, value, 0.001, 10.0),
            "intro_smoothing" => set_f64(&mut t.intro_smoothing, value, 0.01, 1.0),
            "intro_snap_epsilon" => set_f64(&mut t.intro_snap_epsilon, value, 0.001, 5.0),
            "intro_completion_at" => set_f64(&mut t.intro_completion_at, value, 50.0, 100.0),
            "intro_overlay_at" => set_f64(&mut t.intro_overlay_at, value, 0.0, 1.0),
            "reveal_delay_ms" => set_ms(&mut t.reveal_delay, value, 0, 30_000),
            "intro_teardown_ms" => set_ms(&mut t.intro_teardown, value, 0, 10_000),
            "hero_fade_ms" => set_ms(&mut t.hero_fade, value, 0, 10_000),
            "loader_min_visible_ms" => set_ms(&mut t.loader_min_visible, value, 0, 30_000),
            "loader_fade_ms" => set_ms(&mut t.loader_fade, value, 0, 10_000),
            "header_clearance" => set_f64(&mut t.header_clearance, value, 0.0, 1000.0),
            "edge_buffer" => set_f64(&mut t.edge_buffer, value, 0.0, 200.0),
            "wheel_threshold" => set_f64(&mut t.wheel_threshold, value, 1.0, 10_000.0),
            "touch_threshold" => set_f64(&mut t.touch_threshold, value, 1.0, 10_000.0),
            "wheel_min_step" => set_f64(&mut t.wheel_min_step, value, 0.0, 1000.0),
            "wheel_idle_reset_ms" => set_ms(&mut t.wheel_idle_reset, value, 10, 5_000),
            "transition_ms" => set_ms(&mut t.transition, value, 50, 10_000),
            "anchor_jump_ms" => set_ms(&mut t.anchor_jump, value, 50, 10_000),
            "overshoot" => set_f64(&mut t.overshoot, value, 0.0, 5.0),
            "fps" => match value.parse::<u32>() {
                Ok(v) => {
                    self.fps = v.clamp(10, 240);
                    true
                }
                Err(_) => false,
            },
            "px_per_row" => set_f64(&mut self.px_per_row, value, 4.0, 64.0),
            "wheel_notch_delta" => set_f64(&mut self.wheel_notch_delta, value, 1.0, 1000.0),
            "skip_intro" => match value {
                "true" => {
                    self.skip_intro = true;
                    true
                }
                "false" => {
                    self.skip_intro = false;
                    true
                }
                _ => false,
            },
            _ => return Apply::UnknownKey,
        };
        if ok {
            Apply::Ok
        } else {
            Apply::BadValue
        }
    }

    fn serialise(&self) -> String {
        let t = &self.tuning;
        let ms = |d: Duration| d.as_millis();
        [
            "# reveal-pager configuration".to_string(),
            String::new(),
            "[intro]".to_string(),
            format!("intro_sensitivity = {}", t.intro_sensitivity),
            format!("intro_smoothing = {}", t.intro_smoothing),
            format!("intro_snap_epsilon = {}", t.intro_snap_epsilon),
            format!("intro_completion_at = {}", t.intro_completion_at),
            format!("intro_overlay_at = {}", t.intro_overlay_at),
            format!("reveal_delay_ms = {}", ms(t.reveal_delay)),
            format!("intro_teardown_ms = {}", ms(t.intro_teardown)),
            format!("hero_fade_ms = {}", ms(t.hero_fade)),
            format!("loader_min_visible_ms = {}", ms(t.loader_min_visible)),
            format!("loader_fade_ms = {}", ms(t.loader_fade)),
            String::new(),
            "[navigation]".to_string(),
            format!("header_clearance = {}", t.header_clearance),
            format!("edge_buffer = {}", t.edge_buffer),
            format!("wheel_threshold = {}", t.wheel_threshold),
            format!("touch_threshold = {}", t.touch_threshold),
            format!("wheel_min_step = {}", t.wheel_min_step),
            format!("wheel_idle_reset_ms = {}", ms(t.wheel_idle_reset)),
            format!("transition_ms = {}", ms(t.transition)),
            format!("anchor_jump_ms = {}", ms(t.anchor_jump)),
            format!("overshoot = {}", t.overshoot),
            String::new(),
            "[terminal]".to_string(),
            format!("fps = {}", self.fps),
            format!("px_per_row = {}", self.px_per_row),
            format!("wheel_notch_delta = {}", self.wheel_notch_delta),
            format!("skip_intro = {}", self.skip_intro),
            String::new(),
        ]
        .join("\n")
    }
}

enum Apply {
    Ok,
    UnknownKey,
    BadValue,
}

fn set_f64(slot: &mut f64, value: &str, min: f64, max: f64) -> bool {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            *slot = v.clamp(min, max);
            true
        }
        _ => false,
    }
}

fn set_ms(slot: &mut Duration, value: &str, min: u64, max: u64) -> bool {
    match value.parse::<u64>() {
        Ok(v) => {
            *slot = Duration::from_millis(v.clamp(min, max));
            true
        }
        Err(_) => false,
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/reveal-pager/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("reveal-pager").join("config.toml")
}
