use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tiny_skia::Color;

/// Top-level clock configuration
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub width: u32,
    pub height: u32,
    pub output_mode: OutputMode,
    pub output_path: PathBuf,
    pub theme: Theme,
    /// Frames to render before exiting; 0 = run forever
    pub frames: u64,
}

#[derive(Debug, Clone, Default)]
pub enum OutputMode {
    /// Save each frame as PNG
    #[default]
    Png,
    /// Output raw pixels to stdout (for piping)
    Raw,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown output mode: {0}")]
    UnknownOutputMode(String),
}

impl FromStr for OutputMode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputMode::Png),
            "raw" | "stdout" => Ok(OutputMode::Raw),
            _ => Err(ConfigError::UnknownOutputMode(s.to_string())),
        }
    }
}

/// Dial colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Hour/minute hands and tick marks
    pub foreground: Color,
    /// Second hand
    pub accent: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            accent: Color::from_rgba8(255, 0, 0, 255),
            background: Color::BLACK,
        }
    }
}

/// Parse a `#rrggbb` color string. Malformed input falls back per channel;
/// anything too short reads as red.
pub fn parse_color(color: &str) -> Color {
    let s = color.trim_start_matches('#');
    if s.len() >= 6 && s.is_char_boundary(2) && s.is_char_boundary(4) && s.is_char_boundary(6) {
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        Color::from_rgba8(r, g, b, 255)
    } else {
        Color::from_rgba8(255, 0, 0, 255)
    }
}
