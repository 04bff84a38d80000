//! Overlay styling with JSON override support.
//!
//! Styling ships with built-in defaults. A style file may override any known
//! key; unknown keys are ignored and a missing or unparseable file keeps the
//! defaults, so a bad style file can never fail a render.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Colors, labels and font sizes for the overlay layers.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Channel display name, available to downstream publishing tools.
    pub channel_name: String,
    /// Watermark text drawn near the bottom of the frame.
    pub watermark: String,
    /// Headline text color.
    pub headline_color: String,
    /// Short label drawn inside the accent box.
    pub accent_label: String,
    /// Accent box color as an 0xRRGGBB hex string.
    pub accent_color_hex: String,
    /// Lower-third bar color as an 0xRRGGBB hex string.
    pub lower_third_bg_hex: String,
    /// Lower-third bar opacity in [0, 1].
    pub lower_third_bg_alpha: f64,
    /// Font size for burned-in captions.
    pub subtitle_fontsize: u32,
    /// Font size for the headline overlay.
    pub headline_fontsize: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            channel_name: "Newsreel Daily".to_string(),
            watermark: "@newsreeldaily".to_string(),
            headline_color: "white".to_string(),
            accent_label: "TREND NOW".to_string(),
            accent_color_hex: "0xf59e0b".to_string(),
            lower_third_bg_hex: "0x000000".to_string(),
            lower_third_bg_alpha: 0.38,
            subtitle_fontsize: 18,
            headline_fontsize: 56,
        }
    }
}

/// Optional per-key overrides parsed from the style file. Keys absent from
/// this struct are ignored by deserialization, which is exactly the
/// known-keys merge rule.
#[derive(Debug, Default, Deserialize)]
struct StyleOverrides {
    channel_name: Option<String>,
    watermark: Option<String>,
    headline_color: Option<String>,
    accent_label: Option<String>,
    accent_color_hex: Option<String>,
    lower_third_bg_hex: Option<String>,
    lower_third_bg_alpha: Option<f64>,
    subtitle_fontsize: Option<u32>,
    headline_fontsize: Option<u32>,
}

impl StyleConfig {
    /// Loads styling, merging overrides from `path` when it points at a
    /// readable JSON object. Any failure keeps the defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let mut style = Self::default();
        let Some(path) = path else {
            return style;
        };
        if !path.is_file() {
            log::debug!("No style file at {}; using defaults", path.display());
            return style;
        }
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<StyleOverrides>(&text) {
                Ok(overrides) => style.apply(overrides),
                Err(e) => {
                    log::warn!("Ignoring style file {}: {e}", path.display());
                }
            },
            Err(e) => {
                log::warn!("Failed to read style file {}: {e}", path.display());
            }
        }
        style
    }

    fn apply(&mut self, overrides: StyleOverrides) {
        if let Some(v) = overrides.channel_name {
            self.channel_name = v;
        }
        if let Some(v) = overrides.watermark {
            self.watermark = v;
        }
        if let Some(v) = overrides.headline_color {
            self.headline_color = v;
        }
        if let Some(v) = overrides.accent_label {
            self.accent_label = v;
        }
        if let Some(v) = overrides.accent_color_hex {
            self.accent_color_hex = v;
        }
        if let Some(v) = overrides.lower_third_bg_hex {
            self.lower_third_bg_hex = v;
        }
        if let Some(v) = overrides.lower_third_bg_alpha {
            self.lower_third_bg_alpha = v;
        }
        if let Some(v) = overrides.subtitle_fontsize {
            self.subtitle_fontsize = v;
        }
        if let Some(v) = overrides.headline_fontsize {
            self.headline_fontsize = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_style_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("style.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_without_style_file() {
        let style = StyleConfig::load(None);
        assert_eq!(style, StyleConfig::default());
        assert_eq!(style.subtitle_fontsize, 18);
        assert_eq!(style.headline_fontsize, 56);
        assert_eq!(style.lower_third_bg_alpha, 0.38);
        assert_eq!(style.accent_color_hex, "0xf59e0b");
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let style = StyleConfig::load(Some(Path::new("/nonexistent/style.json")));
        assert_eq!(style, StyleConfig::default());
    }

    #[test]
    fn overrides_merge_known_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_style_file(
            &dir,
            r#"{"watermark": "@otherchannel", "subtitle_fontsize": 22}"#,
        );

        let style = StyleConfig::load(Some(&path));
        assert_eq!(style.watermark, "@otherchannel");
        assert_eq!(style.subtitle_fontsize, 22);
        // Untouched keys keep their defaults
        assert_eq!(style.headline_fontsize, 56);
        assert_eq!(style.headline_color, "white");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_style_file(
            &dir,
            r#"{"headline_color": "yellow", "font_family": "Arial", "theme": 3}"#,
        );

        let style = StyleConfig::load(Some(&path));
        assert_eq!(style.headline_color, "yellow");
        assert_eq!(style.watermark, StyleConfig::default().watermark);
    }

    #[test]
    fn invalid_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_style_file(&dir, "{not json");

        let style = StyleConfig::load(Some(&path));
        assert_eq!(style, StyleConfig::default());
    }

    #[test]
    fn wrong_typed_value_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_style_file(&dir, r#"{"subtitle_fontsize": "big"}"#);

        let style = StyleConfig::load(Some(&path));
        assert_eq!(style, StyleConfig::default());
    }
}
