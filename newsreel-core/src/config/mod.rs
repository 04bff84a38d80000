//! Configuration for a render run.
//!
//! Fixed pipeline constants live here alongside [`RenderConfig`], the per-run
//! bundle of asset paths. Overlay styling defaults and their override rules
//! live in [`style`].

pub mod style;

pub use style::StyleConfig;

use std::path::PathBuf;

/// Output canvas width in pixels.
pub const TARGET_WIDTH: u32 = 1080;

/// Output canvas height in pixels.
pub const TARGET_HEIGHT: u32 = 1920;

/// Output frame rate.
pub const TARGET_FPS: u32 = 30;

/// Maximum words per caption chunk.
pub const MAX_WORDS_PER_CAPTION: usize = 8;

/// Shortest display time for a single caption, in seconds.
pub const MIN_CAPTION_SECS: f64 = 1.0;

/// Longest display time for a single caption, in seconds.
pub const MAX_CAPTION_SECS: f64 = 3.0;

/// Narration length assumed when the duration probe is unavailable or fails.
pub const FALLBACK_NARRATION_SECS: f64 = 45.0;

/// Maximum number of background clips used per render.
pub const MAX_BACKGROUND_CLIPS: usize = 4;

/// Shortest on-screen segment per background clip, in seconds.
pub const MIN_CLIP_SEGMENT_SECS: f64 = 2.4;

/// Crossfade transition length between background clips, in seconds.
pub const CROSSFADE_SECS: f64 = 0.35;

/// Fade-in/fade-out length at the edges of the synthesized background.
pub const EDGE_FADE_SECS: f64 = 0.45;

/// Gain applied to the background music bed before ducking.
pub const MUSIC_BED_VOLUME: f64 = 0.22;

/// Solid background color used when no clips are available.
pub const FALLBACK_BACKGROUND_COLOR: &str = "#0b1020";

/// Headline overlays are truncated to this many characters.
pub const MAX_HEADLINE_CHARS: usize = 90;

/// Video codec for the rendered output.
pub const VIDEO_CODEC: &str = "libx264";

/// Encoder preset for the rendered output.
pub const VIDEO_PRESET: &str = "medium";

/// Constant rate factor for the rendered output.
pub const VIDEO_CRF: u32 = 20;

/// Audio codec for the rendered output.
pub const AUDIO_CODEC: &str = "aac";

/// Audio bitrate for the rendered output.
pub const AUDIO_BITRATE: &str = "192k";

/// Per-run configuration: where to find the script and assets, and where the
/// caption and video outputs go.
///
/// The clip directory, music file and style file are optional; a missing
/// asset degrades to the corresponding fallback (synthesized background,
/// narration-only audio, default styling) rather than failing the render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Narration script text file. Must exist.
    pub script_path: PathBuf,
    /// Narration audio file whose duration paces the captions.
    pub narration_path: PathBuf,
    /// Directory holding background clips, if any.
    pub clips_dir: Option<PathBuf>,
    /// Background music file, if any.
    pub music_path: Option<PathBuf>,
    /// JSON file with style overrides, if any.
    pub style_path: Option<PathBuf>,
    /// Directory receiving the caption and video outputs.
    pub output_dir: PathBuf,
    /// Identifier embedded in output file names, typically the UTC date.
    pub run_id: String,
}

impl RenderConfig {
    /// Creates a configuration with no optional assets.
    #[must_use]
    pub fn new(
        script_path: PathBuf,
        narration_path: PathBuf,
        output_dir: PathBuf,
        run_id: String,
    ) -> Self {
        Self {
            script_path,
            narration_path,
            clips_dir: None,
            music_path: None,
            style_path: None,
            output_dir,
            run_id,
        }
    }

    /// Path the caption track is written to.
    #[must_use]
    pub fn caption_output_path(&self) -> PathBuf {
        self.output_dir.join(format!("sub_{}.srt", self.run_id))
    }

    /// Path the rendered video is written to.
    #[must_use]
    pub fn video_output_path(&self) -> PathBuf {
        self.output_dir.join(format!("video_{}.mp4", self.run_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_embed_run_id() {
        let config = RenderConfig::new(
            PathBuf::from("script.txt"),
            PathBuf::from("voice.mp3"),
            PathBuf::from("outputs"),
            "2025-06-01".to_string(),
        );
        assert_eq!(
            config.caption_output_path(),
            PathBuf::from("outputs/sub_2025-06-01.srt")
        );
        assert_eq!(
            config.video_output_path(),
            PathBuf::from("outputs/video_2025-06-01.mp4")
        );
    }

    #[test]
    fn new_config_has_no_optional_assets() {
        let config = RenderConfig::new(
            PathBuf::from("script.txt"),
            PathBuf::from("voice.mp3"),
            PathBuf::from("outputs"),
            "run".to_string(),
        );
        assert!(config.clips_dir.is_none());
        assert!(config.music_path.is_none());
        assert!(config.style_path.is_none());
    }
}
