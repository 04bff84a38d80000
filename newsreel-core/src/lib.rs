//! Core library for rendering narrated news shorts with ffmpeg.
//!
//! This crate turns a narration script and its recorded audio into timed
//! SRT captions and a 1080x1920 video: background clips loop and crossfade
//! under a styled overlay stack, captions burn in, and an optional music
//! bed ducks beneath the narration.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use newsreel_core::{FfmpegCapabilityProbe, RenderConfig, render_video};
//! use std::path::PathBuf;
//!
//! let mut config = RenderConfig::new(
//!     PathBuf::from("script.txt"),
//!     PathBuf::from("narration.mp3"),
//!     PathBuf::from("outputs"),
//!     "2026-01-01".to_string(),
//! );
//! config.clips_dir = Some(PathBuf::from("assets/broll"));
//! config.music_path = Some(PathBuf::from("assets/bgm.mp3"));
//!
//! let outcome = render_video(&config, &FfmpegCapabilityProbe).unwrap();
//! println!("rendered {}", outcome.video_path.display());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{RenderConfig, StyleConfig};
pub use discovery::{find_background_clips, find_background_music};
pub use error::{CoreError, CoreResult};
pub use external::{CapabilityProbe, FfmpegCapabilityProbe, FilterCapabilities};
pub use processing::{RenderOutcome, render_video};
pub use processing::compose::{ComposeParams, InputDecl, RenderPlan, build_render_plan};
pub use utils::{format_bytes, format_duration};
