//! ffmpeg filter capability detection.
//!
//! Overlay text, caption burn-in, and crossfades each depend on an optional
//! filter that not every ffmpeg build ships. Capabilities are resolved once
//! per render from a single `ffmpeg -filters` listing and passed along by
//! value; a failed probe degrades to no optional filters rather than
//! failing the render.

use std::process::Command;

/// Which optional filters the local ffmpeg build provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCapabilities {
    /// `drawtext` is present: headline, accent label, watermark.
    pub text_overlay: bool,
    /// `subtitles` is present: burned-in captions.
    pub caption_burn_in: bool,
    /// `xfade` is present: crossfades between background clips.
    pub crossfade: bool,
}

impl FilterCapabilities {
    /// Parses a `-filters` listing. A filter counts as present only when
    /// its name appears as a whitespace-delimited token, so names embedded
    /// in longer identifiers do not match.
    #[must_use]
    pub fn from_filter_listing(listing: &str) -> Self {
        let mut caps = Self::default();
        for token in listing.split_whitespace() {
            match token {
                "drawtext" => caps.text_overlay = true,
                "subtitles" => caps.caption_burn_in = true,
                "xfade" => caps.crossfade = true,
                _ => {}
            }
        }
        caps
    }
}

/// Source of filter capability information. Implemented by the real ffmpeg
/// probe and by test stubs; queried exactly once per render.
pub trait CapabilityProbe {
    fn probe(&self) -> FilterCapabilities;
}

/// Probes the installed ffmpeg via `ffmpeg -hide_banner -filters`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegCapabilityProbe;

impl CapabilityProbe for FfmpegCapabilityProbe {
    fn probe(&self) -> FilterCapabilities {
        let output = Command::new("ffmpeg")
            .args(["-hide_banner", "-filters"])
            .output();
        match output {
            Ok(output) if output.status.success() => {
                let mut listing = String::from_utf8_lossy(&output.stdout).into_owned();
                listing.push('\n');
                listing.push_str(&String::from_utf8_lossy(&output.stderr));
                let caps = FilterCapabilities::from_filter_listing(&listing);
                log::debug!(
                    "ffmpeg filters available: drawtext={} subtitles={} xfade={}",
                    caps.text_overlay,
                    caps.caption_burn_in,
                    caps.crossfade
                );
                caps
            }
            Ok(output) => {
                log::warn!(
                    "ffmpeg -filters exited with {}; rendering without optional filters",
                    output.status
                );
                FilterCapabilities::default()
            }
            Err(e) => {
                log::warn!(
                    "Could not list ffmpeg filters ({e}); rendering without optional filters"
                );
                FilterCapabilities::default()
            }
        }
    }
}
