//! SRT caption serialization.

use crate::error::{CoreError, CoreResult};
use crate::processing::pacing::Cue;

use std::path::Path;

/// Formats seconds as an SRT timestamp, `HH:MM:SS,mmm`.
///
/// Milliseconds are truncated, not rounded. Hours widen past two digits
/// rather than wrap, so very long inputs stay representable.
#[must_use]
pub fn format_srt_timestamp(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Renders cues as SRT text with 1-based block indices.
#[must_use]
pub fn render_srt(cues: &[Cue]) -> String {
    let blocks: Vec<String> = cues
        .iter()
        .enumerate()
        .map(|(idx, cue)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                idx + 1,
                format_srt_timestamp(cue.start),
                format_srt_timestamp(cue.end),
                cue.text
            )
        })
        .collect();
    blocks.join("\n")
}

/// Writes the cues to `path` as an SRT file.
pub fn write_caption_file(path: &Path, cues: &[Cue]) -> CoreResult<()> {
    std::fs::write(path, render_srt(cues)).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to write caption file '{}': {}",
            path.display(),
            e
        ))
    })
}
