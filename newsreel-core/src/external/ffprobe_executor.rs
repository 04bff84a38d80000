//! Narration duration probing.
//!
//! Uses the ffprobe crate to read the container duration of the narration
//! track. The duration only drives caption pacing and background timing, so
//! probe failures degrade to a fixed fallback instead of failing the render.

use crate::config::FALLBACK_NARRATION_SECS;

use ffprobe::ffprobe;

use std::path::Path;

/// Returns the narration length in seconds, floored at one second.
///
/// A probe failure or missing/unparseable duration falls back to
/// [`FALLBACK_NARRATION_SECS`].
#[must_use]
pub fn probe_duration_secs(input_path: &Path) -> f64 {
    log::debug!(
        "Running ffprobe (via crate) for duration on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => {
            let duration = metadata
                .format
                .duration
                .as_deref()
                .and_then(|d| d.parse::<f64>().ok());
            match duration {
                Some(secs) => secs.max(1.0),
                None => {
                    log::warn!(
                        "ffprobe reported no duration for {}; assuming {FALLBACK_NARRATION_SECS} s",
                        input_path.display()
                    );
                    FALLBACK_NARRATION_SECS
                }
            }
        }
        Err(err) => {
            log::warn!(
                "ffprobe failed for {} ({err:?}); assuming {FALLBACK_NARRATION_SECS} s",
                input_path.display()
            );
            FALLBACK_NARRATION_SECS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_input_falls_back_to_default_duration() {
        let secs = probe_duration_secs(Path::new("/nonexistent/narration.mp3"));
        assert_eq!(secs, FALLBACK_NARRATION_SECS);
    }
}
