//! Discovery of optional background assets.
//!
//! Background clips and the music bed are both optional inputs. Discovery
//! never fails a render on their account: a missing clip directory or music
//! file simply yields nothing and the render falls back accordingly.

use crate::config::MAX_BACKGROUND_CLIPS;
use crate::error::CoreResult;

use std::path::{Path, PathBuf};

/// Finds background clips in the top level of `clips_dir`.
///
/// Scans for `.mp4` files (case-insensitive), sorts them by path so repeated
/// runs pick the same footage, and keeps at most [`MAX_BACKGROUND_CLIPS`].
/// Subdirectories are not searched. A missing directory yields an empty list.
pub fn find_background_clips(clips_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    if !clips_dir.is_dir() {
        log::debug!(
            "Clip directory {} not found; using a solid color background",
            clips_dir.display()
        );
        return Ok(Vec::new());
    }

    let read_dir = std::fs::read_dir(clips_dir)?;
    let mut clips: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| ext_str.eq_ignore_ascii_case("mp4"))
                .map(|_| path.clone())
        })
        .collect();

    clips.sort();
    clips.truncate(MAX_BACKGROUND_CLIPS);
    Ok(clips)
}

/// Returns the music bed path when the file exists.
#[must_use]
pub fn find_background_music(music_path: &Path) -> Option<PathBuf> {
    if music_path.is_file() {
        Some(music_path.to_path_buf())
    } else {
        log::debug!(
            "No music bed at {}; mixing narration only",
            music_path.display()
        );
        None
    }
}
