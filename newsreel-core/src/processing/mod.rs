//! The render pipeline.
//!
//! One-way flow per narration: script text is cleaned and chunked, cues are
//! allocated over the narration length and written as SRT, assets and
//! capabilities are gathered, and the composed plan is handed to ffmpeg.
//! A missing script or missing ffmpeg is fatal; degraded inputs (no clips,
//! no music, failed probes) only narrow the output.

pub mod compose;
pub mod pacing;
pub mod script;
pub mod srt;

use crate::config::{RenderConfig, StyleConfig};
use crate::discovery;
use crate::error::{CoreError, CoreResult};
use crate::external::{self, CapabilityProbe};
use crate::utils::format_duration;

use std::path::PathBuf;

/// What a completed render produced, for reporting.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub video_path: PathBuf,
    pub caption_path: PathBuf,
    pub narration_secs: f64,
    pub cue_count: usize,
    pub clip_count: usize,
}

/// Renders one narrated short: timed captions plus the composited video.
pub fn render_video(
    config: &RenderConfig,
    probe: &dyn CapabilityProbe,
) -> CoreResult<RenderOutcome> {
    if !config.script_path.is_file() {
        return Err(CoreError::ScriptNotFound(config.script_path.clone()));
    }
    let script_text = std::fs::read_to_string(&config.script_path).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to read script '{}': {}",
            config.script_path.display(),
            e
        ))
    })?;

    external::check_dependency("ffmpeg")?;

    let narration_secs = external::probe_duration_secs(&config.narration_path);
    log::info!("Narration length: {}", format_duration(narration_secs));

    let lines = script::clean_script_lines(&script_text);
    let chunks = pacing::chunk_lines(&lines);
    let cues = pacing::allocate_cues(&chunks, narration_secs);

    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to create output directory '{}': {}",
            config.output_dir.display(),
            e
        ))
    })?;
    let caption_path = config.caption_output_path();
    srt::write_caption_file(&caption_path, &cues)?;
    log::info!(
        "Wrote {} caption cues to {}",
        cues.len(),
        caption_path.display()
    );

    let clips = match &config.clips_dir {
        Some(dir) => discovery::find_background_clips(dir)?,
        None => Vec::new(),
    };
    let music_path = config
        .music_path
        .as_deref()
        .and_then(discovery::find_background_music);
    let style = StyleConfig::load(config.style_path.as_deref());
    let headline = script::select_headline(&script_text);

    let capabilities = probe.probe();
    if !capabilities.text_overlay {
        log::warn!("ffmpeg lacks drawtext; skipping headline and watermark overlays");
    }
    if !capabilities.caption_burn_in {
        log::warn!("ffmpeg lacks subtitles; captions stay in the SRT file only");
    }
    if clips.len() > 1 && !capabilities.crossfade {
        log::warn!("ffmpeg lacks xfade; playing the first clip without transitions");
    }

    let params = compose::ComposeParams {
        clips,
        narration_path: config.narration_path.clone(),
        music_path,
        caption_path: caption_path.clone(),
        headline,
        style,
        capabilities,
        duration_secs: narration_secs,
        output_path: config.video_output_path(),
    };
    let clip_count = params.clips.len();
    let plan = compose::build_render_plan(&params)?;
    log::debug!("Filter graph: {}", plan.filter_graph);

    external::run_render(&plan)?;

    Ok(RenderOutcome {
        video_path: plan.output_path.clone(),
        caption_path,
        narration_secs,
        cue_count: cues.len(),
        clip_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoProbe;
    impl CapabilityProbe for NoProbe {
        fn probe(&self) -> external::FilterCapabilities {
            external::FilterCapabilities::default()
        }
    }

    #[test]
    fn missing_script_fails_before_any_external_call() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::new(
            dir.path().join("script.txt"),
            dir.path().join("narration.mp3"),
            dir.path().join("outputs"),
            "2026-01-01".to_string(),
        );

        let err = render_video(&config, &NoProbe).unwrap_err();
        assert!(matches!(err, CoreError::ScriptNotFound(_)));
        assert!(!dir.path().join("outputs").exists());
    }
}
