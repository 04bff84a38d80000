//! Implementation of the 'render' subcommand.
//!
//! This module wires CLI arguments into a core render configuration, runs the
//! render through newsreel-core, and reports the outcome.

use crate::cli::RenderArgs;
use crate::terminal;

use newsreel_core::{CoreResult, FfmpegCapabilityProbe, RenderConfig};
use newsreel_core::{RenderOutcome, format_bytes, format_duration};

use std::fs;
use std::time::Instant;

use log::debug;

/// Creates the core render configuration from CLI arguments.
///
/// The optional assets are always passed through; newsreel-core degrades
/// gracefully when a clip directory, music file or style file is absent.
fn create_render_config(args: RenderArgs) -> RenderConfig {
    let run_id = args
        .run_id
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let mut config = RenderConfig::new(args.script, args.narration, args.output_dir, run_id);
    config.clips_dir = Some(args.clips);
    config.music_path = Some(args.music);
    config.style_path = Some(args.style);
    config
}

/// Displays the resolved inputs before any external tool runs.
fn display_run_info(config: &RenderConfig) {
    terminal::print_section("Render");
    terminal::print_status("Script", &config.script_path.display().to_string(), false);
    terminal::print_status(
        "Narration",
        &config.narration_path.display().to_string(),
        false,
    );
    if let Some(clips_dir) = &config.clips_dir {
        terminal::print_status("Clips", &clips_dir.display().to_string(), false);
    }
    if let Some(music_path) = &config.music_path {
        terminal::print_status("Music", &music_path.display().to_string(), false);
    }
    terminal::print_status("Output dir", &config.output_dir.display().to_string(), false);
    terminal::print_status("Run id", &config.run_id, false);
}

/// Displays the render results including output paths and timing.
fn display_outcome(outcome: &RenderOutcome, total_start_time: Instant) {
    terminal::print_section("Render complete");
    terminal::print_success(&format!("Wrote {}", outcome.video_path.display()));

    terminal::print_status("Captions", &outcome.caption_path.display().to_string(), false);
    terminal::print_status("Caption cues", &outcome.cue_count.to_string(), false);
    terminal::print_status("Clips used", &outcome.clip_count.to_string(), false);
    terminal::print_status(
        "Narration",
        &format_duration(outcome.narration_secs),
        false,
    );

    if let Ok(metadata) = fs::metadata(&outcome.video_path) {
        terminal::print_status("Output size", &format_bytes(metadata.len()), true);
    }

    terminal::print_status(
        "Total time",
        &format_duration(total_start_time.elapsed().as_secs_f64()),
        true,
    );
}

/// Runs one render end to end and reports the results.
pub fn run_render(args: RenderArgs) -> CoreResult<()> {
    let total_start_time = Instant::now();

    let config = create_render_config(args);
    display_run_info(&config);

    debug!("Run started: {}", chrono::Local::now());

    terminal::print_processing("Rendering with ffmpeg");
    let outcome = newsreel_core::render_video(&config, &FfmpegCapabilityProbe)?;

    display_outcome(&outcome, total_start_time);

    debug!("Finished at: {}", chrono::Local::now());
    Ok(())
}
