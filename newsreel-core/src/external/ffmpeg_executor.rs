//! ffmpeg command building and execution for the final render.
//!
//! Translates a composed `RenderPlan` into a single ffmpeg invocation with
//! fixed encoder settings, then runs it to completion while buffering
//! ffmpeg's log output so a failed render carries its own diagnostics.

use crate::config::{AUDIO_BITRATE, AUDIO_CODEC, VIDEO_CODEC, VIDEO_CRF, VIDEO_PRESET};
use crate::error::{CoreResult, command_failed_error};
use crate::processing::compose::{InputDecl, RenderPlan};

use ffmpeg_sidecar::command::FfmpegCommand;
use log::debug;

/// Builds the ffmpeg invocation for a composed plan.
///
/// Inputs are declared in plan order, looped files behind `-stream_loop`
/// and synthesized sources behind `-f lavfi`, followed by the filter graph,
/// the terminal pad maps, and the fixed encoder flags. `-shortest` pins the
/// container to the narration length.
#[must_use]
pub fn build_render_command(plan: &RenderPlan) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.arg("-y");

    for input in &plan.inputs {
        match input {
            InputDecl::LoopedFile(path) => {
                cmd.args(["-stream_loop", "-1"]);
                cmd.input(path.to_string_lossy().as_ref());
            }
            InputDecl::File(path) => {
                cmd.input(path.to_string_lossy().as_ref());
            }
            InputDecl::Lavfi(source) => {
                cmd.args(["-f", "lavfi"]);
                cmd.input(source.as_str());
            }
        }
    }

    cmd.args(["-filter_complex", &plan.filter_graph]);
    cmd.args(["-map", &format!("[{}]", plan.video_pad)]);
    cmd.args(["-map", &format!("[{}]", plan.audio_pad)]);
    cmd.args(["-c:v", VIDEO_CODEC]);
    cmd.args(["-preset", VIDEO_PRESET]);
    cmd.args(["-crf", &VIDEO_CRF.to_string()]);
    cmd.args(["-c:a", AUDIO_CODEC]);
    cmd.args(["-b:a", AUDIO_BITRATE]);
    cmd.args(["-movflags", "+faststart"]);
    cmd.arg("-shortest");
    cmd.output(plan.output_path.to_string_lossy().as_ref());
    cmd
}

/// Executes the render and waits for completion.
pub fn run_render(plan: &RenderPlan) -> CoreResult<()> {
    let mut cmd = build_render_command(plan);
    let cmd_string = format!("{cmd:?}");
    debug!("FFmpeg command: {cmd_string}");

    let mut child = cmd.spawn().map_err(|e| {
        command_failed_error(
            "ffmpeg",
            std::process::ExitStatus::default(),
            format!("Failed to start: {e}"),
        )
    })?;

    let mut stderr_buffer = String::new();

    for event in child.iter().map_err(|e| {
        command_failed_error(
            "ffmpeg",
            std::process::ExitStatus::default(),
            format!("Failed to get event iterator: {e}"),
        )
    })? {
        match event {
            ffmpeg_sidecar::event::FfmpegEvent::Log(_level, message) => {
                stderr_buffer.push_str(&message);
                stderr_buffer.push('\n');
            }
            ffmpeg_sidecar::event::FfmpegEvent::Error(error) => {
                stderr_buffer.push_str(&format!("ERROR: {error}\n"));
            }
            ffmpeg_sidecar::event::FfmpegEvent::Progress(progress) => {
                log::debug!(
                    "Render progress: time={} speed={}x",
                    progress.time,
                    progress.speed
                );
            }
            _ => {}
        }
    }

    let status = child.wait().map_err(|e| {
        command_failed_error(
            "ffmpeg",
            std::process::ExitStatus::default(),
            format!("Failed to wait for FFmpeg process: {e}"),
        )
    })?;

    if status.success() {
        log::info!("Render finished: {}", plan.output_path.display());
        Ok(())
    } else {
        Err(command_failed_error(
            "ffmpeg",
            status,
            format!(
                "FFmpeg process exited with non-zero status ({:?}). Stderr output:\n{}",
                status.code(),
                stderr_buffer.trim()
            ),
        ))
    }
}
