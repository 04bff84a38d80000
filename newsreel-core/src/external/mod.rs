//! Integration with external media tools.
//!
//! Everything that touches ffmpeg or ffprobe lives here: capability
//! probing, filter-graph assembly, the narration duration probe, render
//! command execution, and the startup dependency check.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

pub mod capabilities;
pub mod ffmpeg_executor;
pub mod ffprobe_executor;
pub mod filtergraph;

pub use capabilities::{CapabilityProbe, FfmpegCapabilityProbe, FilterCapabilities};
pub use ffmpeg_executor::{build_render_command, run_render};
pub use ffprobe_executor::probe_duration_secs;
pub use filtergraph::FilterGraph;

/// Checks that a required external command is available and executable.
///
/// Runs `<cmd> -version` with discarded output. A missing binary maps to
/// [`CoreError::DependencyNotFound`]; one that exists but cannot start maps
/// to [`CoreError::CommandStart`].
pub(crate) fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
