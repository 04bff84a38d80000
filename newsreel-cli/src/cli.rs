// newsreel-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Newsreel: Narrated short video renderer",
    long_about = "Turns a narration script and recorded audio into a captioned vertical video using ffmpeg via the newsreel-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders the caption track and final video for one narration
    Render(RenderArgs),
    // Add other subcommands here later (e.g., probe, captions-only)
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Narration script text file
    #[arg(short = 's', long = "script", required = true, value_name = "SCRIPT_FILE")]
    pub script: PathBuf,

    /// Recorded narration audio file
    #[arg(short = 'n', long = "narration", required = true, value_name = "AUDIO_FILE")]
    pub narration: PathBuf,

    /// Directory holding background clips (.mp4)
    #[arg(long, value_name = "CLIPS_DIR", default_value = "assets/broll")]
    pub clips: PathBuf,

    /// Background music bed mixed under the narration
    #[arg(long, value_name = "MUSIC_FILE", default_value = "assets/bgm.mp3")]
    pub music: PathBuf,

    /// JSON file with style overrides (colors, fonts, branding)
    #[arg(long, value_name = "STYLE_FILE", default_value = "config/style.json")]
    pub style: PathBuf,

    /// Directory where the caption track and video are saved
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR", default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Optional: Identifier embedded in output filenames (defaults to today's UTC date)
    #[arg(long, value_name = "RUN_ID")]
    pub run_id: Option<String>,
}
