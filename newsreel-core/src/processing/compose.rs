//! Render plan composition.
//!
//! Turns the gathered render inputs into a `RenderPlan`: the ordered ffmpeg
//! input declarations plus one validated `-filter_complex` graph ending in
//! the `vout`/`aout` pads. Background clips loop and crossfade under the
//! overlay stack; without clips a solid color background fades in and out.
//! Narration always drives the audio, with an optional ducked music bed
//! underneath.

use crate::config::{
    CROSSFADE_SECS, EDGE_FADE_SECS, FALLBACK_BACKGROUND_COLOR, MAX_HEADLINE_CHARS,
    MIN_CLIP_SEGMENT_SECS, MUSIC_BED_VOLUME, StyleConfig, TARGET_FPS, TARGET_HEIGHT, TARGET_WIDTH,
};
use crate::error::CoreResult;
use crate::external::capabilities::FilterCapabilities;
use crate::external::filtergraph::FilterGraph;

use std::path::{Path, PathBuf};

/// Terminal video pad of every render graph.
pub const VIDEO_OUT_PAD: &str = "vout";
/// Terminal audio pad of every render graph.
pub const AUDIO_OUT_PAD: &str = "aout";

/// Everything composition needs to build a plan. Paths are taken as given;
/// discovery and probing have already happened.
#[derive(Debug, Clone)]
pub struct ComposeParams {
    pub clips: Vec<PathBuf>,
    pub narration_path: PathBuf,
    pub music_path: Option<PathBuf>,
    pub caption_path: PathBuf,
    pub headline: String,
    pub style: StyleConfig,
    pub capabilities: FilterCapabilities,
    pub duration_secs: f64,
    pub output_path: PathBuf,
}

/// One ffmpeg input in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDecl {
    /// File input looped indefinitely (`-stream_loop -1`).
    LoopedFile(PathBuf),
    /// Plain file input.
    File(PathBuf),
    /// Synthesized lavfi source (`-f lavfi`).
    Lavfi(String),
}

/// A fully composed render: inputs, validated filter graph, terminal pads,
/// output path. Built fresh per render and never mutated.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub inputs: Vec<InputDecl>,
    pub filter_graph: String,
    pub video_pad: &'static str,
    pub audio_pad: &'static str,
    pub output_path: PathBuf,
}

/// Composes the render plan for one video.
pub fn build_render_plan(params: &ComposeParams) -> CoreResult<RenderPlan> {
    let mut inputs: Vec<InputDecl> = Vec::new();
    let mut graph = FilterGraph::new();

    let overlay_body = overlay_filters(params).join(",");

    if params.clips.is_empty() {
        inputs.push(InputDecl::Lavfi(format!(
            "color=c={FALLBACK_BACKGROUND_COLOR}:s={TARGET_WIDTH}x{TARGET_HEIGHT}:d={:.3},format=yuv420p",
            params.duration_secs
        )));
        let fade_out_start = (params.duration_secs - EDGE_FADE_SECS).max(0.0);
        graph.stage(
            &["0:v"],
            format!(
                "fade=t=in:st=0:d={EDGE_FADE_SECS},fade=t=out:st={fade_out_start:.2}:d={EDGE_FADE_SECS},{overlay_body}"
            ),
            &[VIDEO_OUT_PAD],
        );
    } else {
        for clip in &params.clips {
            inputs.push(InputDecl::LoopedFile(clip.clone()));
        }
        let base_pad = clip_stages(&mut graph, params);
        graph.stage(&[base_pad.as_str()], overlay_body, &[VIDEO_OUT_PAD]);
    }

    inputs.push(InputDecl::File(params.narration_path.clone()));
    let narration_idx = inputs.len() - 1;

    if let Some(music) = &params.music_path {
        inputs.push(InputDecl::LoopedFile(music.clone()));
        let music_idx = inputs.len() - 1;
        audio_stages_with_music(&mut graph, narration_idx, music_idx, params.duration_secs);
    } else {
        graph.stage(
            &[format!("{narration_idx}:a").as_str()],
            "anull",
            &[AUDIO_OUT_PAD],
        );
    }

    let filter_graph = graph.render(inputs.len(), &[VIDEO_OUT_PAD, AUDIO_OUT_PAD])?;
    Ok(RenderPlan {
        inputs,
        filter_graph,
        video_pad: VIDEO_OUT_PAD,
        audio_pad: AUDIO_OUT_PAD,
        output_path: params.output_path.clone(),
    })
}

/// Per-clip normalization chains plus crossfades, returning the pad the
/// overlay stack should consume.
///
/// Each clip plays for an equal share of the narration, padded by the
/// crossfade overlap. Without the `xfade` capability (or with a single
/// clip) only the first clip's chain is emitted; the remaining inputs stay
/// declared so input indices are stable, and ffmpeg simply never reads
/// them.
fn clip_stages(graph: &mut FilterGraph, params: &ComposeParams) -> String {
    let clip_count = params.clips.len();
    let segment_secs = MIN_CLIP_SEGMENT_SECS.max(params.duration_secs / clip_count as f64);
    let use_crossfade = clip_count > 1 && params.capabilities.crossfade;

    let chained = if use_crossfade { clip_count } else { 1 };
    for idx in 0..chained {
        graph.stage(
            &[format!("{idx}:v").as_str()],
            clip_chain_body(segment_secs),
            &[format!("v{idx}").as_str()],
        );
    }
    if !use_crossfade {
        return "v0".to_string();
    }

    let mut prev = "v0".to_string();
    for idx in 1..clip_count {
        let offset = (idx as f64 * (segment_secs - CROSSFADE_SECS)).max(0.1);
        let out = format!("x{idx}");
        graph.stage(
            &[prev.as_str(), format!("v{idx}").as_str()],
            format!("xfade=transition=fade:duration={CROSSFADE_SECS}:offset={offset:.3}"),
            &[out.as_str()],
        );
        prev = out;
    }
    prev
}

fn clip_chain_body(segment_secs: f64) -> String {
    format!(
        "trim=duration={:.3},setpts=PTS-STARTPTS,\
         scale={TARGET_WIDTH}:{TARGET_HEIGHT}:force_original_aspect_ratio=increase,\
         crop={TARGET_WIDTH}:{TARGET_HEIGHT},\
         eq=saturation=1.08:contrast=1.06:brightness=0.01,fps={TARGET_FPS}",
        segment_secs + CROSSFADE_SECS
    )
}

/// Music bed: trimmed to the narration, attenuated, compressed against the
/// narration as sidechain key, then mixed under it.
fn audio_stages_with_music(
    graph: &mut FilterGraph,
    narration_idx: usize,
    music_idx: usize,
    duration_secs: f64,
) {
    let narration = format!("{narration_idx}:a");
    graph
        .stage(
            &[format!("{music_idx}:a").as_str()],
            format!("atrim=0:{duration_secs:.3},asetpts=N/SR/TB,volume={MUSIC_BED_VOLUME}"),
            &["bgm"],
        )
        .stage(
            &["bgm", narration.as_str()],
            "sidechaincompress=threshold=0.03:ratio=12:attack=20:release=300",
            &["ducked"],
        )
        .stage(
            &[narration.as_str(), "ducked"],
            "amix=inputs=2:weights='1 0.7':normalize=0",
            &[AUDIO_OUT_PAD],
        );
}

/// The overlay stack, in paint order: animated accent boxes, top and
/// lower-third bars, accent chip, then capability-gated text and captions.
fn overlay_filters(params: &ComposeParams) -> Vec<String> {
    let style = &params.style;
    let mut filters = vec![
        "drawbox=x='mod(t*120,1080)':y=80:w=360:h=220:color=0x2563eb@0.15:t=fill".to_string(),
        "drawbox=x='1080-mod(t*90,1400)':y=1460:w=520:h=320:color=0x7c3aed@0.14:t=fill".to_string(),
        "drawbox=x=0:y=0:w=1080:h=180:color=black@0.35:t=fill".to_string(),
        format!(
            "drawbox=x=0:y=1740:w=1080:h=180:color={}@{}:t=fill",
            style.lower_third_bg_hex, style.lower_third_bg_alpha
        ),
        format!(
            "drawbox=x=32:y=200:w=300:h=64:color={}@0.28:t=fill",
            style.accent_color_hex
        ),
    ];

    if params.capabilities.text_overlay {
        let headline: String = params.headline.chars().take(MAX_HEADLINE_CHARS).collect();
        filters.push(format!(
            "drawtext=text='{}':fontcolor=white:fontsize=28:x=52:y=218",
            escape_drawtext_text(&style.accent_label)
        ));
        filters.push(format!(
            "drawtext=text='{}':fontcolor={}:fontsize={}:x=(w-text_w)/2:y=50",
            escape_drawtext_text(&headline),
            style.headline_color,
            style.headline_fontsize
        ));
        filters.push(format!(
            "drawtext=text='{}':fontcolor=white@0.82:fontsize=30:x=40:y=1798",
            escape_drawtext_text(&style.watermark)
        ));
    }

    if params.capabilities.caption_burn_in {
        filters.push(format!(
            "subtitles='{}':force_style='FontName=Arial,FontSize={},\
             PrimaryColour=&H00FFFFFF,OutlineColour=&H00000000,BackColour=&H50000000,\
             BorderStyle=3,Outline=1.2,Shadow=0,MarginV=120,Alignment=2'",
            escape_subtitles_path(&params.caption_path),
            style.subtitle_fontsize
        ));
    }

    filters
}

/// Escapes text for a single-quoted `drawtext` argument. Backslashes go
/// first so the later passes do not double-escape their own output.
#[must_use]
pub fn escape_drawtext_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(':', "\\:")
        .replace('\'', "\\'")
}

/// Escapes a caption path for the `subtitles` filter. Backslashes become
/// forward slashes so Windows-style paths survive the filter parser.
#[must_use]
pub fn escape_subtitles_path(path: &Path) -> String {
    path.display()
        .to_string()
        .replace('\\', "/")
        .replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> ComposeParams {
        ComposeParams {
            clips: Vec::new(),
            narration_path: PathBuf::from("/tmp/narration.mp3"),
            music_path: None,
            caption_path: PathBuf::from("/tmp/outputs/sub_2026-01-01.srt"),
            headline: "Breaking: AI update".to_string(),
            style: StyleConfig::default(),
            capabilities: FilterCapabilities {
                text_overlay: true,
                caption_burn_in: true,
                crossfade: true,
            },
            duration_secs: 12.0,
            output_path: PathBuf::from("/tmp/outputs/video_2026-01-01.mp4"),
        }
    }

    fn clip(name: &str) -> PathBuf {
        PathBuf::from(format!("/tmp/broll/{name}"))
    }

    #[test]
    fn no_clips_renders_on_a_faded_color_background() {
        let plan = build_render_plan(&base_params()).unwrap();

        assert_eq!(plan.inputs.len(), 2);
        match &plan.inputs[0] {
            InputDecl::Lavfi(source) => {
                assert!(
                    source.contains("color=c=#0b1020:s=1080x1920:d=12.000"),
                    "unexpected lavfi source: {source}"
                );
                assert!(source.ends_with("format=yuv420p"), "unexpected lavfi source: {source}");
            }
            other => panic!("expected a lavfi input, got {other:?}"),
        }
        assert_eq!(
            plan.inputs[1],
            InputDecl::File(PathBuf::from("/tmp/narration.mp3"))
        );

        assert!(
            plan.filter_graph
                .starts_with("[0:v]fade=t=in:st=0:d=0.45,fade=t=out:st=11.55:d=0.45,"),
            "unexpected graph start: {}",
            plan.filter_graph
        );
        assert!(plan.filter_graph.contains("[vout]"));
        assert!(plan.filter_graph.contains("[1:a]anull[aout]"));
    }

    #[test]
    fn clips_loop_scale_and_crossfade() {
        let mut params = base_params();
        params.clips = vec![clip("a.mp4"), clip("b.mp4"), clip("c.mp4")];
        let plan = build_render_plan(&params).unwrap();

        // Three looped clips then narration.
        assert_eq!(plan.inputs.len(), 4);
        assert!(matches!(plan.inputs[0], InputDecl::LoopedFile(_)));
        assert!(matches!(plan.inputs[2], InputDecl::LoopedFile(_)));
        assert_eq!(
            plan.inputs[3],
            InputDecl::File(PathBuf::from("/tmp/narration.mp3"))
        );

        // 12 s over 3 clips: 4 s segments plus crossfade overlap.
        assert!(
            plan.filter_graph.contains("[0:v]trim=duration=4.350,setpts=PTS-STARTPTS"),
            "unexpected graph: {}",
            plan.filter_graph
        );
        assert!(plan.filter_graph.contains("scale=1080:1920:force_original_aspect_ratio=increase"));
        assert!(plan.filter_graph.contains("crop=1080:1920"));
        assert!(plan.filter_graph.contains("fps=30[v0]"));
        assert!(
            plan.filter_graph
                .contains("[v0][v1]xfade=transition=fade:duration=0.35:offset=3.650[x1]"),
            "unexpected graph: {}",
            plan.filter_graph
        );
        assert!(
            plan.filter_graph
                .contains("[x1][v2]xfade=transition=fade:duration=0.35:offset=7.300[x2]"),
            "unexpected graph: {}",
            plan.filter_graph
        );
        assert!(plan.filter_graph.contains("[x2]drawbox="));
    }

    #[test]
    fn single_clip_skips_crossfades() {
        let mut params = base_params();
        params.clips = vec![clip("only.mp4")];
        let plan = build_render_plan(&params).unwrap();

        assert!(!plan.filter_graph.contains("xfade"));
        assert!(plan.filter_graph.contains("[v0]drawbox="));
    }

    #[test]
    fn missing_crossfade_capability_plays_only_the_first_clip() {
        let mut params = base_params();
        params.clips = vec![clip("a.mp4"), clip("b.mp4"), clip("c.mp4")];
        params.capabilities.crossfade = false;
        let plan = build_render_plan(&params).unwrap();

        // Inputs stay declared for stable indices; only clip 0 is wired.
        assert_eq!(plan.inputs.len(), 4);
        assert!(!plan.filter_graph.contains("xfade"));
        assert!(!plan.filter_graph.contains("[1:v]"));
        assert!(!plan.filter_graph.contains("[2:v]"));
        assert!(plan.filter_graph.contains("[v0]drawbox="));
    }

    #[test]
    fn overlay_stack_is_ordered_and_styled() {
        let plan = build_render_plan(&base_params()).unwrap();
        let graph = &plan.filter_graph;

        let top_bar = graph.find("drawbox=x=0:y=0:w=1080:h=180:color=black@0.35").unwrap();
        let lower_third = graph
            .find("drawbox=x=0:y=1740:w=1080:h=180:color=0x000000@0.38")
            .unwrap();
        let accent_chip = graph
            .find("drawbox=x=32:y=200:w=300:h=64:color=0xf59e0b@0.28")
            .unwrap();
        let headline = graph.find("fontsize=56:x=(w-text_w)/2:y=50").unwrap();
        assert!(top_bar < lower_third);
        assert!(lower_third < accent_chip);
        assert!(accent_chip < headline);
    }

    #[test]
    fn headline_is_escaped_for_drawtext() {
        let plan = build_render_plan(&base_params()).unwrap();
        assert!(
            plan.filter_graph
                .contains("drawtext=text='Breaking\\: AI update':fontcolor=white:fontsize=56"),
            "unexpected graph: {}",
            plan.filter_graph
        );
    }

    #[test]
    fn headline_is_truncated_to_ninety_characters() {
        let mut params = base_params();
        params.headline = "x".repeat(120);
        let plan = build_render_plan(&params).unwrap();

        assert!(plan.filter_graph.contains(&"x".repeat(90)));
        assert!(!plan.filter_graph.contains(&"x".repeat(91)));
    }

    #[test]
    fn text_overlays_are_capability_gated() {
        let mut params = base_params();
        params.capabilities.text_overlay = false;
        let plan = build_render_plan(&params).unwrap();
        assert!(!plan.filter_graph.contains("drawtext"));
        // Caption burn-in is gated independently.
        assert!(plan.filter_graph.contains("subtitles="));

        params.capabilities.caption_burn_in = false;
        let plan = build_render_plan(&params).unwrap();
        assert!(!plan.filter_graph.contains("subtitles"));
    }

    #[test]
    fn captions_burn_in_with_forced_style() {
        let plan = build_render_plan(&base_params()).unwrap();
        assert!(
            plan.filter_graph
                .contains("subtitles='/tmp/outputs/sub_2026-01-01.srt':force_style='FontName=Arial,FontSize=18,"),
            "unexpected graph: {}",
            plan.filter_graph
        );
        assert!(plan.filter_graph.contains("MarginV=120,Alignment=2'"));
    }

    #[test]
    fn music_bed_is_trimmed_ducked_and_mixed() {
        let mut params = base_params();
        params.music_path = Some(PathBuf::from("/tmp/bgm.mp3"));
        let plan = build_render_plan(&params).unwrap();

        // Lavfi background, narration, then the looped bed.
        assert_eq!(plan.inputs.len(), 3);
        assert_eq!(
            plan.inputs[2],
            InputDecl::LoopedFile(PathBuf::from("/tmp/bgm.mp3"))
        );
        assert!(
            plan.filter_graph
                .contains("[2:a]atrim=0:12.000,asetpts=N/SR/TB,volume=0.22[bgm]"),
            "unexpected graph: {}",
            plan.filter_graph
        );
        assert!(plan.filter_graph.contains(
            "[bgm][1:a]sidechaincompress=threshold=0.03:ratio=12:attack=20:release=300[ducked]"
        ));
        assert!(plan.filter_graph.contains(
            "[1:a][ducked]amix=inputs=2:weights='1 0.7':normalize=0[aout]"
        ));
    }

    #[test]
    fn escape_rules_for_drawtext_text() {
        assert_eq!(escape_drawtext_text("plain"), "plain");
        assert_eq!(escape_drawtext_text("a:b"), "a\\:b");
        assert_eq!(escape_drawtext_text("it's"), "it\\'s");
        assert_eq!(escape_drawtext_text("a\\:b'c"), "a\\\\\\:b\\'c");
    }

    #[test]
    fn escape_rules_for_subtitle_paths() {
        assert_eq!(
            escape_subtitles_path(Path::new("/tmp/out/sub.srt")),
            "/tmp/out/sub.srt"
        );
        assert_eq!(
            escape_subtitles_path(Path::new("C:\\caps\\sub.srt")),
            "C:/caps/sub.srt"
        );
        assert_eq!(
            escape_subtitles_path(Path::new("/tmp/it's.srt")),
            "/tmp/it\\'s.srt"
        );
    }
}
