//! Caption pacing: word chunking and timing allocation.
//!
//! Cleaned script lines are split into short caption chunks and then laid
//! out over the narration duration in one forward pass. Longer chunks get
//! proportionally more screen time, clamped so nothing flashes by or
//! lingers, and the tail of the timeline always keeps room for the cues
//! still to come.

use crate::config::{MAX_CAPTION_SECS, MAX_WORDS_PER_CAPTION, MIN_CAPTION_SECS};

/// Caption shown when the script yields no usable text.
pub const PLACEHOLDER_CAPTION: &str = "Today's news update";

/// One caption with its time window, in seconds from narration start.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Splits lines into caption-sized chunks of at most
/// [`MAX_WORDS_PER_CAPTION`] words.
///
/// A line at or under the limit passes through whole; a longer line becomes
/// consecutive groups of the maximum size with the final group holding the
/// remainder. Words are never dropped, duplicated, or reordered.
#[must_use]
pub fn chunk_lines(lines: &[String]) -> Vec<String> {
    let mut chunks = Vec::new();
    for line in lines {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() <= MAX_WORDS_PER_CAPTION {
            chunks.push(line.clone());
        } else {
            for group in words.chunks(MAX_WORDS_PER_CAPTION) {
                chunks.push(group.join(" "));
            }
        }
    }
    chunks
}

/// Distributes `total_secs` of narration across the chunks.
///
/// Durations are proportional to word count, clamped to
/// [`MIN_CAPTION_SECS`]..[`MAX_CAPTION_SECS`], and each cue reserves one
/// second of tail room per remaining cue so late captions are never starved.
/// The windows are contiguous from zero and the final cue ends exactly at
/// `total_secs`. An empty chunk list produces a single placeholder cue.
#[must_use]
pub fn allocate_cues(chunks: &[String], total_secs: f64) -> Vec<Cue> {
    let placeholder = [PLACEHOLDER_CAPTION.to_string()];
    let chunks: &[String] = if chunks.is_empty() {
        &placeholder
    } else {
        chunks
    };

    let weights: Vec<f64> = chunks
        .iter()
        .map(|chunk| chunk.split_whitespace().count().max(1) as f64)
        .collect();
    let total_weight: f64 = weights.iter().sum();

    let mut cues = Vec::with_capacity(chunks.len());
    let mut cursor = 0.0_f64;
    for (idx, (chunk, weight)) in chunks.iter().zip(&weights).enumerate() {
        let mut duration =
            (total_secs * weight / total_weight).clamp(MIN_CAPTION_SECS, MAX_CAPTION_SECS);

        // Keep one second of runway per cue still to come.
        let must_keep = (chunks.len() - idx - 1) as f64 * MIN_CAPTION_SECS;
        if cursor + duration > total_secs - must_keep {
            duration = ((total_secs - must_keep) - cursor).max(MIN_CAPTION_SECS);
        }

        let start = cursor;
        let end = (cursor + duration).min(total_secs);
        cues.push(Cue {
            start,
            end,
            text: chunk.clone(),
        });
        cursor = end;
    }

    if let Some(last) = cues.last_mut() {
        last.end = total_secs;
    }
    cues
}
