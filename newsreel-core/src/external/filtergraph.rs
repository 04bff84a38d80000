//! Filter-graph assembly with pad bookkeeping.
//!
//! ffmpeg only reports a broken `-filter_complex` once a render is already
//! running, so graphs are assembled through a builder that checks pad
//! wiring up front: every consumed label must come from an earlier stage,
//! labels fan out exactly once, and nothing is left dangling except the
//! declared terminal pads. Input stream references like `0:v` may be
//! consumed by any number of stages.

use crate::error::{CoreError, CoreResult};

use std::collections::HashMap;

/// One `-filter_complex` stage: input pads, filter body, output pads.
#[derive(Debug, Clone)]
struct Stage {
    inputs: Vec<String>,
    body: String,
    outputs: Vec<String>,
}

/// Ordered collection of filter stages, rendered to a single graph string
/// once the wiring has been validated.
#[derive(Debug, Clone, Default)]
pub struct FilterGraph {
    stages: Vec<Stage>,
}

impl FilterGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage. Pads are written without brackets: stream
    /// references as `0:v`/`1:a`, labels as bare names like `v0`.
    pub fn stage(
        &mut self,
        inputs: &[&str],
        body: impl Into<String>,
        outputs: &[&str],
    ) -> &mut Self {
        self.stages.push(Stage {
            inputs: inputs.iter().map(ToString::to_string).collect(),
            body: body.into(),
            outputs: outputs.iter().map(ToString::to_string).collect(),
        });
        self
    }

    /// Validates pad wiring against the declared input count and terminal
    /// pads, then renders the graph string.
    ///
    /// Rules enforced:
    /// - stream references must point at one of the `input_count` inputs;
    /// - a label must be declared by an earlier stage before it is consumed,
    ///   and is consumed at most once;
    /// - no label is declared twice;
    /// - every declared label is either consumed or listed in
    ///   `terminal_pads`, and terminal pads stay unconsumed.
    pub fn render(&self, input_count: usize, terminal_pads: &[&str]) -> CoreResult<String> {
        let mut declaration_order: Vec<String> = Vec::new();
        let mut consumed: HashMap<String, usize> = HashMap::new();

        for (stage_idx, stage) in self.stages.iter().enumerate() {
            for pad in &stage.inputs {
                if let Some(stream_idx) = parse_stream_ref(pad) {
                    if stream_idx >= input_count {
                        return Err(CoreError::FilterGraph(format!(
                            "stage {stage_idx} reads stream [{pad}] but only {input_count} inputs are declared"
                        )));
                    }
                    continue;
                }
                if !declaration_order.contains(pad) {
                    return Err(CoreError::FilterGraph(format!(
                        "stage {stage_idx} consumes pad [{pad}] before any stage declares it"
                    )));
                }
                let uses = consumed.entry(pad.clone()).or_insert(0);
                *uses += 1;
                if *uses > 1 {
                    return Err(CoreError::FilterGraph(format!(
                        "pad [{pad}] is consumed more than once"
                    )));
                }
            }
            for pad in &stage.outputs {
                if parse_stream_ref(pad).is_some() {
                    return Err(CoreError::FilterGraph(format!(
                        "stage {stage_idx} declares [{pad}], but stream references cannot be outputs"
                    )));
                }
                if declaration_order.contains(pad) {
                    return Err(CoreError::FilterGraph(format!(
                        "pad [{pad}] is declared more than once"
                    )));
                }
                declaration_order.push(pad.clone());
            }
        }

        for pad in terminal_pads {
            let pad = (*pad).to_string();
            if !declaration_order.contains(&pad) {
                return Err(CoreError::FilterGraph(format!(
                    "terminal pad [{pad}] is never declared"
                )));
            }
            if consumed.get(&pad).copied().unwrap_or(0) > 0 {
                return Err(CoreError::FilterGraph(format!(
                    "terminal pad [{pad}] is consumed by a filter stage"
                )));
            }
        }

        for pad in &declaration_order {
            let is_terminal = terminal_pads.iter().any(|t| t == pad);
            if !is_terminal && consumed.get(pad).copied().unwrap_or(0) == 0 {
                return Err(CoreError::FilterGraph(format!(
                    "pad [{pad}] is declared but never consumed"
                )));
            }
        }

        let rendered: Vec<String> = self
            .stages
            .iter()
            .map(|stage| {
                let ins: String = stage.inputs.iter().map(|p| format!("[{p}]")).collect();
                let outs: String = stage.outputs.iter().map(|p| format!("[{p}]")).collect();
                format!("{ins}{}{outs}", stage.body)
            })
            .collect();
        Ok(rendered.join(";"))
    }
}

/// Parses `N:v` / `N:a` into the input index, or `None` for labels.
fn parse_stream_ref(pad: &str) -> Option<usize> {
    let (index, stream) = pad.split_once(':')?;
    if !matches!(stream, "v" | "a") {
        return None;
    }
    index.parse().ok()
}
