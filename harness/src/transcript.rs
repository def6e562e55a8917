//! Human-readable transcript: the console lines each demonstration prints,
//! rendered deterministically from run records.
//!
//! The transcript is a derived view. The report is authoritative, and
//! [`render_transcript`] over the same records always yields the same
//! bytes, which the report directory reader relies on.

use sift_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use sift_kernel::seq::{as_sentinel, Key};

use crate::runner::{RunOutcomeV1, RunRecordV1};

/// Space-separated keys, as the demonstrations print arrays.
#[must_use]
pub fn join_keys(seq: &[Key]) -> String {
    seq.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn labelled(label: &str, seq: &[Key]) -> String {
    if seq.is_empty() {
        format!("{label}:")
    } else {
        format!("{label}: {}", join_keys(seq))
    }
}

/// Render one record's block of lines (each newline-terminated).
#[must_use]
pub fn render_record(record: &RunRecordV1) -> String {
    let mut lines = vec![format!("== {} ({}) ==", record.scenario, record.kernel)];
    match &record.outcome {
        RunOutcomeV1::Found { .. } | RunOutcomeV1::NotFound => {
            lines.push(labelled("Array", &record.input));
            let found = match record.outcome {
                RunOutcomeV1::Found { index } => Some(index),
                _ => None,
            };
            let target = &record.params["target"];
            lines.push(format!("Searching for {target}. Result: {}", as_sentinel(found)));
            lines.push(match found {
                Some(index) => format!("Element found at index {index}"),
                None => "Element not found".to_string(),
            });
        }
        RunOutcomeV1::Sorted { output } => {
            lines.push(labelled("Original array", &record.input));
            lines.push(labelled("Sorted array", output));
        }
        RunOutcomeV1::Answer { value } => {
            push_query_inputs(&mut lines, record);
            lines.push(format!("Result: {value}"));
        }
        RunOutcomeV1::KernelError { detail } => {
            push_query_inputs(&mut lines, record);
            lines.push(format!("Error: {detail}"));
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_query_inputs(lines: &mut Vec<String>, record: &RunRecordV1) {
    lines.push(labelled("Array", &record.input));
    if record.params.as_object().is_some_and(|m| !m.is_empty()) {
        lines.push(format!("Params: {}", record.params));
    }
}

/// Render every record in order.
#[must_use]
pub fn render_transcript(records: &[RunRecordV1]) -> String {
    records.iter().map(render_record).collect()
}

/// Content hash of a rendered transcript.
#[must_use]
pub fn transcript_digest(transcript: &str) -> ContentHash {
    canonical_hash(HashDomain::Transcript, transcript.as_bytes())
}
