//! Rendering of the summary returned to the caller after filtering.

use std::path::{Path, PathBuf};

use crate::filter::ID_WORKFLOW_REQUIRED;
use crate::stats::ReductionReport;

/// Render the multi-line summary for a completed filtering run: resolved
/// file locations, token and byte reductions, and the edits that were
/// applied to the schema.
pub fn render(input_path: &Path, output_path: &Path, stats: &ReductionReport) -> String {
    format!(
        r#"Filtered schema successfully created.

Files:
- input:  {input}
- output: {output}

Token count reduction:
- original schema: ~{original_tokens} tokens
- filtered schema: ~{filtered_tokens} tokens
- reduction: ~{token_reduction} tokens ({token_percent:.1}%)

File size reduction:
- original schema: {original_bytes} bytes
- filtered schema: {filtered_bytes} bytes
- reduction: {byte_reduction} bytes ({byte_percent:.1}%)

Schema changes made:
- removed the 'key' property from the root properties
- narrowed the oneOf constraint to the ID-based workflow variant
- kept all shared definitions and properties intact
- updated the description to reflect ID-only support

The filtered schema accepts only workflows requiring {required:?}."#,
        input = absolute(input_path).display(),
        output = absolute(output_path).display(),
        original_tokens = group_thousands(stats.original_tokens as i64),
        filtered_tokens = group_thousands(stats.filtered_tokens as i64),
        token_reduction = group_thousands(stats.token_reduction()),
        token_percent = stats.token_reduction_percent(),
        original_bytes = group_thousands(stats.original_bytes as i64),
        filtered_bytes = group_thousands(stats.filtered_bytes as i64),
        byte_reduction = group_thousands(stats.byte_reduction()),
        byte_percent = stats.byte_reduction_percent(),
        required = ID_WORKFLOW_REQUIRED,
    )
}

/// Best-effort absolute form of a path. The output path may not exist at
/// render time, so this must not canonicalize.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Formats a count with thousands separators, e.g. 12345 -> "12,345".
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if n < 0 { format!("-{grouped}") } else { grouped }
}
