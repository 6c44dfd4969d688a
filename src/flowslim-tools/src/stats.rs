//! Size and token-count statistics for the before/after schemas.

/// Rough token estimate for a serialized schema, at ~4 characters per
/// token. A proxy for tokenizer output, not an exact count.
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / 4
}

/// Before/after sizes of the compact schema serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionReport {
    pub original_tokens: usize,
    pub filtered_tokens: usize,
    pub original_bytes: usize,
    pub filtered_bytes: usize,
}

impl ReductionReport {
    /// Compare two compact serializations of the same schema. Compact
    /// means whitespace-free, so the pretty formatting of the persisted
    /// file does not skew the numbers.
    pub fn compare(original: &str, filtered: &str) -> Self {
        ReductionReport {
            original_tokens: estimate_tokens(original),
            filtered_tokens: estimate_tokens(filtered),
            original_bytes: original.len(),
            filtered_bytes: filtered.len(),
        }
    }

    /// Tokens saved by filtering. Negative when filtering grew the schema.
    pub fn token_reduction(&self) -> i64 {
        self.original_tokens as i64 - self.filtered_tokens as i64
    }

    pub fn token_reduction_percent(&self) -> f64 {
        percent(self.token_reduction(), self.original_tokens)
    }

    /// Bytes saved by filtering. Negative when filtering grew the schema.
    pub fn byte_reduction(&self) -> i64 {
        self.original_bytes as i64 - self.filtered_bytes as i64
    }

    pub fn byte_reduction_percent(&self) -> f64 {
        percent(self.byte_reduction(), self.original_bytes)
    }
}

fn percent(reduction: i64, original: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        reduction as f64 / original as f64 * 100.0
    }
}
