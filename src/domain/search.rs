use super::content::ContentRecord;
use regex::{Regex, RegexBuilder};

const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiles the trimmed query as a case-insensitive pattern.
///
/// Returns `None` for a blank query and for one that is not a well-formed
/// pattern; free-text input like `(` or `*map` simply finds nothing.
#[must_use]
pub fn compile_query(query: &str) -> Option<Regex> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    match RegexBuilder::new(trimmed)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::debug!(query = trimmed, error = %e, "search query is not a valid pattern");
            None
        }
    }
}

/// Records whose title, spaced page slug, or summary match `query`, in index order.
#[must_use]
pub fn filter<'a>(query: &str, records: &'a [ContentRecord]) -> Vec<&'a ContentRecord> {
    let Some(pattern) = compile_query(query) else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| is_match(&pattern, record))
        .collect()
}

fn is_match(pattern: &Regex, record: &ContentRecord) -> bool {
    let Some(title) = record.display_title() else {
        return false;
    };

    pattern.is_match(title)
        || pattern.is_match(&record.spaced_page())
        || record
            .summary
            .as_deref()
            .is_some_and(|summary| pattern.is_match(summary))
}
