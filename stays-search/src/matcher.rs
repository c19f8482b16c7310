use icu_collator::{Collator, CollatorOptions};
use itertools::Itertools;
use std::cmp::Ordering;
use stays_api_types::SearchRecord;
use tracing::warn;

/// Upper bound on suggestions shown in a results panel.
pub const MAX_RESULTS: usize = 10;

thread_local! {
    /// Root locale collation for title tie-breaks.
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| warn!("title collation unavailable, falling back to code points: {e}"))
            .ok();
}

/// Locale-aware order of two titles, so `éco` sorts between `apple` and `zen`.
fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Returns at most [`MAX_RESULTS`] records whose title or subtitle contains `query`,
/// best first. An empty query yields no suggestions rather than everything.
///
/// Ranking: titles starting with the query beat titles merely containing it, sections
/// beat cards, and a locale-aware comparison of the normalized titles breaks remaining
/// ties. The sort is stable, so
/// identical titles keep index order.
pub fn find_matches(records: &[SearchRecord], query: &str) -> Vec<SearchRecord> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .map(|record| (record, normalize(&record.title)))
        .filter(|(record, title)| {
            title.contains(&query) || normalize(&record.subtitle).contains(&query)
        })
        .sorted_by(|(a, a_title), (b, b_title)| {
            rank(&query, a, a_title, b, b_title)
        })
        .take(MAX_RESULTS)
        .map(|(record, _)| record.clone())
        .collect()
}

fn rank(
    query: &str,
    a: &SearchRecord,
    a_title: &str,
    b: &SearchRecord,
    b_title: &str,
) -> Ordering {
    let a_starts = a_title.starts_with(query);
    let b_starts = b_title.starts_with(query);
    b_starts
        .cmp(&a_starts)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| compare_titles(a_title, b_title))
}
