use crate::datasources::{CategorySource, CategorySources};
use crate::time::{
    deduplicate, flatten_overlaps, subtract, union, AttributedSpan, AttributedSpans,
    OnCallAttribute, Span,
};

/// Splits the shifts of a single user into parts attributed to a category.
///
/// The sources are consulted from the highest to the lowest priority, each
/// one claims the parts of the shifts that are not yet attributed and
/// overlap one of its spans. Whatever is left in the end is attributed to
/// business hours.
///
/// The shifts must not overlap each other. The resulting parts never
/// overlap, are ordered by their start and add up to the duration of the
/// shifts. Shifts without length are ignored.
#[must_use]
pub fn attribute_shift(shifts: &[Span], sources: &CategorySources) -> AttributedSpans {
    let mut breakdown = AttributedSpans::new();
    let mut remaining = deduplicate(shifts.iter().copied().filter(|shift| !shift.is_zero()));

    for source in sources.by_priority() {
        if remaining.is_empty() {
            break;
        }

        let matches = matching_parts(&remaining, source);
        if matches.is_empty() {
            continue;
        }

        let cuts = union(matches.iter().copied());
        remaining = deduplicate(remaining.iter().flat_map(|span| subtract(span, &cuts)));

        let category = source.category();
        breakdown.extend(
            matches
                .into_iter()
                .map(|span| AttributedSpan::new(span, category)),
        );
    }

    breakdown.extend(
        remaining
            .into_iter()
            .map(|span| AttributedSpan::new(span, OnCallAttribute::Business)),
    );

    breakdown.sort();
    breakdown
}

/// The parts of `spans` that are covered by the spans of `source`.
///
/// `spans` have to be ordered and disjoint.
fn matching_parts(spans: &[Span], source: &dyn CategorySource) -> Vec<Span> {
    // overlapping spans of the same category would be counted twice, bordering
    // ones are kept apart so every company day stays a part of its own
    let candidates = flatten_overlaps(source.spans().iter().copied());

    let mut matches = Vec::new();
    for span in spans {
        let first = candidates.partition_point(|candidate| candidate.end() <= span.start());

        matches.extend(
            candidates[first..]
                .iter()
                .take_while(|candidate| candidate.start() < span.end())
                .filter_map(|candidate| span.intersection(candidate))
                .filter(|part| !part.is_zero()),
        );
    }

    matches
}
