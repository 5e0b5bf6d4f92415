//! Operations on collections of spans.

use chrono::TimeDelta;

use crate::max;
use crate::time::Span;

/// Returns the spans sorted by start with all duplicates removed.
#[must_use]
pub fn deduplicate(spans: impl IntoIterator<Item = Span>) -> Vec<Span> {
    let mut spans: Vec<Span> = spans.into_iter().collect();
    // spans are ordered by start and then by end, so equal spans end up next to each other
    spans.sort();
    spans.dedup();
    spans
}

/// Merges spans that border or overlap each other into as few spans as possible.
///
/// This is used to turn many small daily windows into larger ones, for
/// example the windows of a weekend into a single span from Friday evening
/// until Monday morning.
#[must_use]
pub fn merge_spans(spans: impl IntoIterator<Item = Span>) -> Vec<Span> {
    fold_runs(spans, |run, span| span.start() <= run.end())
}

/// Merges only spans that overlap for a non-zero duration, bordering spans stay separate.
#[must_use]
pub fn flatten_overlaps(spans: impl IntoIterator<Item = Span>) -> Vec<Span> {
    fold_runs(spans, |run, span| span.start() < run.end())
}

/// The canonical form of a set of spans: sorted, without any two spans
/// bordering or overlapping and without spans of zero length.
#[must_use]
pub fn union(spans: impl IntoIterator<Item = Span>) -> Vec<Span> {
    merge_spans(spans.into_iter().filter(|span| !span.is_zero()))
}

fn fold_runs(
    spans: impl IntoIterator<Item = Span>,
    mut continues_run: impl FnMut(&Span, &Span) -> bool,
) -> Vec<Span> {
    let mut spans: Vec<Span> = spans.into_iter().collect();
    spans.sort();

    let mut runs: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match runs.last_mut() {
            Some(run) if continues_run(&*run, &span) => *run = run.encompass(&span),
            _ => runs.push(span),
        }
    }

    runs
}

/// Removes everything covered by `cuts` from `span`.
///
/// `cuts` must be in canonical form (see [`union`]). The result is ordered and
/// contains no spans of zero length, so a span without length is removed entirely.
#[must_use]
pub fn subtract(span: &Span, cuts: &[Span]) -> Vec<Span> {
    let mut leftovers = Vec::new();
    let mut cursor = span.start();

    // skip the cuts that end before the span starts
    let first = cuts.partition_point(|cut| cut.end() <= span.start());

    for cut in &cuts[first..] {
        if cut.start() >= span.end() {
            break;
        }

        if cut.start() > cursor {
            leftovers.push(Span::new(cursor, cut.start()));
        }

        cursor = max!(cursor, cut.end());
        if cursor >= span.end() {
            break;
        }
    }

    if cursor < span.end() {
        leftovers.push(Span::new(cursor, span.end()));
    }

    leftovers
}

/// The sum of the durations of all spans.
#[must_use]
pub fn total_duration<'a>(spans: impl IntoIterator<Item = &'a Span>) -> TimeDelta {
    spans
        .into_iter()
        .fold(TimeDelta::zero(), |total, span| total + span.duration())
}
