use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use derive_more::Display;

use crate::time::{local_date, start_of_day};
use crate::{max, min};

/// An inclusive range between two instants.
///
/// The instants are stored in UTC, so two spans created from the same
/// instants in different timezones compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{start} - {end}")]
pub struct Span {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// The outcome of [`Span::trim_if_overlaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// The spans did not overlap, the span is unchanged.
    Disjoint,
    /// The span is entirely covered by the other one.
    Consumed,
    /// The part of the span that is not covered by the other one.
    Remaining(Span),
}

impl Span {
    /// Creates a new span between the two instants. If `end` is before
    /// `start` they are swapped.
    #[must_use]
    pub fn new<A: TimeZone, B: TimeZone>(start: DateTime<A>, end: DateTime<B>) -> Self {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);

        Self {
            start: min!(start, end),
            end: max!(start, end),
        }
    }

    /// The span of the local day `date` in `tz`, from midnight to the next midnight.
    #[must_use]
    pub fn day(tz: Tz, date: NaiveDate) -> Self {
        Self::new(start_of_day(tz, date), start_of_day(tz, date.succ_opt().unwrap_or(date)))
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns `true` if the span has no length.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `self` begins after `instant`.
    #[must_use]
    pub fn is_after(&self, instant: DateTime<Utc>) -> bool {
        self.start > instant
    }

    /// Returns `true` if `self` ends before `instant`.
    #[must_use]
    pub fn is_before(&self, instant: DateTime<Utc>) -> bool {
        self.end < instant
    }

    /// Returns `true` if one of the spans ends exactly where the other one starts.
    #[must_use]
    pub fn borders(&self, other: &Self) -> bool {
        self.start == other.end || self.end == other.start
    }

    #[must_use]
    pub fn contains_time(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`, boundaries included.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The smallest span containing both spans.
    #[must_use]
    pub fn encompass(&self, other: &Self) -> Self {
        Self {
            start: min!(self.start, other.start),
            end: max!(self.end, other.end),
        }
    }

    /// The span between `self` and `other` or `None` if they overlap.
    #[must_use]
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.overlaps(other) {
            return None;
        }

        Some(Self {
            start: min!(self.end, other.end),
            end: max!(self.start, other.start),
        })
    }

    /// Returns `true` if `self` begins at or after the end of `other`.
    #[must_use]
    pub fn follows(&self, other: &Self) -> bool {
        self.start >= other.end
    }

    /// Returns `true` if `self` ends at or before the start of `other`.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.end <= other.start
    }

    /// Returns `true` if the spans share a non-zero duration. Spans that only
    /// touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns the overlapping part of both spans.
    ///
    /// Two equal spans always intersect, even if they have no length.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self == other {
            return Some(*self);
        }

        if !self.overlaps(other) {
            return None;
        }

        Some(Self {
            start: max!(self.start, other.start),
            end: min!(self.end, other.end),
        })
    }

    /// Cuts off the part of `self` that is covered by `other`.
    ///
    /// This assumes that `other` overlaps `self` from one side only. If
    /// `other` lies strictly within `self`, only the part before `other` is
    /// kept.
    #[must_use]
    pub fn trim_if_overlaps(&self, other: &Self) -> Trim {
        if self == other || (self.overlaps(other) && other.contains(self)) {
            return Trim::Consumed;
        }

        if !self.overlaps(other) {
            return Trim::Disjoint;
        }

        if self.start < other.start {
            // other overlaps self from the end
            Trim::Remaining(Self::new(self.start, other.start))
        } else {
            // other overlaps self from the beginning
            Trim::Remaining(Self::new(other.end, self.end))
        }
    }

    /// Returns the local dates in `tz` on which the span has a non-zero part.
    ///
    /// A span without length returns the date it is on.
    #[must_use]
    pub fn dates_in(&self, tz: Tz) -> Vec<NaiveDate> {
        let first = local_date(tz, self.start);
        if self.is_zero() {
            return vec![first];
        }

        first
            .iter_days()
            .take_while(|date| start_of_day(tz, *date) < self.end)
            .collect()
    }

    /// Splits the span at every local midnight in `tz`.
    #[must_use]
    pub fn split_by_day(&self, tz: Tz) -> Vec<Self> {
        if self.is_zero() {
            return vec![*self];
        }

        self.dates_in(tz)
            .into_iter()
            .filter_map(|date| self.intersection(&Self::day(tz, date)))
            .filter(|span| !span.is_zero())
            .collect()
    }
}
