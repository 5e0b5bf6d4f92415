use core::ops::Deref;

use chrono::TimeDelta;
use derive_more::Display;
use serde::Serialize;

use crate::time::{total_duration, Span};

/// The category a part of an on-call shift is billed as.
///
/// The categories are listed from the lowest to the highest priority, if
/// an instant belongs to several categories the one declared last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub enum OnCallAttribute {
    #[display("Unknown")]
    Unknown,
    #[display("Business Hours")]
    Business,
    #[display("After Hours")]
    AfterHours,
    #[display("Weekend")]
    Weekend,
    #[display("Stat Holiday")]
    StatHoliday,
    #[display("Company Day")]
    CompanyDay,
}

impl OnCallAttribute {
    /// All categories a shift can be attributed to, from the highest to the
    /// lowest priority.
    pub const ATTRIBUTABLE: [Self; 5] = [
        Self::CompanyDay,
        Self::StatHoliday,
        Self::Weekend,
        Self::AfterHours,
        Self::Business,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{attribute}: {span}")]
pub struct AttributedSpan {
    span: Span,
    attribute: OnCallAttribute,
}

impl AttributedSpan {
    #[must_use]
    pub const fn new(span: Span, attribute: OnCallAttribute) -> Self {
        Self { span, attribute }
    }

    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    #[must_use]
    pub const fn attribute(&self) -> OnCallAttribute {
        self.attribute
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// The breakdown of one or more shifts into categorised parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributedSpans(Vec<AttributedSpan>);

impl AttributedSpans {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sorts the spans by their start, the order of spans with the same
    /// start is kept.
    pub fn sort(&mut self) {
        self.0.sort_by_key(|attributed| attributed.span().start());
    }

    pub fn iter_of(&self, attribute: OnCallAttribute) -> impl Iterator<Item = &AttributedSpan> {
        self.0
            .iter()
            .filter(move |attributed| attributed.attribute() == attribute)
    }

    #[must_use]
    pub fn duration_of(&self, attribute: OnCallAttribute) -> TimeDelta {
        total_duration(self.iter_of(attribute).map(AttributedSpan::span))
    }

    #[must_use]
    pub fn count_of(&self, attribute: OnCallAttribute) -> usize {
        self.iter_of(attribute).count()
    }

    #[must_use]
    pub fn business_hours_dur(&self) -> TimeDelta {
        self.duration_of(OnCallAttribute::Business)
    }

    #[must_use]
    pub fn after_hours_dur(&self) -> TimeDelta {
        self.duration_of(OnCallAttribute::AfterHours)
    }

    #[must_use]
    pub fn weekend_dur(&self) -> TimeDelta {
        self.duration_of(OnCallAttribute::Weekend)
    }

    #[must_use]
    pub fn stat_dur(&self) -> TimeDelta {
        self.duration_of(OnCallAttribute::StatHoliday)
    }

    #[must_use]
    pub fn company_day_dur(&self) -> TimeDelta {
        self.duration_of(OnCallAttribute::CompanyDay)
    }

    /// The number of company day parts, a shift spanning two company days
    /// counts twice.
    #[must_use]
    pub fn company_day_count(&self) -> usize {
        self.count_of(OnCallAttribute::CompanyDay)
    }

    #[must_use]
    pub fn total_dur(&self) -> TimeDelta {
        total_duration(self.0.iter().map(AttributedSpan::span))
    }

    /// Returns the parts that overlap `span`, for example the breakdown of a
    /// single shift.
    pub fn overlapping<'a>(&'a self, span: &'a Span) -> impl Iterator<Item = &'a AttributedSpan> {
        self.0.iter().filter(move |attributed| {
            attributed.span().overlaps(span) || attributed.span() == span
        })
    }
}

impl Deref for AttributedSpans {
    type Target = [AttributedSpan];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<AttributedSpan> for AttributedSpans {
    fn from_iter<I: IntoIterator<Item = AttributedSpan>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<AttributedSpan> for AttributedSpans {
    fn extend<I: IntoIterator<Item = AttributedSpan>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for AttributedSpans {
    type Item = AttributedSpan;
    type IntoIter = std::vec::IntoIter<AttributedSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributedSpans {
    type Item = &'a AttributedSpan;
    type IntoIter = core::slice::Iter<'a, AttributedSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
