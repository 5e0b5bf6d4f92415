//! The providers of the spans that make up each category of on-call time.
//!
//! Every source is computed once for a reporting period from an explicit
//! [`SourceConfig`] and is immutable afterwards.

use chrono_tz::Tz;

use crate::time::{OnCallAttribute, Period, Span};

mod after_hours;
mod business_hours;
mod company_days;
mod stat_holidays;
mod weekend;

pub use after_hours::*;
pub use business_hours::*;
pub use company_days::*;
pub use stat_holidays::*;
pub use weekend::*;

/// Anything that can tell which spans belong to a category.
pub trait CategorySource {
    /// The category the spans are attributed to.
    fn category(&self) -> OnCallAttribute;

    /// The spans of this category, ordered by their start.
    fn spans(&self) -> &[Span];
}

/// The settings every source is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceConfig {
    timezone: Tz,
    business_hours: BusinessHours,
    period: Period,
}

impl SourceConfig {
    #[must_use]
    pub const fn new(timezone: Tz, business_hours: BusinessHours, period: Period) -> Self {
        Self {
            timezone,
            business_hours,
            period,
        }
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    #[must_use]
    pub const fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }

    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }
}

/// The four category sources, which are consulted from the highest to the
/// lowest priority. Everything they do not claim is business hours.
#[derive(Debug, Clone, Default)]
pub struct CategorySources {
    company_days: CompanyDays,
    stat_holidays: StatHolidays,
    weekends: Weekends,
    after_hours: AfterHours,
}

impl CategorySources {
    #[must_use]
    pub fn new(
        company_days: CompanyDays,
        stat_holidays: StatHolidays,
        weekends: Weekends,
        after_hours: AfterHours,
    ) -> Self {
        Self {
            company_days,
            stat_holidays,
            weekends,
            after_hours,
        }
    }

    /// Builds the weekend and after-hours sources from `config`, the
    /// company days and holidays are supplied by the caller.
    #[must_use]
    pub fn for_period(
        config: &SourceConfig,
        company_days: CompanyDays,
        stat_holidays: StatHolidays,
    ) -> Self {
        Self::new(
            company_days,
            stat_holidays,
            Weekends::new(config),
            AfterHours::new(config),
        )
    }

    /// The sources ordered from the highest to the lowest priority.
    #[must_use]
    pub fn by_priority(&self) -> [&dyn CategorySource; 4] {
        [
            &self.company_days,
            &self.stat_holidays,
            &self.weekends,
            &self.after_hours,
        ]
    }

    #[must_use]
    pub const fn company_days(&self) -> &CompanyDays {
        &self.company_days
    }

    #[must_use]
    pub const fn stat_holidays(&self) -> &StatHolidays {
        &self.stat_holidays
    }

    #[must_use]
    pub const fn weekends(&self) -> &Weekends {
        &self.weekends
    }

    #[must_use]
    pub const fn after_hours(&self) -> &AfterHours {
        &self.after_hours
    }
}

macro_rules! impl_category_source {
    ( $( $source:ty => $category:expr ),+ $(,)? ) => {
        $(
            impl CategorySource for $source {
                fn category(&self) -> OnCallAttribute {
                    $category
                }

                fn spans(&self) -> &[Span] {
                    &self.spans
                }
            }

            impl $source {
                /// Creates the source from already computed spans.
                #[must_use]
                pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
                    Self {
                        spans: crate::time::deduplicate(spans),
                    }
                }
            }
        )+
    };
}

impl_category_source! {
    CompanyDays => OnCallAttribute::CompanyDay,
    StatHolidays => OnCallAttribute::StatHoliday,
    Weekends => OnCallAttribute::Weekend,
    AfterHours => OnCallAttribute::AfterHours,
}
