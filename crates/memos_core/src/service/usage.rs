//! Daily usage statistics behind the usage heat map.
//!
//! # Invariants
//! - The window spans `HEAT_MAP_WEEKS` weeks and ends on `today`; the last
//!   week is cut at today's weekday (Monday-first).
//! - Memos created outside the window are ignored.

use crate::model::memo::Memo;
use chrono::{Datelike, Days, NaiveDate, TimeZone};
use serde::Serialize;

pub const HEAT_MAP_WEEKS: u32 = 12;
pub const DAYS_PER_WEEK: u32 = 7;

/// Memo count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyUsageStat {
    pub date: NaiveDate,
    pub count: u32,
}

impl DailyUsageStat {
    pub fn level(&self) -> UsageLevel {
        UsageLevel::from_count(self.count)
    }
}

/// Intensity bucket used to shade one heat-map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    None,
    L1,
    L2,
    L3,
    L4,
}

impl UsageLevel {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1 => Self::L1,
            2 => Self::L2,
            3..=4 => Self::L3,
            _ => Self::L4,
        }
    }
}

/// Number of days covered by the heat map ending on `today`.
pub fn window_days(today: NaiveDate) -> u32 {
    (HEAT_MAP_WEEKS - 1) * DAYS_PER_WEEK + today.weekday().number_from_monday()
}

/// Blank cells after `today` that complete the current week row.
pub fn trailing_blank_days(today: NaiveDate) -> u32 {
    DAYS_PER_WEEK - today.weekday().number_from_monday()
}

/// Counts memos per day over the heat-map window, oldest day first.
///
/// Creation times are bucketed by their calendar date in `tz`.
pub fn daily_usage_stats<Tz: TimeZone>(
    memos: &[Memo],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DailyUsageStat> {
    let days = window_days(today);
    let Some(first_day) = today.checked_sub_days(Days::new(u64::from(days - 1))) else {
        return Vec::new();
    };

    let mut stats: Vec<DailyUsageStat> = first_day
        .iter_days()
        .take(days as usize)
        .map(|date| DailyUsageStat { date, count: 0 })
        .collect();

    for memo in memos {
        let date = memo.created_at.with_timezone(tz).date_naive();
        if date < first_day || date > today {
            continue;
        }
        let offset = date.signed_duration_since(first_day).num_days();
        if let Some(stat) = usize::try_from(offset)
            .ok()
            .and_then(|index| stats.get_mut(index))
        {
            stat.count += 1;
        }
    }

    stats
}
