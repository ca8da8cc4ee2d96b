//! Participation aggregates for the "about me", individual, and club pages.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::types::DbId;

/// Number of recent participations listed on the "about me" page.
pub const RECENT_PARTICIPATION_LIMIT: i64 = 10;

/// The countable part of one event participation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoutRecord {
    pub wins: i32,
    pub losses: i32,
    pub touches_scored: i32,
    pub touches_received: i32,
}

/// Totals over a set of participations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FencerTotals {
    pub events: i64,
    pub wins: i64,
    pub losses: i64,
    pub touches_scored: i64,
    pub touches_received: i64,
    /// `touches_scored - touches_received` (the fencing "indicator").
    pub touch_difference: i64,
    /// Percentage of won bouts, rounded to one decimal; `0.0` without bouts.
    pub win_rate: f64,
}

impl FencerTotals {
    /// Sum a sequence of bout records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = BoutRecord>,
    {
        let mut totals = Self::default();
        for r in records {
            totals.events += 1;
            totals.wins += i64::from(r.wins);
            totals.losses += i64::from(r.losses);
            totals.touches_scored += i64::from(r.touches_scored);
            totals.touches_received += i64::from(r.touches_received);
        }
        totals.touch_difference = totals.touches_scored - totals.touches_received;
        totals.win_rate = win_rate(totals.wins, totals.losses);
        totals
    }
}

/// `wins / (wins + losses) * 100`, rounded to one decimal place.
///
/// Rounding works on the exact binary value of the rate and sends exact
/// halves to the even digit, so 1 win in 16 bouts (6.25) gives 6.2.
pub fn win_rate(wins: i64, losses: i64) -> f64 {
    let bouts = wins + losses;
    if bouts <= 0 {
        return 0.0;
    }
    let rate = wins as f64 / bouts as f64 * 100.0;
    Decimal::from_f64_retain(rate)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(rate)
}

/// Per-fencer totals row for the club page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FencerSummary {
    pub fencer_id: DbId,
    #[serde(flatten)]
    pub totals: FencerTotals,
}

/// Group `(fencer_id, record)` pairs into per-fencer totals.
///
/// Fencers listed in `members` but without any record still get a zero row.
/// Rows are ordered by wins (desc), then win rate (desc), then fencer id.
pub fn summarize_by_fencer<I>(members: &[DbId], records: I) -> Vec<FencerSummary>
where
    I: IntoIterator<Item = (DbId, BoutRecord)>,
{
    let mut grouped: std::collections::BTreeMap<DbId, Vec<BoutRecord>> =
        members.iter().map(|id| (*id, Vec::new())).collect();
    for (fencer_id, record) in records {
        grouped.entry(fencer_id).or_default().push(record);
    }

    let mut rows: Vec<FencerSummary> = grouped
        .into_iter()
        .map(|(fencer_id, records)| FencerSummary {
            fencer_id,
            totals: FencerTotals::from_records(records),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.totals
            .wins
            .cmp(&a.totals.wins)
            .then(b.totals.win_rate.total_cmp(&a.totals.win_rate))
            .then(a.fencer_id.cmp(&b.fencer_id))
    });
    rows
}
