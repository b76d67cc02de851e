//! Aggregator Domain Service
//!
//! Groups keep first-appearance order. Leaderboards are then stable-sorted by
//! win rate, descending, so ties keep their grouping order.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use crate::domain::aggregation::value_objects::{
    InstrumentStats, PerformanceStats, PerformanceSummary, PeriodGrouping, PeriodStats,
    TraderStats, WinRateMatrix,
};
use crate::domain::shared::{InstrumentSymbol, TraderName};
use crate::domain::trade_record::Trade;

/// Partition trades by key, keeping first-appearance order of the keys.
fn group_by<'a, K, F>(trades: &'a [Trade], key: F) -> Vec<(K, Vec<&'a Trade>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Trade) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Trade>)> = Vec::new();

    for trade in trades {
        let k = key(trade);
        if let Some(&i) = index.get(&k) {
            groups[i].1.push(trade);
        } else {
            index.insert(k.clone(), groups.len());
            groups.push((k, vec![trade]));
        }
    }
    groups
}

/// Compute stats per group and sort by win rate, descending.
fn rank<K>(groups: Vec<(K, Vec<&Trade>)>) -> Vec<(usize, K, PerformanceStats)> {
    let mut rows: Vec<(K, PerformanceStats)> = groups
        .into_iter()
        .map(|(key, trades)| (key, PerformanceStats::from_trades(trades)))
        .collect();
    rows.sort_by(|a, b| b.1.win_rate.cmp(&a.1.win_rate));

    rows.into_iter()
        .enumerate()
        .map(|(i, (key, stats))| (i + 1, key, stats))
        .collect()
}

/// Trader leaderboard.
#[must_use]
pub fn aggregate_by_trader(trades: &[Trade]) -> Vec<TraderStats> {
    rank(group_by(trades, |t| t.trader().clone()))
        .into_iter()
        .map(|(rank, trader, stats)| TraderStats {
            rank,
            trader,
            stats,
        })
        .collect()
}

/// Instrument breakdown, optionally restricted to one trader.
#[must_use]
pub fn aggregate_by_instrument(
    trades: &[Trade],
    trader: Option<&TraderName>,
) -> Vec<InstrumentStats> {
    let selected: Vec<Trade>;
    let trades = match trader {
        Some(trader) => {
            selected = trades
                .iter()
                .filter(|t| t.trader() == trader)
                .cloned()
                .collect();
            selected.as_slice()
        }
        None => trades,
    };

    rank(group_by(trades, |t| t.instrument().clone()))
        .into_iter()
        .map(|(rank, instrument, stats)| InstrumentStats {
            rank,
            instrument,
            stats,
        })
        .collect()
}

/// Overall summary of the journal.
#[must_use]
pub fn summarize(trades: &[Trade]) -> PerformanceSummary {
    let traders: HashSet<&TraderName> = trades.iter().map(Trade::trader).collect();
    let instruments: HashSet<&InstrumentSymbol> = trades.iter().map(Trade::instrument).collect();

    PerformanceSummary {
        stats: PerformanceStats::from_trades(trades),
        trader_count: traders.len(),
        instrument_count: instruments.len(),
    }
}

/// Instrument × trader win-rate matrix.
#[must_use]
pub fn win_rate_matrix(trades: &[Trade]) -> WinRateMatrix {
    let instruments: Vec<InstrumentSymbol> = group_by(trades, |t| t.instrument().clone())
        .into_iter()
        .map(|(instrument, _)| instrument)
        .collect();
    let traders: Vec<TraderName> = group_by(trades, |t| t.trader().clone())
        .into_iter()
        .map(|(trader, _)| trader)
        .collect();

    let pairs: HashMap<(InstrumentSymbol, TraderName), Vec<&Trade>> =
        group_by(trades, |t| (t.instrument().clone(), t.trader().clone()))
            .into_iter()
            .collect();

    let cells = instruments
        .iter()
        .map(|instrument| {
            traders
                .iter()
                .map(|trader| {
                    pairs
                        .get(&(instrument.clone(), trader.clone()))
                        .map(|group| PerformanceStats::from_trades(group.iter().copied()).win_rate)
                })
                .collect()
        })
        .collect();

    WinRateMatrix {
        instruments,
        traders,
        cells,
    }
}

/// Per-trader, per-period statistics.
///
/// Ordered by trader first appearance, then by ascending period.
#[must_use]
pub fn period_series(trades: &[Trade], grouping: PeriodGrouping) -> Vec<PeriodStats> {
    let mut series = Vec::new();

    for (trader, trader_trades) in group_by(trades, |t| t.trader().clone()) {
        let mut periods: BTreeMap<NaiveDate, Vec<&Trade>> = BTreeMap::new();
        for trade in trader_trades {
            periods
                .entry(grouping.period_start(trade.date()))
                .or_default()
                .push(trade);
        }

        series.extend(periods.into_iter().map(|(period_start, bucket)| PeriodStats {
            trader: trader.clone(),
            period_start,
            stats: PerformanceStats::from_trades(bucket),
        }));
    }
    series
}
