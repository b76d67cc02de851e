//! Aggregation Domain Services

mod aggregator;

pub use aggregator::{
    aggregate_by_instrument, aggregate_by_trader, period_series, summarize, win_rate_matrix,
};
