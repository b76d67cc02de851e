//! Market data symbol normalisation.

/// Currency and metal codes that form slash-separated pairs.
const PAIR_CODES: &[&str] = &[
    "AUD", "BTC", "CAD", "CHF", "ETH", "EUR", "GBP", "JPY", "NZD", "USD", "XAG", "XAU",
];

/// Convert a journal symbol to the market data form.
///
/// Six-letter symbols made of two known codes become `BASE/QUOTE`
/// (`EURUSD` to `EUR/USD`). Anything else is upper-cased and kept as is.
#[must_use]
pub fn normalize_symbol(symbol: &str) -> String {
    let symbol = symbol.trim().to_uppercase();
    if symbol.len() == 6 && symbol.is_ascii() {
        let (base, quote) = symbol.split_at(3);
        if PAIR_CODES.contains(&base) && PAIR_CODES.contains(&quote) {
            return format!("{base}/{quote}");
        }
    }
    symbol
}
