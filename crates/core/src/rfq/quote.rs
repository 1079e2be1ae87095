use super::ticker::Ticker;
use crate::domain::ChainId;
use ethers::types::{Address, U256, U512};
use serde::{Deserialize, Serialize};

/// A relayer's standing quote for one ticker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FastBridgeQuote {
    pub ticker: Ticker,

    /// Destination amount the relayer delivers for `max_origin_amount`
    pub dest_amount: U256,

    /// Largest origin amount the relayer accepts
    pub max_origin_amount: U256,

    /// Flat fee deducted from the origin amount
    pub fixed_fee: U256,

    pub relayer_addr: Address,

    /// Last update, as reported by the quoter API
    pub updated_at: String,
}

/// Destination amount a quote yields for `amount` of the origin token.
///
/// The relayer's rate is `dest_amount / max_origin_amount`, applied after the
/// fixed fee. Amounts the quote cannot serve yield zero.
pub fn apply_quote(quote: &FastBridgeQuote, amount: U256) -> U256 {
    if quote.max_origin_amount.is_zero() || amount > quote.max_origin_amount {
        return U256::zero();
    }
    if amount <= quote.fixed_fee {
        return U256::zero();
    }

    let amount_after_fee = amount - quote.fixed_fee;
    let amount_out =
        amount_after_fee.full_mul(quote.dest_amount) / U512::from(quote.max_origin_amount);
    // amount_after_fee <= max_origin_amount, so the result fits below dest_amount
    U256::try_from(amount_out).unwrap_or(quote.dest_amount)
}

/// Best destination amount across all quotes for `ticker`
pub fn best_amount_out(quotes: &[FastBridgeQuote], ticker: &Ticker, amount: U256) -> U256 {
    quotes
        .iter()
        .filter(|quote| quote.ticker == *ticker)
        .map(|quote| apply_quote(quote, amount))
        .max()
        .unwrap_or_default()
}

/// Distinct tickers quoted between two chains, in first-seen order
pub fn tickers_from_quotes(
    quotes: &[FastBridgeQuote],
    origin_chain_id: ChainId,
    dest_chain_id: ChainId,
) -> Vec<Ticker> {
    let mut tickers: Vec<Ticker> = Vec::new();
    for quote in quotes {
        let ticker = quote.ticker;
        if ticker.origin_token.chain_id != origin_chain_id
            || ticker.dest_token.chain_id != dest_chain_id
        {
            continue;
        }
        if !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }
    tickers
}
