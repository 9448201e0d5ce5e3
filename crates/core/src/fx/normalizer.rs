use fxgrid_market_data::RawQuote;

use super::fx_errors::MalformedQuote;
use super::fx_model::ObservedQuote;

/// Canonicalizes one raw record to reference-currency-as-base orientation.
///
/// The 6-character symbol splits into `(sym_base, sym_quote)`. When
/// `sym_base` is the reference currency the record is emitted unchanged;
/// otherwise the orientation is inverted (`1/price`, sides swapped).
/// `reference` must already be an uppercase 3-letter code.
pub fn normalize_quote(
    record: &RawQuote,
    reference: &str,
) -> Result<ObservedQuote, MalformedQuote> {
    let (sym_base, sym_quote) = split_pair_symbol(&record.symbol)?;
    let price = parse_price(&record.price)?;

    if sym_base == reference {
        Ok(ObservedQuote {
            base: sym_base,
            quote: sym_quote,
            price,
            observed_at: record.scraped_at,
        })
    } else {
        Ok(ObservedQuote {
            base: sym_quote,
            quote: sym_base,
            price: 1.0 / price,
            observed_at: record.scraped_at,
        })
    }
}

fn split_pair_symbol(symbol: &str) -> Result<(String, String), MalformedQuote> {
    let symbol = symbol.trim();
    if symbol.len() != 6 || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(MalformedQuote::InvalidSymbol(symbol.to_string()));
    }

    let base = symbol[..3].to_ascii_uppercase();
    let quote = symbol[3..].to_ascii_uppercase();
    if base == quote {
        // A self-pair cannot carry a meaningful rate.
        return Err(MalformedQuote::InvalidSymbol(symbol.to_string()));
    }

    Ok((base, quote))
}

fn parse_price(raw: &str) -> Result<f64, MalformedQuote> {
    // Price cells carry thousands separators ("1,234.5").
    let cleaned = raw.trim().replace(',', "");
    let price: f64 = cleaned
        .parse()
        .map_err(|_| MalformedQuote::InvalidPrice(raw.to_string()))?;

    if !price.is_finite() || price <= 0.0 {
        return Err(MalformedQuote::InvalidPrice(raw.to_string()));
    }

    Ok(price)
}
