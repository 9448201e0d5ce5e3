use chrono::Utc;
use fxgrid_market_data::RawQuote;

use super::fx_errors::FxError;
use super::fx_model::{DerivationCounts, DerivationReport, DerivedRate};
use super::normalizer::normalize_quote;
use super::pairs::{currency_universe, enumerate_pairs};
use super::resolver::AnchorIndex;

/// Derives the full pairwise rate set from one observed-quote batch.
///
/// Single synchronous pass: normalize -> index -> enumerate -> resolve ->
/// report. Malformed records and unresolvable pairs are counted and
/// dropped; only an empty batch or an unusable reference code aborts the
/// run. The function performs no I/O and never mutates its input; each
/// call produces an independent, timestamped snapshot.
pub fn derive_rates(
    quotes: &[RawQuote],
    reference_currency: &str,
) -> Result<DerivationReport, FxError> {
    if quotes.is_empty() {
        return Err(FxError::EmptyInput);
    }

    let reference = reference_currency.trim().to_ascii_uppercase();
    if reference.len() != 3 || !reference.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FxError::InvalidCurrencyCode(reference_currency.to_string()));
    }

    let mut counts = DerivationCounts::default();

    let mut normalized = Vec::with_capacity(quotes.len());
    for record in quotes {
        match normalize_quote(record, &reference) {
            Ok(quote) => normalized.push(quote),
            Err(err) => {
                counts.malformed += 1;
                log::warn!("Dropping malformed quote {:?}: {}", record.symbol, err);
            }
        }
    }
    counts.normalized = normalized.len();

    let index = AnchorIndex::build(&normalized, &reference);
    let universe = currency_universe(&normalized, &reference);
    let pairs = enumerate_pairs(&universe);
    counts.pairs_requested = pairs.len();

    let derived_at = Utc::now();
    let mut rates = Vec::with_capacity(pairs.len());
    for (base, quote) in pairs {
        match index.resolve(&base, &quote) {
            Ok(price) => rates.push(DerivedRate {
                base,
                quote,
                price,
                derived_at,
            }),
            Err(missing) => {
                counts.missing_anchor += 1;
                log::debug!("Skipping pair {}/{}: {}", base, quote, missing);
            }
        }
    }
    counts.derived = rates.len();

    Ok(DerivationReport { rates, counts })
}
