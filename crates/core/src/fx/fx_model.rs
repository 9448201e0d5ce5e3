use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directly observed exchange rate, canonicalized so the reference
/// currency is the base.
///
/// Prices are double-precision; no rounding is applied anywhere in the
/// derivation path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservedQuote {
    pub base: String,
    pub quote: String,
    pub price: f64,
    pub observed_at: DateTime<Utc>,
}

/// A pairwise rate computed by triangulation through the reference
/// currency: `price = anchor[quote] / anchor[base]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedRate {
    pub base: String,
    pub quote: String,
    pub price: f64,
    pub derived_at: DateTime<Utc>,
}

/// Per-run accounting for one derivation pass.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivationCounts {
    /// Records that survived normalization.
    pub normalized: usize,
    /// Records dropped during normalization.
    pub malformed: usize,
    /// Ordered pairs enumerated over the currency universe.
    pub pairs_requested: usize,
    /// Pairs that resolved to a rate.
    pub derived: usize,
    /// Pairs skipped because base or quote had no reference anchor.
    pub missing_anchor: usize,
}

/// The output of one derivation run: an independent, timestamped snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DerivationReport {
    pub rates: Vec<DerivedRate>,
    pub counts: DerivationCounts,
}
