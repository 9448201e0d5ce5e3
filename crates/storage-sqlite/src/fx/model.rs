use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::{derived_rates, raw_quotes};
use fxgrid_core::fx::DerivedRate;
use fxgrid_market_data::RawQuote;

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = raw_quotes)]
pub struct RawQuoteDB {
    pub id: String,
    pub symbol: String,
    pub price: String,
    pub scraped_at: String,
    pub created_at: String,
}

impl RawQuoteDB {
    /// Builds a storable row from a scraped record. The symbol and price
    /// text are preserved verbatim for auditability of later derivations.
    pub fn from_raw(quote: &RawQuote, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            symbol: quote.symbol.clone(),
            price: quote.price.clone(),
            scraped_at: quote.scraped_at.to_rfc3339(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = derived_rates)]
pub struct DerivedRateDB {
    pub id: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub price: f64,
    pub derived_at: String,
    pub created_at: String,
}

impl DerivedRateDB {
    pub fn from_rate(rate: &DerivedRate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            base_currency: rate.base.clone(),
            quote_currency: rate.quote.clone(),
            price: rate.price,
            derived_at: rate.derived_at.to_rfc3339(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<DerivedRateDB> for DerivedRate {
    fn from(row: DerivedRateDB) -> Self {
        let derived_at = DateTime::parse_from_rfc3339(&row.derived_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        DerivedRate {
            base: row.base_currency,
            quote: row.quote_currency,
            price: row.price,
            derived_at,
        }
    }
}
