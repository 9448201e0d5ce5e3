use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use crate::fx::model::{DerivedRateDB, RawQuoteDB};
use crate::schema::{derived_rates, raw_quotes};
use fxgrid_core::errors::{Error, Result};
use fxgrid_core::fx::{DerivedRate, RateRepositoryTrait};
use fxgrid_market_data::RawQuote;

/// Batch insert chunk size; keeps each statement well under the SQLite
/// bind-variable limit.
const INSERT_CHUNK_SIZE: usize = 1_000;

/// Append-only SQLite repository for raw observations and derived rates.
///
/// Every saved batch is a new set of rows; prior runs are never updated
/// or merged into.
#[derive(Clone)]
pub struct RateRepository {
    pool: Arc<DbPool>,
}

impl RateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateRepositoryTrait for RateRepository {
    async fn save_raw_quotes(&self, quotes: &[RawQuote]) -> Result<usize> {
        if quotes.is_empty() {
            return Ok(0);
        }

        let created_at = Utc::now();
        let rows: Vec<RawQuoteDB> = quotes
            .iter()
            .map(|q| RawQuoteDB::from_raw(q, created_at))
            .collect();
        let pool = Arc::clone(&self.pool);

        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            conn.immediate_transaction::<_, StorageError, _>(|conn| {
                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    inserted += diesel::insert_into(raw_quotes::table)
                        .values(chunk)
                        .execute(conn)?;
                }
                Ok(inserted)
            })
            .map_err(Error::from)
        })
        .await
        .map_err(|e| Error::Unexpected(e.to_string()))?
    }

    async fn save_derived_rates(&self, rates: &[DerivedRate]) -> Result<usize> {
        if rates.is_empty() {
            log::warn!("No derived rates to store");
            return Ok(0);
        }

        let created_at = Utc::now();
        let rows: Vec<DerivedRateDB> = rates
            .iter()
            .map(|r| DerivedRateDB::from_rate(r, created_at))
            .collect();
        let pool = Arc::clone(&self.pool);

        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            conn.immediate_transaction::<_, StorageError, _>(|conn| {
                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    inserted += diesel::insert_into(derived_rates::table)
                        .values(chunk)
                        .execute(conn)?;
                }
                Ok(inserted)
            })
            .map_err(Error::from)
        })
        .await
        .map_err(|e| Error::Unexpected(e.to_string()))?
    }

    fn get_latest_derived_rates(&self) -> Result<Vec<DerivedRate>> {
        let mut conn = get_connection(&self.pool)?;

        let latest_batch = derived_rates::table
            .select(diesel::dsl::max(derived_rates::derived_at))
            .first::<Option<String>>(&mut conn)
            .into_core()?;

        let Some(batch_ts) = latest_batch else {
            return Ok(Vec::new());
        };

        let rows = derived_rates::table
            .filter(derived_rates::derived_at.eq(batch_ts))
            .order_by((
                derived_rates::base_currency.asc(),
                derived_rates::quote_currency.asc(),
            ))
            .load::<DerivedRateDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(DerivedRate::from).collect())
    }
}
