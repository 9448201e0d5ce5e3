//! Integration tests for the append-only rate repository, run against a
//! throwaway on-disk SQLite database.

use chrono::{TimeZone, Utc};
use fxgrid_core::fx::{DerivedRate, RateRepositoryTrait};
use fxgrid_market_data::RawQuote;
use fxgrid_storage_sqlite::{db, RateRepository};
use tempfile::tempdir;

fn derived(base: &str, quote: &str, price: f64, hour: u32) -> DerivedRate {
    DerivedRate {
        base: base.to_string(),
        quote: quote.to_string(),
        price,
        derived_at: Utc.with_ymd_and_hms(2026, 8, 6, hour, 0, 0).unwrap(),
    }
}

fn test_repository(dir: &tempfile::TempDir) -> RateRepository {
    let db_path = dir.path().join("fxgrid-test.db");
    let pool = db::init(db_path.to_str().unwrap()).unwrap();
    RateRepository::new(pool)
}

#[tokio::test]
async fn test_empty_batches_are_noops() {
    let dir = tempdir().unwrap();
    let repository = test_repository(&dir);

    assert_eq!(repository.save_raw_quotes(&[]).await.unwrap(), 0);
    assert_eq!(repository.save_derived_rates(&[]).await.unwrap(), 0);
    assert!(repository.get_latest_derived_rates().unwrap().is_empty());
}

#[tokio::test]
async fn test_raw_batch_is_stored_verbatim() {
    let dir = tempdir().unwrap();
    let repository = test_repository(&dir);

    let scraped_at = Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap();
    let quotes = vec![
        RawQuote::new("EURUSD", "1.0832", scraped_at),
        RawQuote::new("USDJPY", "154.32", scraped_at),
        RawQuote::new("not a pair", "n/a", scraped_at),
    ];

    // Malformed rows are still part of the audit trail.
    assert_eq!(repository.save_raw_quotes(&quotes).await.unwrap(), 3);
}

#[tokio::test]
async fn test_latest_derived_batch_wins() {
    let dir = tempdir().unwrap();
    let repository = test_repository(&dir);

    let first_run = vec![
        derived("USD", "EUR", 0.9, 8),
        derived("EUR", "USD", 1.0 / 0.9, 8),
    ];
    let second_run = vec![
        derived("USD", "EUR", 0.91, 16),
        derived("EUR", "USD", 1.0 / 0.91, 16),
        derived("USD", "GBP", 0.8, 16),
    ];

    assert_eq!(repository.save_derived_rates(&first_run).await.unwrap(), 2);
    assert_eq!(repository.save_derived_rates(&second_run).await.unwrap(), 3);

    // Only the most recent run's snapshot comes back; earlier batches
    // stay untouched in the table.
    let latest = repository.get_latest_derived_rates().unwrap();
    assert_eq!(latest.len(), 3);
    assert!(latest
        .iter()
        .all(|r| r.derived_at == second_run[0].derived_at));

    let eur = latest
        .iter()
        .find(|r| r.base == "USD" && r.quote == "EUR")
        .unwrap();
    assert_eq!(eur.price, 0.91);
}

#[tokio::test]
async fn test_same_pair_across_runs_is_appended_not_replaced() {
    let dir = tempdir().unwrap();
    let repository = test_repository(&dir);

    for hour in [8, 12, 16] {
        let batch = vec![derived("USD", "EUR", 0.9, hour)];
        assert_eq!(repository.save_derived_rates(&batch).await.unwrap(), 1);
    }

    let latest = repository.get_latest_derived_rates().unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(
        latest[0].derived_at,
        Utc.with_ymd_and_hms(2026, 8, 6, 16, 0, 0).unwrap()
    );
}
