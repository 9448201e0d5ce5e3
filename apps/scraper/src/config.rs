/// The USD currency-pairs price list scraped by default.
const DEFAULT_SOURCE_URL: &str = "https://www.centralcharts.com/en/price-list-ranking/ALL/asc/ts_507-usd-currency-pairs--qc_1-alphabetical-order";

pub struct Config {
    pub db_path: String,
    pub reference_currency: String,
    pub source_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_path = std::env::var("FXGRID_DB_PATH").unwrap_or_else(|_| "./db/fxgrid.db".into());
        let reference_currency =
            std::env::var("FXGRID_REFERENCE_CURRENCY").unwrap_or_else(|_| "USD".into());
        let source_url =
            std::env::var("FXGRID_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.into());
        Self {
            db_path,
            reference_currency,
            source_url,
        }
    }
}
