//! CentralCharts provider for reference-anchored forex quotes.
//!
//! Scrapes the public currency-pairs price list. Each table row carries a
//! symbol cell ending in a "EUR/USD"-style token and a price cell; rows
//! are shaped into [`RawQuote`] records without interpreting the price.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::RawQuote;
use crate::provider::QuoteProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "CENTRAL_CHARTS";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The site serves a placeholder page to clients without a browser
/// User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// CentralCharts price-list provider.
///
/// # Example
///
/// ```ignore
/// use fxgrid_market_data::provider::central_charts::CentralChartsProvider;
///
/// let provider = CentralChartsProvider::new("https://example.com/price-list");
/// ```
pub struct CentralChartsProvider {
    client: Client,
    url: String,
}

impl CentralChartsProvider {
    /// Create a provider for the given price-list URL.
    ///
    /// The URL is an explicit value; the provider reads no ambient
    /// configuration.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuoteProvider for CentralChartsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quotes(&self) -> Result<Vec<RawQuote>, MarketDataError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Unexpected status {} from {}", status, self.url),
            });
        }

        let body = response.text().await?;
        let quotes = parse_quote_table(&body);

        if quotes.is_empty() {
            return Err(MarketDataError::NoData {
                provider: PROVIDER_ID.to_string(),
            });
        }

        log::debug!("Parsed {} quote rows from {}", quotes.len(), self.url);
        Ok(quotes)
    }
}

/// Extracts quote rows from the price-list markup. Rows without at least
/// a symbol cell and a price cell are skipped.
fn parse_quote_table(html: &str) -> Vec<RawQuote> {
    let row_selector =
        Selector::parse("table.tabMini.tabQuotes tbody tr").expect("static selector");
    let cell_selector = Selector::parse("td").expect("static selector");

    let document = Html::parse_document(html);
    let scraped_at = Utc::now();

    let mut quotes = Vec::new();
    for row in document.select(&row_selector) {
        let mut cells = row.select(&cell_selector);
        let (Some(symbol_cell), Some(price_cell)) = (cells.next(), cells.next()) else {
            continue;
        };

        let symbol = concat_pair_symbol(&cell_text(symbol_cell));
        let price = cell_text(price_cell);
        if symbol.is_empty() || price.is_empty() {
            continue;
        }

        quotes.push(RawQuote::new(symbol, price, scraped_at));
    }

    quotes
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Collapses the trailing "EUR/USD" token of a symbol cell into the
/// 6-character wire form. Cells without that shape pass through verbatim
/// so downstream normalization can account for them.
fn concat_pair_symbol(cell: &str) -> String {
    let text = cell.trim();
    let tail = match text.char_indices().rev().nth(6) {
        Some((i, _)) => &text[i..],
        None => text,
    };
    match tail.split_once('/') {
        Some((base, quote)) if base.len() == 3 && quote.len() == 3 => {
            format!("{}{}", base, quote)
        }
        _ => text.to_string(),
    }
}
