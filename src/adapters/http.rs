use crate::domain::ports::{TabDriver, TabHandle};
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use std::time::Duration;

const USER_AGENT: &str = concat!("figprice/", env!("CARGO_PKG_VERSION"));

/// Drives catalog pages over plain HTTP: opening a tab fetches the page
/// body, the extractor reads the document title out of it.
pub struct HttpTabDriver {
    client: reqwest::Client,
}

impl HttpTabDriver {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TabDriver for HttpTabDriver {
    async fn open_tab(&self, url: &str) -> Result<TabHandle> {
        tracing::debug!("Opening tab for {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        Ok(TabHandle {
            url: url.to_string(),
            body,
        })
    }

    async fn run_extractor(&self, tab: &TabHandle) -> Result<Map<String, Value>> {
        let document = Html::parse_document(&tab.body);
        let title_selector = Selector::parse("title").map_err(|_| FinderError::Scrape {
            url: tab.url.clone(),
        })?;

        let title = document
            .select(&title_selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
            .ok_or_else(|| FinderError::Scrape {
                url: tab.url.clone(),
            })?;

        let mut values = Map::new();
        values.insert("title".to_string(), Value::String(title));
        Ok(values)
    }

    async fn close_tab(&self, _tab: TabHandle) -> Result<()> {
        // Dropping the handle frees the page body; nothing to tear down on
        // the HTTP side.
        Ok(())
    }
}
