use crate::core::expand::expand;
use crate::core::render;
use crate::core::{ConfigProvider, LookupResult, LookupTarget, Pipeline, Storage, TabDriver};
use crate::utils::error::{FinderError, Result};

/// Fixed lookup options understood by the catalog site: in-stock listings,
/// new condition, default sort.
const LOOKUP_QUERY: &str = r#"#T=S&O={"ss":"IN","cond":"N","iconly":0}"#;

/// Build the catalog page URL for one identifier. The identifier is
/// substituted verbatim.
pub fn lookup_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/v2/catalog/catalogitem.page?M={id}{LOOKUP_QUERY}")
}

pub struct PriceLookupPipeline<D: TabDriver, S: Storage, C: ConfigProvider> {
    driver: D,
    storage: S,
    config: C,
}

impl<D: TabDriver, S: Storage, C: ConfigProvider> PriceLookupPipeline<D, S, C> {
    pub fn new(driver: D, storage: S, config: C) -> Self {
        Self {
            driver,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<D: TabDriver, S: Storage, C: ConfigProvider> Pipeline for PriceLookupPipeline<D, S, C> {
    async fn extract(&self) -> Result<Vec<LookupTarget>> {
        let raw = self.config.raw_ids().trim();
        if raw.is_empty() {
            return Err(FinderError::EmptyInput);
        }

        let ids = expand(raw)?;
        tracing::warn!("Generated list of minifigure IDs: {}", ids.join(", "));

        let base_url = self.config.catalog_base_url();
        Ok(ids
            .into_iter()
            .map(|id| {
                let url = lookup_url(base_url, &id);
                LookupTarget { id, url }
            })
            .collect())
    }

    async fn transform(&self, targets: Vec<LookupTarget>) -> Result<Vec<LookupResult>> {
        let mut results = Vec::with_capacity(targets.len());

        // Strictly sequential: one tab at a time, closed before the next
        // opens. Output order equals input order.
        for LookupTarget { id, url } in targets {
            let tab = self.driver.open_tab(&url).await?;
            let values = self.driver.run_extractor(&tab).await?;
            self.driver.close_tab(tab).await?;

            tracing::info!("{} done", id);
            results.push(LookupResult::new(id, values));
        }

        Ok(results)
    }

    async fn load(&self, results: Vec<LookupResult>) -> Result<String> {
        let path = format!("{}.json", self.config.storage_key());
        let json = serde_json::to_vec_pretty(&results)?;
        self.storage.write_file(&path, &json).await?;

        if self.config.export_csv() {
            let csv = render::to_csv(&results)?;
            self.storage.write_file("results.csv", &csv).await?;
        }

        tracing::debug!("Saved {} results to {}", results.len(), path);
        Ok(path)
    }
}
