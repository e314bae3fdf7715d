use crate::domain::model::{LookupResult, LookupTarget};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// An open browsing context. The handle owns the loaded page body; dropping
/// it releases the page.
#[derive(Debug)]
pub struct TabHandle {
    pub url: String,
    pub body: String,
}

/// Browsing-context collaborator. The pipeline keeps at most one tab open at
/// a time: `close_tab` for identifier k completes before `open_tab` for k+1.
#[async_trait]
pub trait TabDriver: Send + Sync {
    /// Open the URL in a fresh context and return once the page has loaded.
    async fn open_tab(&self, url: &str) -> Result<TabHandle>;

    /// Run the extractor against the loaded page and return its values.
    async fn run_extractor(&self, tab: &TabHandle) -> Result<Map<String, Value>>;

    async fn close_tab(&self, tab: TabHandle) -> Result<()>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn raw_ids(&self) -> &str;
    fn catalog_base_url(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn export_csv(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<LookupTarget>>;
    async fn transform(&self, targets: Vec<LookupTarget>) -> Result<Vec<LookupResult>>;
    async fn load(&self, results: Vec<LookupResult>) -> Result<String>;
}
