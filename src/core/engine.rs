use crate::core::render;
use crate::core::Pipeline;
use crate::utils::error::Result;

/// Outcome of a completed run: where the result set was saved and the
/// rendered table to show the user.
#[derive(Debug)]
pub struct RunReport {
    pub output_path: String,
    pub table: String,
}

pub struct LookupEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LookupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the full lookup. Nothing is persisted or rendered unless every
    /// fetch step succeeded.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Calculating..");
        let targets = self.pipeline.extract().await?;
        tracing::debug!("Expanded {} lookup targets", targets.len());

        tracing::info!("Looking up prices..");
        let results = self.pipeline.transform(targets).await?;

        let table = render::table(&results);
        let output_path = self.pipeline.load(results).await?;

        Ok(RunReport { output_path, table })
    }
}
