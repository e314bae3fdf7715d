use anyhow::Result;
use clap::Parser;
use figprice::{
    CliConfig, FinderError, HttpTabDriver, LocalStorage, LookupEngine, PriceLookupPipeline,
    RunReport,
};
use httpmock::prelude::*;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn config_for(server: &MockServer, out_dir: &Path, ids: &str, extra: &[&str]) -> CliConfig {
    let mut args = vec![
        "figprice".to_string(),
        ids.to_string(),
        "--base-url".to_string(),
        server.base_url(),
        "--output-path".to_string(),
        out_dir.to_string_lossy().into_owned(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    CliConfig::parse_from(args)
}

async fn run(config: CliConfig) -> figprice::Result<RunReport> {
    let driver = HttpTabDriver::new(Duration::from_secs(5))?;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PriceLookupPipeline::new(driver, storage, config);
    LookupEngine::new(pipeline).run().await
}

fn mock_page<'a>(server: &'a MockServer, id: &str, title: &str) -> httpmock::Mock<'a> {
    let body = format!("<html><head><title>{title}</title></head><body></body></html>");
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v2/catalog/catalogitem.page")
            .query_param("M", id);
        then.status(200)
            .header("Content-Type", "text/html")
            .body(body);
    })
}

#[tokio::test]
async fn test_full_run_saves_results_and_renders_table() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    let first = mock_page(&server, "col1", "col1 : Mime");
    let second = mock_page(&server, "col002", "col002 : Spaceman");
    let third = mock_page(&server, "col003", "col003 : Nurse");

    let config = config_for(&server, temp_dir.path(), "col1, col002...col003", &[]);
    let report = run(config).await?;

    first.assert();
    second.assert();
    third.assert();

    assert!(report.table.contains("col1 : Mime"));
    assert!(report.table.contains("col003 : Nurse"));

    let saved = std::fs::read(temp_dir.path().join("savedData.json"))?;
    let results: Vec<serde_json::Value> = serde_json::from_slice(&saved)?;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["id"], "col1");
    assert_eq!(results[1]["id"], "col002");
    assert_eq!(results[1]["title"], "col002 : Spaceman");
    assert_eq!(results[2]["id"], "col003");

    Ok(())
}

#[tokio::test]
async fn test_second_run_overwrites_saved_results() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    mock_page(&server, "col1", "col1 : Mime");
    mock_page(&server, "elf001", "elf001 : Castle Elf");

    run(config_for(&server, temp_dir.path(), "col1", &[])).await?;
    run(config_for(&server, temp_dir.path(), "elf001", &[])).await?;

    let saved = std::fs::read(temp_dir.path().join("savedData.json"))?;
    let results: Vec<serde_json::Value> = serde_json::from_slice(&saved)?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "elf001");

    Ok(())
}

#[tokio::test]
async fn test_failing_page_aborts_run_and_persists_nothing() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    mock_page(&server, "col1", "col1 : Mime");
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/catalog/catalogitem.page")
            .query_param("M", "col2");
        then.status(500);
    });
    let third = mock_page(&server, "col3", "col3 : Nurse");

    let err = run(config_for(&server, temp_dir.path(), "col1,col2,col3", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, FinderError::Request(_)));
    assert!(!temp_dir.path().join("savedData.json").exists());
    third.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn test_malformed_range_fails_before_any_request() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    let page = mock_page(&server, "col1", "col1 : Mime");

    let err = run(config_for(&server, temp_dir.path(), "col1, col...col3", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, FinderError::MalformedRange { .. }));
    page.assert_hits(0);
    assert!(!temp_dir.path().join("savedData.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_empty_input_fails_without_side_effects() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    let err = run(config_for(&server, temp_dir.path(), "  ", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, FinderError::EmptyInput));
    assert!(!temp_dir.path().join("savedData.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_export_csv_writes_csv_next_to_json() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    mock_page(&server, "col1", "col1 : Mime");

    run(config_for(&server, temp_dir.path(), "col1", &["--export-csv"])).await?;

    let csv = std::fs::read_to_string(temp_dir.path().join("results.csv"))?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,title"));
    assert_eq!(lines.next(), Some("col1,col1 : Mime"));
    assert!(temp_dir.path().join("savedData.json").exists());

    Ok(())
}
