//! Command tests against a temp SQLite database and a mock media endpoint

use ingest_cli::commands::{bulk_import, list_track_types};
use ingest_cli::{AppError, BulkImportArgs, IngestConfig};
use ingest_core::types::CreateTrackType;
use ingest_importer::ImportError;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Fixture {
    config: IngestConfig,
    media_dir: PathBuf,
    _temp_dir: TempDir,
}

impl Fixture {
    fn new(server: &MockServer) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = IngestConfig::default();
        config.api.url = server.uri();
        config.api.key = "secret-key".to_string();
        config.storage.database_url =
            format!("sqlite://{}", temp_dir.path().join("ingest.db").display());

        let media_dir = temp_dir.path().join("media");
        std::fs::create_dir_all(media_dir.join("album")).unwrap();
        std::fs::write(media_dir.join("album/track.mp3"), b"first track").unwrap();
        std::fs::write(media_dir.join("album/cover.jpg"), b"not audio").unwrap();

        Self {
            config,
            media_dir,
            _temp_dir: temp_dir,
        }
    }

    async fn add_track_type(&self, code: &str) {
        let pool = ingest_storage::create_pool(&self.config.storage.database_url)
            .await
            .unwrap();
        ingest_storage::run_migrations(&pool).await.unwrap();
        ingest_storage::track_types::create(
            &pool,
            CreateTrackType {
                code: code.to_string(),
                type_name: "Music".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
        pool.close().await;
    }

    fn args(&self, track_type: &str) -> BulkImportArgs {
        BulkImportArgs {
            path: self.media_dir.clone(),
            track_type: Some(track_type.to_string()),
            ..Default::default()
        }
    }
}

#[tokio::test]
async fn test_bulk_import_uploads_matching_files() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/media"))
        .and(header("cookie", "tt_upload=MUS"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(&server);
    fixture.add_track_type("MUS").await;

    let summary = bulk_import(&fixture.config, &fixture.args("MUS"))
        .await
        .unwrap();

    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.uploaded, 1);
    assert!(fixture.media_dir.join("album/track.mp3").exists());
}

#[tokio::test]
async fn test_bulk_import_cli_extensions_override_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/media"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(&server);
    fixture.add_track_type("MUS").await;

    let args = BulkImportArgs {
        allowed_extensions: vec![".jpg".to_string()],
        delete_after_upload: true,
        ..fixture.args("MUS")
    };
    let summary = bulk_import(&fixture.config, &args).await.unwrap();

    assert_eq!(summary.uploaded, 1);
    assert_eq!(summary.deleted, 1);
    assert!(!fixture.media_dir.join("album/cover.jpg").exists());
    assert!(fixture.media_dir.join("album/track.mp3").exists());
}

#[tokio::test]
async fn test_bulk_import_unknown_track_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fixture = Fixture::new(&server);

    let err = bulk_import(&fixture.config, &fixture.args("NOPE"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "provided track type NOPE does not exist");
    assert!(matches!(
        err,
        AppError::Import(ImportError::TrackTypeNotFound(_))
    ));
}

#[tokio::test]
async fn test_bulk_import_empty_track_type_uploads_untagged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header_exists("cookie"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/media"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(&server);

    let summary = bulk_import(&fixture.config, &fixture.args(""))
        .await
        .unwrap();

    assert_eq!(summary.uploaded, 1);
}

#[tokio::test]
async fn test_bulk_import_requires_api_key() {
    let server = MockServer::start().await;
    let mut fixture = Fixture::new(&server);
    fixture.config.api.key = String::new();

    let err = bulk_import(&fixture.config, &fixture.args("MUS"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
}

#[tokio::test]
async fn test_list_track_types() {
    let server = MockServer::start().await;
    let fixture = Fixture::new(&server);
    fixture.add_track_type("MUS").await;
    fixture.add_track_type("JIN").await;

    let codes: Vec<String> = list_track_types(&fixture.config)
        .await
        .unwrap()
        .into_iter()
        .map(|track_type| track_type.code)
        .collect();

    assert_eq!(codes.len(), 2);
    assert!(codes.contains(&"MUS".to_string()));
    assert!(codes.contains(&"JIN".to_string()));
}

#[test]
fn test_load_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("ingest.toml");
    std::fs::write(
        &config_path,
        r#"
[api]
url = "https://radio.example.com"
key = "from-file"

[import]
allowed_extensions = [".flac"]
"#,
    )
    .unwrap();

    let config = IngestConfig::load(Some(&config_path)).unwrap();

    assert_eq!(config.api.url, "https://radio.example.com");
    assert_eq!(config.api.key, "from-file");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.import.allowed_extensions, vec![".flac".to_string()]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_missing_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = IngestConfig::load(Some(&temp_dir.path().join("missing.toml")));

    assert!(matches!(result, Err(AppError::Config(_))));
}
