use flacsync_e2e_tests::{FixtureRecord, catalog_xml, test_config};
use flacsync_lib::catalog::Catalog;
use flacsync_lib::download::{Downloader, FetchOutcome};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CELLO: &[u8] = b"flac bytes for the cello suite";

#[tokio::test]
async fn test_fetch_twice_performs_one_network_call() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mock_server = MockServer::start().await;
    let config = test_config(temp_dir.path(), &mock_server.uri());

    let xml = catalog_xml(&[FixtureRecord::with_content("Bach/cello.flac", CELLO)]);
    let catalog = Catalog::from_xml(&xml, &config).expect("Failed to parse catalog fixture");
    let entry = catalog.into_entries().next().expect("Missing entry");

    Mock::given(method("GET"))
        .and(path("/Bach/cello.flac"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(CELLO))
        .expect(1)
        .mount(&mock_server)
        .await;

    let downloader = Downloader::new();
    downloader.ensure_author_dir(&entry).await.unwrap();

    let first = downloader.fetch(&entry).await.unwrap();
    assert_eq!(first, FetchOutcome::Verified);

    // The file is now valid, so the second call is a no-op skip.
    let second = downloader.fetch(&entry).await.unwrap();
    assert_eq!(second, FetchOutcome::AlreadyValid);
}

#[tokio::test]
async fn test_fetch_returns_mismatch_with_both_digests() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mock_server = MockServer::start().await;
    let config = test_config(temp_dir.path(), &mock_server.uri());

    let xml = catalog_xml(&[FixtureRecord::with_content("Bach/cello.flac", CELLO)]);
    let catalog = Catalog::from_xml(&xml, &config).expect("Failed to parse catalog fixture");
    let entry = catalog.into_entries().next().expect("Missing entry");
    let declared = entry.checksum.clone().unwrap();

    Mock::given(method("GET"))
        .and(path("/Bach/cello.flac"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(&b"wrong bytes"[..]))
        .mount(&mock_server)
        .await;

    let downloader = Downloader::new();
    downloader.ensure_author_dir(&entry).await.unwrap();

    match downloader.fetch(&entry).await.unwrap() {
        FetchOutcome::Mismatch { expected, actual } => {
            assert_eq!(expected, declared);
            assert_eq!(actual, flacsync_e2e_tests::md5_of(b"wrong bytes"));
        }
        other => panic!("Expected a mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_maps_http_status_to_transfer_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mock_server = MockServer::start().await;
    let config = test_config(temp_dir.path(), &mock_server.uri());

    let xml = catalog_xml(&[FixtureRecord::with_content("Bach/cello.flac", CELLO)]);
    let catalog = Catalog::from_xml(&xml, &config).expect("Failed to parse catalog fixture");
    let entry = catalog.into_entries().next().expect("Missing entry");

    Mock::given(method("GET"))
        .and(path("/Bach/cello.flac"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let downloader = Downloader::new();
    downloader.ensure_author_dir(&entry).await.unwrap();

    let err = downloader.fetch(&entry).await.unwrap_err();
    assert!(matches!(
        err,
        flacsync_lib::error::FlacSyncError::Transfer { .. }
    ));
    // Nothing was written for the failed entry.
    assert!(!entry.local_item_path.exists());
}
