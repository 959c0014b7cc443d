//! Publishing against a mock Server
//!
//! The client runs with a small upload policy (64 KiB threshold, 5 KiB
//! chunks) so both the single-request path and the chunked path can be
//! exercised with small temporary files.

mod common;

use std::io::Write;
use std::path::Path;

use common::*;
use mockito::Matcher;
use serde_json::json;
use tableau_rest::api::common::ApiError;
use tableau_rest::api::requests::{PublishDatasourceRequest, PublishWorkbookRequest};
use tableau_rest::api::upload::{ContentKind, UploadPolicy};
use tableau_rest::api::TableauClient;
use tempfile::TempDir;

const KIB: usize = 1024;

fn small_policy() -> UploadPolicy {
    UploadPolicy {
        threshold: 64 * KIB as u64,
        chunk_size: 5 * KIB,
    }
}

async fn publishing_client(server: &mut mockito::ServerGuard) -> TableauClient {
    let sign_in = mock_sign_in(server).await;
    let client = client(server).with_upload_policy(small_policy());
    client.sign_in().await.unwrap();
    sign_in.assert_async().await;
    client
}

fn write_file(dir: &TempDir, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![b'x'; size]).unwrap();
    path
}

fn workbook(file: &Path) -> PublishWorkbookRequest {
    PublishWorkbookRequest {
        name: "Sales".into(),
        project_id: "proj-1".into(),
        file: file.to_path_buf(),
        overwrite: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_small_workbook_is_published_in_one_request() {
    let mut server = mockito::Server::new_async().await;
    let client = publishing_client(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "Sales.twbx", 30 * KIB);

    let initiate = server
        .mock("POST", site("/fileUploads").as_str())
        .expect(0)
        .create_async()
        .await;
    let publish = server
        .mock("POST", site("/workbooks").as_str())
        .match_header(AUTH_HEADER, TOKEN)
        .match_header("content-type", Matcher::Regex("^multipart/mixed; boundary=".into()))
        .match_query(Matcher::UrlEncoded("overwrite".into(), "true".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="request_payload""#.into()),
            Matcher::Regex(r#"name="tableau_workbook"; filename="Sales.twbx""#.into()),
            Matcher::Regex("Content-Type: application/octet-stream".into()),
            Matcher::Regex(r#""project":\{"id":"proj-1"\}"#.into()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"workbook": {"id": "wb-1", "name": "Sales"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let response = client.publish_workbook(&workbook(&file)).await.unwrap();

    publish.assert_async().await;
    initiate.assert_async().await;
    assert_eq!(response.json_value().unwrap()["workbook"]["id"], "wb-1");
}

#[tokio::test]
async fn test_file_name_cannot_add_part_headers() {
    let mut server = mockito::Server::new_async().await;
    let client = publishing_client(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "Sales\r\nX-Injected: yes\r\n.twbx", KIB);

    // The mock answers with the request body so the framing can be inspected.
    let publish = server
        .mock("POST", site("/workbooks").as_str())
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body_from_request(|request| {
            request.body().map(|body| body.to_vec()).unwrap_or_default()
        })
        .expect(1)
        .create_async()
        .await;

    let response = client.publish_workbook(&workbook(&file)).await.unwrap();
    publish.assert_async().await;

    let sent = response.text();
    assert!(sent.contains(r#"name="tableau_workbook""#));
    assert!(!sent.contains("\r\nX-Injected: yes\r\n"));
    assert!(client
        .last_request()
        .unwrap()
        .content_type
        .starts_with("multipart/mixed; boundary="));
}

#[tokio::test]
async fn test_large_workbook_goes_through_upload_session() {
    let mut server = mockito::Server::new_async().await;
    let client = publishing_client(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "Sales.twbx", 100 * KIB);

    let initiate = server
        .mock("POST", site("/fileUploads").as_str())
        .match_header(AUTH_HEADER, TOKEN)
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"fileUpload": {"uploadSessionId": "up-9", "fileSize": "0"}}).to_string())
        .expect(1)
        .create_async()
        .await;
    let append = server
        .mock("PUT", site("/fileUploads/up-9").as_str())
        .match_header("content-type", Matcher::Regex("^multipart/mixed; boundary=".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="request_payload""#.into()),
            Matcher::Regex(r#"name="tableau_file"; filename="file""#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"fileUpload": {"uploadSessionId": "up-9"}}).to_string())
        .expect(20)
        .create_async()
        .await;
    let publish = server
        .mock("POST", site("/workbooks").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("uploadSessionId".into(), "up-9".into()),
            Matcher::UrlEncoded("workbookType".into(), "twbx".into()),
            Matcher::UrlEncoded("overwrite".into(), "true".into()),
        ]))
        .match_body(Matcher::Regex(r#"name="request_payload""#.into()))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"workbook": {"id": "wb-2"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    client.publish_workbook(&workbook(&file)).await.unwrap();

    initiate.assert_async().await;
    append.assert_async().await;
    publish.assert_async().await;
}

#[tokio::test]
async fn test_failed_append_stops_the_upload() {
    let mut server = mockito::Server::new_async().await;
    let client = publishing_client(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "Orders.hyper", 80 * KIB);

    server
        .mock("POST", site("/fileUploads").as_str())
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"fileUpload": {"uploadSessionId": "up-3"}}).to_string())
        .create_async()
        .await;
    let append = server
        .mock("PUT", site("/fileUploads/up-3").as_str())
        .with_status(500)
        .with_body("disk full")
        .expect(1)
        .create_async()
        .await;
    let publish = server
        .mock("POST", site("/datasources").as_str())
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let request = PublishDatasourceRequest {
        name: "Orders".into(),
        project_id: "proj-1".into(),
        file: file.clone(),
        ..Default::default()
    };
    let error = client.publish_datasource(&request).await.unwrap_err();

    assert!(matches!(error, ApiError::ServerError { status: 500, .. }));
    append.assert_async().await;
    publish.assert_async().await;
}

#[tokio::test]
async fn test_upload_file_reports_progress() {
    let mut server = mockito::Server::new_async().await;
    let client = publishing_client(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "Prep.tflx", 12 * KIB);

    server
        .mock("POST", site("/fileUploads").as_str())
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"fileUpload": {"uploadSessionId": "up-5"}}).to_string())
        .create_async()
        .await;
    let append = server
        .mock("PUT", site("/fileUploads/up-5").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(3)
        .create_async()
        .await;

    let session = client.upload_file(&file, ContentKind::Flow).await.unwrap();

    append.assert_async().await;
    assert_eq!(session.session_id, "up-5");
    assert_eq!(session.extension, "tflx");
    assert_eq!(session.bytes_sent, 12 * KIB as u64);
    assert!(session.is_complete());
}

#[tokio::test]
async fn test_wrong_extension_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let client = publishing_client(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(&dir, "Sales.xlsx", KIB);

    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client.publish_workbook(&workbook(&file)).await.unwrap_err();
    assert!(matches!(error, ApiError::InvalidFileType { .. }));
    any.assert_async().await;
}
