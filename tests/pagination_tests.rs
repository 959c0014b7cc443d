//! Page-by-page listing against a mock Server

mod common;

use common::*;
use mockito::Matcher;
use tableau_rest::api::common::{extract_pages, ApiError, PageOptions, QueryParams};

#[tokio::test]
async fn test_limit_stops_after_third_page() {
    let mut server = mockito::Server::new_async().await;
    let client = signed_in_client(&mut server).await;

    let mut pages = Vec::new();
    for page in 1..=3 {
        let mock = server
            .mock("GET", site("/projects").as_str())
            .match_header(AUTH_HEADER, TOKEN)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("pageNumber".into(), page.to_string()),
                Matcher::UrlEncoded("pageSize".into(), "100".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body("projects", "project", page, 100, 1000).to_string())
            .expect(1)
            .create_async()
            .await;
        pages.push(mock);
    }
    let beyond = server
        .mock("GET", site("/projects").as_str())
        .match_query(Matcher::UrlEncoded("pageNumber".into(), "4".into()))
        .expect(0)
        .create_async()
        .await;

    let client = &client;
    let projects = extract_pages(
        |params| async move { client.query_projects(&params).await },
        PageOptions::new().with_page_size(100).with_limit(250),
    )
    .await
    .unwrap();

    for mock in &pages {
        mock.assert_async().await;
    }
    beyond.assert_async().await;
    assert_eq!(projects.len(), 250);
    assert_eq!(projects[0]["id"], "project-0");
    assert_eq!(projects[249]["id"], "project-249");
}

#[tokio::test]
async fn test_caller_filter_rides_along_every_page() {
    let mut server = mockito::Server::new_async().await;
    let client = signed_in_client(&mut server).await;

    for page in 1..=2 {
        server
            .mock("GET", site("/workbooks").as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("filter".into(), "projectName:eq:Finance".into()),
                Matcher::UrlEncoded("pageNumber".into(), page.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body("workbooks", "workbook", page, 10, 15).to_string())
            .expect(1)
            .create_async()
            .await;
    }

    let mut params = QueryParams::new();
    params.filter("projectName:eq:Finance");
    let client = &client;
    let workbooks = extract_pages(
        |params| async move { client.query_workbooks(&params).await },
        PageOptions::new().with_page_size(10).with_params(params),
    )
    .await
    .unwrap();

    assert_eq!(workbooks.len(), 15);
}

#[tokio::test]
async fn test_empty_listing() {
    let mut server = mockito::Server::new_async().await;
    let client = signed_in_client(&mut server).await;

    server
        .mock("GET", site("/users").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"pagination":{"pageNumber":"1","pageSize":"100","totalAvailable":"0"},"users":{}}"#)
        .create_async()
        .await;

    let client = &client;
    let users = extract_pages(
        |params| async move { client.query_users(&params).await },
        PageOptions::new(),
    )
    .await
    .unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_missing_pagination_block() {
    let mut server = mockito::Server::new_async().await;
    let client = signed_in_client(&mut server).await;

    server
        .mock("GET", site("/groups").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"groups":{"group":[]}}"#)
        .create_async()
        .await;

    let client = &client;
    let result = extract_pages(
        |params| async move { client.query_groups(&params).await },
        PageOptions::new(),
    )
    .await;
    assert!(matches!(result, Err(ApiError::PaginationError(_))));
}
