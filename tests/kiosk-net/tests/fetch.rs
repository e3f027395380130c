//! Fetch behavior of the reqwest-backed document fetcher

use kiosk_net::Provider;
use kiosk_traits::net::{DocumentFetcher, Url};
use kiosk_traits::LoadErrorKind;
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_returns_the_document_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
        .mount(&server)
        .await;

    let provider = Provider::new();
    let url = Url::parse(&format!("{}/app", server.uri())).unwrap();

    let (final_url, bytes) = provider.fetch_async(url).await.unwrap();
    assert_eq!(final_url.path(), "/app");
    assert_eq!(&bytes[..], b"<html>hello</html>");
}

/// A served error page is a successful navigation. Only transport failures
/// count as load errors, so a 500 must come back as `Ok` with the page body.
#[tokio::test]
async fn http_error_status_is_still_a_served_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>server error</html>"))
        .mount(&server)
        .await;

    let provider = Provider::new();
    let url = Url::parse(&format!("{}/broken", server.uri())).unwrap();

    let (_, bytes) = provider.fetch_async(url).await.unwrap();
    assert_eq!(&bytes[..], b"<html>server error</html>");
}

#[tokio::test]
async fn redirects_resolve_to_the_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let provider = Provider::new();
    let url = Url::parse(&format!("{}/old", server.uri())).unwrap();

    let (final_url, bytes) = provider.fetch_async(url).await.unwrap();
    assert_eq!(final_url.path(), "/new");
    assert_eq!(&bytes[..], b"moved");
}

#[tokio::test]
async fn connection_refused_classifies_as_connect() {
    // Grab a free port, then drop the listener so nothing accepts on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let provider = Provider::new();
    let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

    let err = provider.fetch_async(url.clone()).await.unwrap_err();
    let load_err = err.to_load_error(&url);
    assert_eq!(load_err.kind, LoadErrorKind::Connect);
    assert_eq!(load_err.code(), -6);
    assert_eq!(load_err.url, url);
}

/// The callback path delivers the same classification the async path does,
/// with the originally requested URL attached to the error.
#[tokio::test]
async fn callback_delivers_classified_load_errors() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let provider = Provider::new();
    let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

    let (tx, rx) = oneshot::channel();
    provider.fetch_with_callback(
        url.clone(),
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    let result = rx.await.unwrap();
    let load_err = result.unwrap_err();
    assert_eq!(load_err.kind, LoadErrorKind::Connect);
    assert_eq!(load_err.url, url);
}

#[tokio::test]
async fn callback_reports_the_final_url_and_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let provider = Provider::new();
    let url = Url::parse(&format!("{}/app", server.uri())).unwrap();

    let (tx, rx) = oneshot::channel();
    provider.fetch_with_callback(
        url,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    let (final_url, bytes) = rx.await.unwrap().unwrap();
    assert_eq!(final_url.path(), "/app");
    assert_eq!(&bytes[..], b"<html>ok</html>");
}
