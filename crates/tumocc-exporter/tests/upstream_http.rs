//! HTTP fetcher against a mock backend.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tumocc_core::{ErrorKind, Target};
use tumocc_exporter::upstream::{HttpFetcher, OccupancySource};

const BACKEND_PATH: &str = "/backend/FrontController.php";

fn fetcher(server: &MockServer, timeout: Duration) -> HttpFetcher {
    HttpFetcher::new(
        format!("{}{}", server.uri(), BACKEND_PATH),
        "loadGraphiteData",
        timeout,
    )
    .unwrap()
}

fn stammgelaende() -> Target {
    Target::new("Stammgelaende", "Stammgelände")
}

#[tokio::test]
async fn posts_json_inside_urlencoded_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BACKEND_PATH))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "loadGraphiteData=%7B%22location%22%3A%22Stammgelaende%22%7D",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"usage": 73}"#))
        .expect(1)
        .mount(&server)
        .await;

    let reading = fetcher(&server, Duration::from_secs(10))
        .fetch(&stammgelaende())
        .await
        .unwrap();
    assert_eq!(reading.label, "Stammgelände");
    assert_eq!(reading.usage, 73.0);
}

#[tokio::test]
async fn negative_usage_is_clamped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"usage": -5}"#))
        .mount(&server)
        .await;

    let reading = fetcher(&server, Duration::from_secs(10))
        .fetch(&stammgelaende())
        .await
        .unwrap();
    assert_eq!(reading.usage, 0.0);
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"usage\": "))
        .mount(&server)
        .await;

    let err = fetcher(&server, Duration::from_secs(10))
        .fetch(&stammgelaende())
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn notice_text_after_document_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{\"usage\": 42}\n<br /><b>Notice</b>: Undefined index"),
        )
        .mount(&server)
        .await;

    let reading = fetcher(&server, Duration::from_secs(10))
        .fetch(&stammgelaende())
        .await
        .unwrap();
    assert_eq!(reading.usage, 42.0);
}

#[tokio::test]
async fn error_status_with_html_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = fetcher(&server, Duration::from_secs(10))
        .fetch(&stammgelaende())
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn status_code_is_not_checked_when_body_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"usage": 12}"#))
        .mount(&server)
        .await;

    let reading = fetcher(&server, Duration::from_secs(10))
        .fetch(&stammgelaende())
        .await
        .unwrap();
    assert_eq!(reading.usage, 12.0);
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"usage": 50}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = fetcher(&server, Duration::from_millis(100))
        .fetch(&stammgelaende())
        .await
        .expect_err("must time out");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };

    let f = HttpFetcher::new(
        format!("http://127.0.0.1:{port}{BACKEND_PATH}"),
        "loadGraphiteData",
        Duration::from_secs(2),
    )
    .unwrap();
    let err = f.fetch(&stammgelaende()).await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn invalid_url_is_request_error() {
    let f = HttpFetcher::new("not a url", "loadGraphiteData", Duration::from_secs(1))
        .unwrap();
    let err = f.fetch(&stammgelaende()).await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Request);
}
