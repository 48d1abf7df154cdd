//! Test fixtures: an in-process server wired to fake upstream APIs.

use std::{sync::Arc, time::Duration};

use clap::Parser;
use fundamentals_server::{
    Config,
    ui::{build_router, state::AppState},
};
use tokio::{net::TcpListener, task::JoinHandle};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex, query_param},
};

/// Path prefix of the fake source A (`/ws/{key}/json`)
pub const SOURCE_A_PREFIX: &str = "/ws";
/// Path prefix of the fake source B (`/nationalize/?name={key}`)
pub const SOURCE_B_PREFIX: &str = "/nationalize";

/// Server bound to an ephemeral port, stopped when dropped
pub struct TestServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose lookup sources point at `upstream`
    pub async fn start(upstream: &MockServer) -> Self {
        let source_a = format!("{}{}", upstream.uri(), SOURCE_A_PREFIX);
        let source_b = format!("{}{}", upstream.uri(), SOURCE_B_PREFIX);
        let config = Config::try_parse_from([
            "fundamentals-server",
            "--source-a-url",
            source_a.as_str(),
            "--source-b-url",
            source_b.as_str(),
            "--lookup-timeout-ms",
            "1000",
        ])
        .expect("Failed to parse test config");

        let state = Arc::new(AppState::from_config(&config).expect("Failed to build state"));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, build_router(state))
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Fake upstream answering both sources with fixed payloads after `delay`
pub async fn start_upstream(delay: Duration) -> MockServer {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/ws/[^/]+/json$"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"cep":"83402-220"}"#)
                .set_delay(delay),
        )
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{SOURCE_B_PREFIX}/")))
        .and(query_param("name", "83402220"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"count":0}"#)
                .set_delay(delay),
        )
        .mount(&upstream)
        .await;

    upstream
}

/// Fake upstream where source A always fails with `status`
pub async fn start_failing_upstream(status: u16) -> MockServer {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/ws/"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{SOURCE_B_PREFIX}/")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count":0}"#))
        .mount(&upstream)
        .await;

    upstream
}
