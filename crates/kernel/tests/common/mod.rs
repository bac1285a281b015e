#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Tests drive the REAL router and fragment client: [`TestApp`] answers
//! requests in-process through `oneshot`, and [`spawn_server`] serves the same
//! router on a loopback socket for tests that need the fetcher to make real
//! HTTP requests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hackerspace_kernel::{AppState, Config, ContentStore};
use hackerspace_test_utils::TestSite;

/// Build a config from explicit variables, ignoring the process environment.
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).expect("Invalid test config")
}

/// In-process application under test.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create an app serving `site`.
    pub fn new(site: &TestSite) -> Self {
        Self::with_config(site, &test_config(&[]))
    }

    pub fn with_config(site: &TestSite, config: &Config) -> Self {
        let store = ContentStore::from_json(&site.to_json_string()).expect("Invalid test site");
        let state = AppState::from_parts(config, store);
        let router = hackerspace_kernel::routes::app(state.clone(), config);
        Self { router, state }
    }

    /// Send a request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// GET a JSON endpoint, asserting 200.
    pub async fn get_json(&self, uri: &str) -> Value {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        serde_json::from_str(&body_string(response).await).expect("Response is not JSON")
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Collect a response body as text.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Bind a loopback listener and return it with its `http://` base URL.
pub async fn bind_loopback() -> (tokio::net::TcpListener, String) {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("http://{addr}/"))
}

/// Serve `router` on `listener` in the background.
pub fn serve(listener: tokio::net::TcpListener, router: Router) {
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
}

/// Serve the full app for `site` on a loopback socket.
///
/// The app's fragment client points back at the same server, so
/// `/fragments/{region}` exercises the real API round trip.
pub async fn spawn_server(site: &TestSite, extra: &[(&str, &str)]) -> (TestApp, String) {
    let (listener, base) = bind_loopback().await;
    let mut vars = vec![("API_BASE_URL", base.as_str())];
    vars.extend_from_slice(extra);
    let app = TestApp::with_config(site, &test_config(&vars));
    serve(listener, app.router.clone());
    (app, base)
}
