use axum::{
    Router,
    body::Bytes,
    http::{HeaderMap, StatusCode, Uri},
    routing::post,
};
use std::sync::{Arc, Mutex};

/// One request as seen by the mock storage server
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[allow(dead_code)]
impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// Start a local storage API that answers every object POST with
/// `status` and `body`. Returns the base URL and the captured requests.
pub async fn spawn_storage(status: StatusCode, body: &'static str) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let state = captured.clone();

    let app = Router::new().route(
        "/storage/v1/object/*path",
        post(move |uri: Uri, headers: HeaderMap, payload: Bytes| {
            let state = state.clone();
            async move {
                state.lock().unwrap().push(CapturedRequest {
                    path: uri.path().to_string(),
                    headers,
                    body: payload,
                });
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), captured)
}
