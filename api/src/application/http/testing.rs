use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use axum_test::TestServer;
use serde_json::Value;

use crate::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};

pub fn test_args(openai_base_url: &str, openai_api_key: Option<&str>) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
            body_limit: 8 * 1024 * 1024,
        },
        llm: LlmArgs {
            openai_api_key: openai_api_key.map(str::to_string),
            openai_model: "gpt-test".to_string(),
            openai_base_url: openai_base_url.to_string(),
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

/// Returns a new [`TestServer`] running the full application router.
pub fn create_test_server(args: Args) -> anyhow::Result<TestServer> {
    let app = router(state(Arc::new(args)))?;
    let server = TestServer::new(app)?;
    Ok(server)
}

/// One request received by [`FakeUpstream`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeUpstreamState {
    status: StatusCode,
    reply: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Stand-in for the inference API, served over a real HTTP port.
pub struct FakeUpstream {
    server: TestServer,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeUpstream {
    pub fn replying(status: StatusCode, reply: impl Into<String>) -> anyhow::Result<Self> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = FakeUpstreamState {
            status,
            reply: reply.into(),
            calls: calls.clone(),
        };

        let app = Router::new()
            .route("/responses", post(respond))
            .with_state(state);
        let server = TestServer::builder().http_transport().build(app)?;

        Ok(Self { server, calls })
    }

    /// Upstream that answers with a responses envelope whose `output_text` is `text`.
    pub fn with_output_text(text: &str) -> anyhow::Result<Self> {
        let envelope = serde_json::json!({ "output_text": text });
        Self::replying(StatusCode::OK, envelope.to_string())
    }

    pub fn base_url(&self) -> String {
        self.server
            .server_address()
            .map(|url| url.to_string())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<FakeUpstreamState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], String) {
    let call = RecordedCall {
        authorization: headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string()),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    };
    state.calls.lock().unwrap().push(call);

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.reply.clone(),
    )
}
