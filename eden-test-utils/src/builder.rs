//! Declarative setup of a mock portal.
//!
//! Endpoints are queued on the builder and created on the mock server in `build()`, custom
//! endpoints first so tests can layer several mocks on the same path.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{NAMES_PATH, TEST_TOKEN},
    context::TestContext,
    fixtures,
};

type MockSetup = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// What a queued names endpoint answers with.
enum NamesReply {
    Names(Value),
    Envelope(Value),
    Status(usize, String),
}

struct NamesEndpoint {
    expected_body: Option<Value>,
    reply: NamesReply,
    expected_requests: usize,
}

/// Builder for a mock portal test environment.
pub struct TestBuilder {
    require_token: bool,
    mock_builders: Vec<MockSetup>,
    names_endpoints: Vec<NamesEndpoint>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            require_token: false,
            mock_builders: Vec::new(),
            names_endpoints: Vec::new(),
        }
    }

    /// Only match requests carrying `Authorization: Bearer` with [`TEST_TOKEN`].
    pub fn with_required_token(mut self) -> Self {
        self.require_token = true;
        self
    }

    /// Add a names endpoint answering with `names` in a successful envelope.
    ///
    /// # Arguments
    /// - `expected_body` - Exact JSON request body to match, or `None` to match any body
    /// - `names` - `(id, name)` pairs returned in the payload
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_names_endpoint(
        mut self,
        expected_body: Option<Value>,
        names: &[(i64, &str)],
        expected_requests: usize,
    ) -> Self {
        self.names_endpoints.push(NamesEndpoint {
            expected_body,
            reply: NamesReply::Names(fixtures::names(names)),
            expected_requests,
        });
        self
    }

    /// Add a names endpoint answering HTTP 200 with an arbitrary envelope.
    pub fn with_names_envelope(mut self, envelope: Value, expected_requests: usize) -> Self {
        self.names_endpoints.push(NamesEndpoint {
            expected_body: None,
            reply: NamesReply::Envelope(envelope),
            expected_requests,
        });
        self
    }

    /// Add a names endpoint answering with `status` and a raw `body`.
    pub fn with_names_status(
        mut self,
        status: usize,
        body: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.names_endpoints.push(NamesEndpoint {
            expected_body: None,
            reply: NamesReply::Status(status, body.into()),
            expected_requests,
        });
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and create every queued endpoint.
    pub async fn build(self) -> TestContext {
        let mut server = Server::new_async().await;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut server));
        }

        for endpoint in self.names_endpoints {
            mocks.push(create_names_endpoint(
                &mut server,
                endpoint,
                self.require_token,
            ));
        }

        TestContext { server, mocks }
    }
}

fn create_names_endpoint(
    server: &mut ServerGuard,
    endpoint: NamesEndpoint,
    require_token: bool,
) -> Mock {
    let mut mock = server.mock("POST", NAMES_PATH);

    if let Some(body) = endpoint.expected_body {
        mock = mock.match_body(Matcher::Json(body));
    }

    if require_token {
        mock = mock.match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str());
    }

    let (status, body) = match endpoint.reply {
        NamesReply::Names(names) => (200, fixtures::success(names).to_string()),
        NamesReply::Envelope(envelope) => (200, envelope.to_string()),
        NamesReply::Status(status, body) => (status, body),
    };

    mock.with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(endpoint.expected_requests)
        .create()
}
