use eden_names::PortalClient;
use eden_test_utils::prelude::*;

mod names;

/// Portal client pointed at the mock server, authenticated with [`TEST_TOKEN`].
fn portal_client(test: &TestContext) -> PortalClient {
    PortalClient::builder(test.url().parse().unwrap())
        .token(TEST_TOKEN)
        .user_agent(TEST_USER_AGENT)
        .build()
        .unwrap()
}
