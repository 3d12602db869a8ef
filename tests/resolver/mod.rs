use eden_names::{NameResolver, PortalClient};
use eden_test_utils::prelude::*;

mod resolve;

fn name_resolver(test: &TestContext) -> NameResolver<PortalClient> {
    let client = PortalClient::builder(test.url().parse().unwrap())
        .token(TEST_TOKEN)
        .build()
        .unwrap();

    NameResolver::new(client)
}
