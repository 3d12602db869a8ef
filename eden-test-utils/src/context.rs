//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, ServerGuard};

/// A running mock portal and the mocks registered on it.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_names_endpoint(None, &[(587, "Rifter")], 1)
///     .build()
///     .await;
///
/// let client = PortalClient::builder(test.url().parse()?).build()?;
/// // ...
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the portal
    pub server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Base URL of the mock portal, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
