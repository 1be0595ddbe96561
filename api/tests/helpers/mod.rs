
pub use app::{TestContext, make_test_app, request, send, url};
