//! A mock of the ExpertView web service. Accepts `demo`/`demo` and answers with the fixtures in
//! `testdata/`.

pub mod mock_http;

pub use mock_http::MockHttp;
