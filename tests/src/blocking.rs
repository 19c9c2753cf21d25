use crate::start_mock_server;
use expertview::ExpertViewError;
use expertview::exports::client::ExpertView;
use mock_server::mock_http::KNOWN_FILE;
use tokio::runtime::Runtime;

#[test]
fn blocking_client() {
    let server_rt = Runtime::new().unwrap();
    let endpoint = server_rt.block_on(start_mock_server());

    let client = ExpertView::new(
        endpoint.clone(),
        String::new(),
        "demo".to_string(),
        "demo".to_string(),
    )
    .unwrap();

    assert_eq!(client.get_file_list().unwrap().records.len(), 60);
    assert_eq!(client.get_file(KNOWN_FILE.to_string()).unwrap(), b"hello");
    assert_eq!(client.get_installation_records().unwrap().len(), 2);

    let result = ExpertView::new(endpoint, String::new(), "demo".to_string(), String::new());
    assert!(matches!(result, Err(ExpertViewError::MissingCredentials)));
}
