use crate::start_mock_server;
use expertview::{Config, Credentials, ExpertView, ExpertViewError};
use mock_server::mock_http::{KNOWN_FILE, NOT_SELECTABLE_FILE};

async fn client(password: &str) -> ExpertView {
    let endpoint = start_mock_server().await;
    ExpertView::new(
        Config::new(endpoint, expertview::DEFAULT_VERSION),
        Credentials::new("demo", password),
    )
    .unwrap()
}

#[tokio::test]
async fn get_file() {
    let file = client("demo").await.get_file(KNOWN_FILE).await.unwrap();
    assert_eq!(file, b"hello");
}

#[tokio::test]
async fn get_file_authentication_error() {
    let error = client("wrong").await.get_file(KNOWN_FILE).await.unwrap_err();
    assert!(matches!(error, ExpertViewError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn get_file_not_selectable() {
    let error = client("demo")
        .await
        .get_file(NOT_SELECTABLE_FILE)
        .await
        .unwrap_err();
    assert!(matches!(error, ExpertViewError::FirmwareNotSelectable(_)));
}

#[tokio::test]
async fn get_file_no_such_file() {
    let error = client("demo")
        .await
        .get_file("DSQ0000000000000000000.dat")
        .await
        .unwrap_err();
    assert!(matches!(error, ExpertViewError::NoSuchFile(_)));
    assert!(error.is_fault());
}
