use crate::start_mock_server;
use expertview::{Config, Credentials, ExpertView, ExpertViewError, RecordKind};

#[tokio::test]
async fn get_file_list() {
    let endpoint = start_mock_server().await;
    let client = ExpertView::new(
        Config::new(endpoint, expertview::DEFAULT_VERSION),
        Credentials::new("demo", "demo"),
    )
    .unwrap();

    let file_list = client.get_file_list().await.unwrap();

    assert_eq!(file_list.device_types.len(), 3);
    assert_eq!(file_list.device_types[0].product_number, "8000-1");
    assert_eq!(file_list.device_types[0].description, "Normal (Solid/Flex)");
    assert_eq!(file_list.records.len(), 60);
    assert_eq!(file_list.records[0].kind, RecordKind::Dcf);
    assert_eq!(
        file_list.records[0].name,
        "INTA1-FLX12-MBA+VDO-RS-120224CL.DCF"
    );
    assert_eq!(file_list.records[0].file, "D9984527582012022715184747.dcf");
}

#[tokio::test]
async fn get_file_list_wrong_password() {
    let endpoint = start_mock_server().await;
    let client = ExpertView::new(
        Config::new(endpoint, ""),
        Credentials::new("demo", "not demo"),
    )
    .unwrap();

    let error = client.get_file_list().await.unwrap_err();
    assert!(matches!(error, ExpertViewError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn get_file_list_unsupported_version() {
    let endpoint = start_mock_server().await;
    let client = ExpertView::new(
        Config::new(endpoint, "2.4.0"),
        Credentials::new("demo", "demo"),
    )
    .unwrap();

    let error = client.get_file_list().await.unwrap_err();
    assert!(matches!(error, ExpertViewError::UnexpectedServiceError(_)));
    assert!(!error.is_transport());
}
