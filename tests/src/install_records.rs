use crate::start_mock_server;
use expertview::{Config, Credentials, ExpertView, ExpertViewError};
use std::sync::Arc;

#[tokio::test]
async fn get_installation_records() {
    let endpoint = start_mock_server().await;
    let client = ExpertView::new(
        Config::new(endpoint, expertview::DEFAULT_VERSION),
        Credentials::new("demo", "demo"),
    )
    .unwrap();

    let records = client.get_installation_records().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].serial_number, "296930501");
    assert_eq!(records[0].id, "667769");
    assert_eq!(records[0].telematic, "Larix Ltda");
    assert_eq!(records[0].hardware_profile, "FLX12");
    assert_eq!(records[0].software_profile, "FLEX-256-V2");
    assert_eq!(records[0].dcf, "SQU-8000-TRKS-000000-131001CL.DCF");
    assert_eq!(records[0].firmware, "8000-01V114R048.BIN");
    assert_eq!(
        records[0].key,
        "293230583 FLX12 FLEX-256-V2 hjashj dshj dahy"
    );
    assert_eq!(records[0].username, "asdf");
}

#[tokio::test]
async fn get_installation_records_authentication_error() {
    let endpoint = start_mock_server().await;
    let client = ExpertView::new(
        Config::new(endpoint, expertview::DEFAULT_VERSION),
        Credentials::new("someone", "demo"),
    )
    .unwrap();

    let error = client.get_installation_records().await.unwrap_err();
    assert!(matches!(error, ExpertViewError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let endpoint = start_mock_server().await;
    let client = Arc::new(
        ExpertView::new(
            Config::new(endpoint, expertview::DEFAULT_VERSION),
            Credentials::new("demo", "demo"),
        )
        .unwrap(),
    );

    let calls: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_installation_records().await })
        })
        .collect();

    for call in calls {
        assert_eq!(call.await.unwrap().unwrap().len(), 2);
    }
}
