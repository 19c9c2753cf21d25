use expertview::{Config, Credentials, ExpertView};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = ExpertView::new(
        Config::new(format!("http://{address}/ExpertWebservice-play/Webservice"), ""),
        Credentials::new("demo", "demo"),
    )
    .unwrap();

    let error = client.get_file_list().await.unwrap_err();
    assert!(error.is_transport());
    assert!(!error.is_fault());
}

#[tokio::test]
async fn unresponsive_server_hits_the_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut sockets = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            sockets.push(socket);
        }
    });

    let client = ExpertView::new(
        Config::new(format!("http://{address}/ExpertWebservice-play/Webservice"), "")
            .with_timeout(Duration::from_millis(200)),
        Credentials::new("demo", "demo"),
    )
    .unwrap();

    let started = Instant::now();
    let error = client.get_file_list().await.unwrap_err();
    assert!(error.is_transport());
    assert!(started.elapsed() < Duration::from_secs(5));
}
