use env_logger::Env;
use log::info;
use mock_server::MockHttp;
use mock_server::mock_http::SERVICE_PATH;
use tokio::net::TcpListener;

#[cfg(test)]
mod blocking;
#[cfg(test)]
mod file_list;
#[cfg(test)]
mod get_file;
#[cfg(test)]
mod install_records;
#[cfg(test)]
mod transport;

/// Starts the mock web service on an ephemeral port of the current runtime and returns its endpoint.
pub async fn start_mock_server() -> String {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
        .is_test(true)
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind HTTP server");
    let address = listener.local_addr().expect("Listener has no address");
    tokio::spawn(MockHttp::serve(listener));

    info!("Mock server listening on {address}");
    format!("http://{address}{SERVICE_PATH}")
}
