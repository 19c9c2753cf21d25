use env_logger::Env;
use log::info;
use mock_server::MockHttp;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    info!("Starting Mock Server");
    MockHttp::listen().await;
}
