use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::post;
use hyper::Request;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server;
use log::{error, trace};
use tokio::net::TcpListener;
use tower_service::Service;

pub const SERVICE_PATH: &str = "/ExpertWebservice-play/Webservice";

/// File reference the mock serves (`hello`).
pub const KNOWN_FILE: &str = "D9984527582012022715184747.dcf";

/// File reference the mock refuses with a `FirmwareNotSelectableException`.
pub const NOT_SELECTABLE_FILE: &str = "FSQ905514721001945005.dat";

const DEMO_CREDENTIALS: &str =
    "<login>demo</login><password>fe01ce2a7fbac8fafaed7c982a04e229</password>";
const SUPPORTED_VERSION: &str = "<version>2.5.0</version>";

const GET_FILE_LIST_RESPONSE: &str = include_str!("../../testdata/getFileListResponse.xml");
const GET_FILE_RESPONSE: &str = include_str!("../../testdata/getFileResponse.xml");
const GET_INSTALL_RECORDS_RESPONSE: &str =
    include_str!("../../testdata/getInstallRecordsResponse.xml");
const AUTHENTICATION_FAULT: &str = include_str!("../../testdata/faultAuthentication.xml");
const UNEXPECTED_FAULT: &str = include_str!("../../testdata/faultUnexpected.xml");
const FIRMWARE_NOT_SELECTABLE_FAULT: &str =
    include_str!("../../testdata/faultFirmwareNotSelectable.xml");
const NO_SUCH_FILE_FAULT: &str = include_str!("../../testdata/faultNoSuchFile.xml");
const UNKNOWN_FAULT: &str = include_str!("../../testdata/faultUnknown.xml");

type SoapReply = (StatusCode, [(header::HeaderName, &'static str); 1], &'static str);

pub struct MockHttp;

impl MockHttp {
    pub async fn listen() {
        let listener = TcpListener::bind("127.0.0.1:3000")
            .await
            .expect("Could not bind HTTP server");

        Self::serve(listener).await
    }

    /// Serves the web service on an already bound listener, forever.
    pub async fn serve(listener: TcpListener) {
        let app = Router::new().route(SERVICE_PATH, post(Self::webservice));

        loop {
            let (socket, _remote_addr) = match listener.accept().await {
                Ok(l) => l,
                Err(error) => {
                    error!("Failed to accept connection: {error}");
                    continue;
                }
            };

            let tower_service = app.clone();

            tokio::spawn(async move {
                let socket = TokioIo::new(socket);
                let hyper_service =
                    hyper::service::service_fn(move |request: Request<Incoming>| {
                        tower_service.clone().call(request)
                    });

                let mut builder = server::conn::auto::Builder::new(TokioExecutor::new());
                builder.http1().title_case_headers(true);

                if let Err(err) = builder
                    .serve_connection_with_upgrades(socket, hyper_service)
                    .await
                {
                    error!("Failed to serve connection: {err:#}");
                }
            });
        }
    }

    async fn webservice(body: String) -> SoapReply {
        trace!("C: {body}");

        if !body.contains(DEMO_CREDENTIALS) {
            return Self::fault(AUTHENTICATION_FAULT);
        }

        if !body.contains(SUPPORTED_VERSION) {
            return Self::fault(UNEXPECTED_FAULT);
        }

        if body.contains("<sq:getFileList>") {
            Self::ok(GET_FILE_LIST_RESPONSE)
        } else if body.contains("<sq:getInstallRecords>") {
            Self::ok(GET_INSTALL_RECORDS_RESPONSE)
        } else if body.contains("<sq:getFile>") {
            match Self::filename(&body) {
                Some(KNOWN_FILE) => Self::ok(GET_FILE_RESPONSE),
                Some(NOT_SELECTABLE_FILE) => Self::fault(FIRMWARE_NOT_SELECTABLE_FAULT),
                _ => Self::fault(NO_SUCH_FILE_FAULT),
            }
        } else {
            Self::fault(UNKNOWN_FAULT)
        }
    }

    fn filename(body: &str) -> Option<&str> {
        let (_, rest) = body.split_once("<filename>")?;
        let (filename, _) = rest.split_once("</filename>")?;
        Some(filename)
    }

    fn ok(envelope: &'static str) -> SoapReply {
        Self::reply(StatusCode::OK, envelope)
    }

    fn fault(envelope: &'static str) -> SoapReply {
        Self::reply(StatusCode::INTERNAL_SERVER_ERROR, envelope)
    }

    fn reply(status: StatusCode, envelope: &'static str) -> SoapReply {
        trace!("S: {status}");
        (
            status,
            [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
            envelope,
        )
    }
}
