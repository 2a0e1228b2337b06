use crate::agent::InterpreterAgent;
use crate::cli::Args;
use crate::error::InterpretError;
use crate::models::api::{
    ChatRequest,
    ChatResponse,
    Endpoints,
    ErrorResponse,
    HealthResponse,
    IndexResponse,
};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ DefaultBodyLimit, State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use tower::ServiceBuilder;
use tower_http::cors::{ Any, CorsLayer };
use uuid::Uuid;
use log::{ info, warn, error };

#[derive(Clone)]
pub struct AppState {
    agent: Arc<InterpreterAgent>,
}

pub fn router(agent: Arc<InterpreterAgent>, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .layer(ServiceBuilder::new().layer(cors).layer(DefaultBodyLimit::max(max_body_bytes)))
        .with_state(AppState { agent })
}

pub async fn start_http_server(
    agent: Arc<InterpreterAgent>,
    args: &Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = args.bind_addr().parse::<SocketAddr>()?;
    let app = router(agent, args.max_body_bytes);

    if args.enable_tls {
        let (cert_path, key_path) = match (&args.tls_cert_path, &args.tls_key_path) {
            (Some(cert), Some(key)) => (cert, key),
            _ => {
                error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                return Err("TLS enabled without cert/key".into());
            }
        };
        info!("TLS enabled. Loading certificate from '{}' and key from '{}'", cert_path, key_path);
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("Starting HTTPS API server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service()).await?;
    } else {
        let listener = tokio::net::TcpListener
            ::bind(addr).await
            .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
        info!("Starting HTTP API server on: http://{}", addr);
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

async fn index_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(IndexResponse {
        message: "Horse Health Record Interpreter API is running.".into(),
        endpoints: Endpoints {
            health: "/health".into(),
            chat: "/api/chat".into(),
        },
    }))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy".into() }))
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("[{}] Chat body over size limit", request_id);
            return (StatusCode::PAYLOAD_TOO_LARGE, Json(ErrorResponse {
                error: "Request body too large".into(),
                details: Some(rejection.body_text()),
            })).into_response();
        }
        Err(rejection) => {
            error!("[{}] Rejected chat body: {}", request_id, rejection.body_text());
            return InterpretError::Other(rejection.body_text()).into_response();
        }
    };

    info!(
        "[{}] Chat request: message={} chars, document={} chars, history={} entries",
        request_id,
        request.message().len(),
        request.document_text().len(),
        request.history().len()
    );

    match state.agent.interpret(&request_id, &request).await {
        Ok(response) => {
            info!("[{}] Chat response: {} chars", request_id, response.len());
            (StatusCode::OK, Json(ChatResponse { response, success: true })).into_response()
        }
        Err(InterpretError::MissingInput) => {
            info!("[{}] Rejected: no message or document", request_id);
            InterpretError::MissingInput.into_response()
        }
        Err(e) => {
            error!("[{}] Error: {}", request_id, e);
            e.into_response()
        }
    }
}
