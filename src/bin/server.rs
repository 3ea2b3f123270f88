//! Pantograph Solver HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use pantograph_solver::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    success: bool,
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct InfoResponse {
    success: bool,
    data: InfoData,
}

#[derive(Debug, Serialize)]
struct InfoData {
    name: String,
    version: String,
    description: String,
    endpoints: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    success: bool,
    data: ValidationReport,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<ValidationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<CalculateData>,
}

#[derive(Debug, Serialize)]
struct CalculateData {
    inputs: MechanismInputs,
    results: MechanismResult,
    validation: ValidationReport,
}

#[derive(Debug, Deserialize)]
struct GraphRequest {
    #[serde(flatten)]
    inputs: MechanismInputs,
    steps: Option<usize>,
}

#[derive(Debug, Serialize)]
struct GraphResponse {
    success: bool,
    data: Vec<GraphSample>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        success: true,
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn info() -> impl IntoResponse {
    Json(InfoResponse {
        success: true,
        data: InfoData {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            endpoints: vec![
                "POST /api/validate".to_string(),
                "POST /api/calculate".to_string(),
                "POST /api/graph-data".to_string(),
                "GET /api/info".to_string(),
                "GET /api/health".to_string(),
            ],
        },
    })
}

async fn validate(Json(inputs): Json<MechanismInputs>) -> impl IntoResponse {
    let calculator = MechanismCalculator::default();
    Json(ValidateResponse {
        success: true,
        data: calculator.validate(&inputs),
    })
}

async fn calculate(Json(inputs): Json<MechanismInputs>) -> impl IntoResponse {
    let calculator = MechanismCalculator::default();

    let validation = calculator.validate(&inputs);
    if !validation.is_valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(CalculateResponse {
                success: false,
                error: Some("Invalid inputs".to_string()),
                validation: Some(validation),
                data: None,
            }),
        );
    }

    match calculator.calculate_all(&inputs) {
        Ok(results) => (
            StatusCode::OK,
            Json(CalculateResponse {
                success: true,
                error: None,
                validation: None,
                data: Some(CalculateData {
                    inputs,
                    results,
                    validation,
                }),
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(CalculateResponse {
                success: false,
                error: Some(e.to_string()),
                validation: Some(validation),
                data: None,
            }),
        ),
    }
}

async fn graph_data(Json(request): Json<GraphRequest>) -> impl IntoResponse {
    let calculator = MechanismCalculator::default();
    let steps = request.steps.unwrap_or(DEFAULT_GRAPH_STEPS);

    Json(GraphResponse {
        success: true,
        data: calculator.generate_graph_data(&request.inputs, steps),
    })
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/info", get(info))
        .route("/api/validate", post(validate))
        .route("/api/calculate", post(calculate))
        .route("/api/graph-data", post(graph_data))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8087));
    println!("Pantograph Solver Server listening on http://{}", addr);
    println!("  Health check: GET  /api/health");
    println!("  Info:         GET  /api/info");
    println!("  Validate:     POST /api/validate");
    println!("  Calculate:    POST /api/calculate");
    println!("  Graph data:   POST /api/graph-data");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
