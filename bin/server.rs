// Healthcare Operations Portal - Web Server
// REST API over the portal datasets and calculators

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use healthops_portal::calculators::basic::{date_difference_days, percentage_of};
use healthops_portal::calculators::drg::{
    compute_german_los, compute_swiss_los, GermanLosInput, SwissLosInput,
};
use healthops_portal::currency::{convert, ConversionResult, ExchangeRateApi};
use healthops_portal::production::{filter_procedures, ProcedureStatus};
use healthops_portal::{charts, dashboard, links, production, sop, CURRENCIES};

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

// ============================================================================
// Page endpoints
// ============================================================================

/// GET /api/health
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": healthops_portal::VERSION,
    }))
}

/// GET /api/dashboard - headline stats, activity feed, department metrics
async fn get_dashboard() -> impl IntoResponse {
    let metrics = dashboard::department_metrics();
    Json(ApiResponse::ok(serde_json::json!({
        "stats": dashboard::headline_stats(),
        "recent_activity": dashboard::recent_activity(),
        "departments": metrics,
        "average_utilization": dashboard::average_utilization(&metrics),
    })))
}

#[derive(Deserialize)]
struct ProductionQuery {
    status: Option<String>,
    q: Option<String>,
}

/// GET /api/production?status=in-progress&q=cardiac
async fn get_production(Query(params): Query<ProductionQuery>) -> impl IntoResponse {
    let roster = production::procedures();
    let status = params
        .status
        .as_deref()
        .and_then(ProcedureStatus::from_filter);
    let query = params.q.unwrap_or_default();

    let filtered: Vec<_> = filter_procedures(&roster, status, &query)
        .into_iter()
        .cloned()
        .collect();

    Json(ApiResponse::ok(serde_json::json!({
        "procedures": filtered,
        "counts": production::status_counts(&roster),
    })))
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

/// GET /api/sop?q=consent
async fn get_sop(Query(params): Query<SearchQuery>) -> impl IntoResponse {
    let categories = sop::sop_categories();
    let query = params.q.unwrap_or_default();
    let hits: Vec<_> = sop::search_procedures(&categories, &query)
        .into_iter()
        .map(|(category, procedure)| {
            serde_json::json!({
                "category": category.title,
                "priority": category.priority.label(),
                "procedure": procedure,
            })
        })
        .collect();

    Json(ApiResponse::ok(serde_json::json!({
        "categories": categories,
        "recent_updates": sop::recent_updates(),
        "matches": hits,
    })))
}

/// GET /api/links?q=bmi
async fn get_links(Query(params): Query<SearchQuery>) -> impl IntoResponse {
    let categories = links::link_categories();
    let query = params.q.unwrap_or_default();
    let hits: Vec<_> = links::search_links(&categories, &query)
        .into_iter()
        .map(|(_, link)| link.clone())
        .collect();

    Json(ApiResponse::ok(serde_json::json!({
        "categories": categories,
        "matches": hits,
    })))
}

/// GET /api/charts - every series on the live-charts page
async fn get_charts() -> impl IntoResponse {
    Json(ApiResponse::ok(charts::all_series()))
}

/// GET /api/currencies
async fn get_currencies() -> impl IntoResponse {
    Json(ApiResponse::ok(CURRENCIES.to_vec()))
}

// ============================================================================
// Calculator endpoints
// ============================================================================

#[derive(Deserialize)]
struct GermanQuery {
    #[serde(default)]
    max_los: String,
    #[serde(default)]
    daily_rate: String,
    #[serde(default)]
    factor: String,
    #[serde(default)]
    actual_los: String,
}

/// GET /api/calc/german?max_los=6&daily_rate=4206.51&factor=0.051&actual_los=9
async fn calc_german(Query(params): Query<GermanQuery>) -> impl IntoResponse {
    let input = GermanLosInput::new(
        &params.max_los,
        &params.daily_rate,
        &params.factor,
        &params.actual_los,
    );
    let result = compute_german_los(&input);

    Json(ApiResponse::ok(serde_json::json!({
        "result": result,
        "summary": result.summary(),
    })))
}

#[derive(Deserialize)]
struct SwissQuery {
    #[serde(default)]
    cost_weight: String,
    #[serde(default)]
    max_los: String,
    #[serde(default)]
    base_rate: String,
    #[serde(default)]
    daily_increment: String,
    #[serde(default)]
    actual_los: String,
}

/// GET /api/calc/swiss?cost_weight=0.977&max_los=6&base_rate=13500&daily_increment=0.153&actual_los=9
async fn calc_swiss(Query(params): Query<SwissQuery>) -> impl IntoResponse {
    let input = SwissLosInput::new(
        &params.cost_weight,
        &params.max_los,
        &params.base_rate,
        &params.daily_increment,
        &params.actual_los,
    );
    let result = compute_swiss_los(&input);

    Json(ApiResponse::ok(serde_json::json!({
        "result": result,
        "summary": result.summary(),
    })))
}

#[derive(Deserialize)]
struct DateQuery {
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

/// GET /api/calc/date?start=2024-01-01&end=2024-01-10
async fn calc_date(Query(params): Query<DateQuery>) -> impl IntoResponse {
    let result = date_difference_days(&params.start, &params.end);
    Json(ApiResponse::ok(serde_json::json!({
        "result": result,
        "summary": result.summary(),
    })))
}

#[derive(Deserialize)]
struct PercentageQuery {
    #[serde(default)]
    base: String,
    #[serde(default)]
    percentage: String,
}

/// GET /api/calc/percentage?base=250&percentage=20
async fn calc_percentage(Query(params): Query<PercentageQuery>) -> impl IntoResponse {
    let result = percentage_of(&params.base, &params.percentage);
    Json(ApiResponse::ok(serde_json::json!({
        "result": result,
        "summary": result.summary_for(&params.base, &params.percentage),
    })))
}

#[derive(Deserialize)]
struct ConvertQuery {
    #[serde(default)]
    amount: String,
    #[serde(default = "default_from")]
    from: String,
    #[serde(default = "default_to")]
    to: String,
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "EUR".to_string()
}

/// GET /api/convert?amount=100&from=USD&to=EUR
/// The outbound rate fetch is blocking, so it runs off the async runtime.
async fn convert_currency(Query(params): Query<ConvertQuery>) -> impl IntoResponse {
    let result = tokio::task::spawn_blocking(move || {
        let rates = ExchangeRateApi::new();
        convert(&params.amount, &params.from, &params.to, &rates)
    })
    .await;

    match result {
        Ok(conversion) => {
            let summary = conversion.summary();
            Json(ApiResponse::ok(serde_json::json!({
                "result": conversion,
                "summary": summary,
            })))
            .into_response()
        }
        Err(e) => {
            eprintln!("Conversion task failed: {}", e);
            let fallback = ConversionResult::Unavailable {
                reason: "Network issue or API unavailable".to_string(),
            };
            let summary = fallback.summary();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::ok(serde_json::json!({
                    "result": fallback,
                    "summary": summary,
                }))),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Healthcare Operations Portal - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/production", get(get_production))
        .route("/sop", get(get_sop))
        .route("/links", get(get_links))
        .route("/charts", get(get_charts))
        .route("/currencies", get(get_currencies))
        .route("/calc/german", get(calc_german))
        .route("/calc/swiss", get(calc_swiss))
        .route("/calc/date", get(calc_date))
        .route("/calc/percentage", get(calc_percentage))
        .route("/convert", get(convert_currency));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   Dashboard: http://localhost:3000/api/dashboard");
    println!("   Calculators: http://localhost:3000/api/calc/german");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
