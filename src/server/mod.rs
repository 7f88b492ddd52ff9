use crate::core::{QaOutcome, QaService, TableAnswerer, Translator};
use crate::utils::error::{QaError, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use bytes::Bytes;
use warp::http::StatusCode;
use warp::{reject::Rejection, reply::Reply, Filter};

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub csv: String,
    pub ask: String,
}

/// 成功與失敗共用同一結構；失敗時可選欄位全部省略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<(usize, usize)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<String>,
}

impl AskResponse {
    fn success(outcome: QaOutcome) -> Self {
        Self {
            success: true,
            answer: Some(outcome.answer),
            coordinates: Some(outcome.coordinates),
            cells: Some(outcome.cells),
            aggregator: Some(outcome.aggregator),
        }
    }

    fn failure() -> Self {
        Self {
            success: false,
            answer: None,
            coordinates: None,
            cells: None,
            aggregator: None,
        }
    }
}

/// 組合所有路由：GET / 靜態首頁、POST /jawab 問答、GET /health 健康檢查
pub fn routes<T, A>(
    service: Arc<QaService<T, A>>,
    index_path: PathBuf,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone
where
    T: Translator + Send + Sync + 'static,
    A: TableAnswerer + Send + Sync + 'static,
{
    let index = warp::path::end()
        .and(warp::get())
        .and(with_index_path(index_path))
        .and_then(serve_index);

    let jawab = warp::path("jawab")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with_service(service))
        .and_then(handle_jawab);

    let health = warp::path("health").and(warp::get()).and_then(health_check);

    index.or(jawab).or(health)
}

fn with_service<T, A>(
    service: Arc<QaService<T, A>>,
) -> impl Filter<Extract = (Arc<QaService<T, A>>,), Error = Infallible> + Clone
where
    T: Translator + Send + Sync + 'static,
    A: TableAnswerer + Send + Sync + 'static,
{
    warp::any().map(move || service.clone())
}

fn with_index_path(
    index_path: PathBuf,
) -> impl Filter<Extract = (PathBuf,), Error = Infallible> + Clone {
    warp::any().map(move || index_path.clone())
}

/// 每次請求都重新讀取首頁檔案，讀取失敗回 500 空白頁
async fn serve_index(index_path: PathBuf) -> std::result::Result<impl Reply, Rejection> {
    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => Ok(warp::reply::with_status(
            warp::reply::html(html),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::error!(
                "❌ Failed to read landing page {}: {}",
                index_path.display(),
                e
            );
            Ok(warp::reply::with_status(
                warp::reply::html(String::new()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// 無論成功或失敗一律回 HTTP 200，失敗只由 success 欄位表示
async fn handle_jawab<T, A>(
    body: Bytes,
    service: Arc<QaService<T, A>>,
) -> std::result::Result<impl Reply, Rejection>
where
    T: Translator + Send + Sync + 'static,
    A: TableAnswerer + Send + Sync + 'static,
{
    let reply = match decode_and_answer(&body, &service).await {
        Ok(outcome) => {
            tracing::info!(
                "✅ Answered query with aggregator '{}' ({} cells)",
                outcome.aggregator,
                outcome.cells.len()
            );
            AskResponse::success(outcome)
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            AskResponse::failure()
        }
    };

    Ok(warp::reply::json(&reply))
}

async fn decode_and_answer<T, A>(body: &[u8], service: &QaService<T, A>) -> Result<QaOutcome>
where
    T: Translator + Send + Sync,
    A: TableAnswerer + Send + Sync,
{
    let request: AskRequest =
        serde_json::from_slice(body).map_err(|e| QaError::DecodeError {
            message: e.to_string(),
        })?;

    service.answer(&request.csv, &request.ask).await
}

async fn health_check() -> std::result::Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "small-qa"
    })))
}
