use super::http_error::HttpError;
use crate::models::context::ContextPointer;
use market_data_client::{normalize_tickers, Quote};
use rocket::get;
use rocket::serde::json::Json;
use rocket::State;

#[get("/companies?<tickers>")]
pub async fn get(
    tickers: Option<&str>,
    context: &State<ContextPointer>,
) -> Result<Json<Vec<Quote>>, HttpError> {
    let raw = tickers
        .ok_or_else(|| HttpError::BadRequest("tickers query parameter required".to_string()))?;

    let requested: Vec<String> = raw
        .split(',')
        .map(|ticker| ticker.trim().to_string())
        .filter(|ticker| !ticker.is_empty())
        .collect();

    if normalize_tickers(&requested).is_empty() {
        return Err(HttpError::BadRequest("No valid tickers provided".to_string()));
    }

    Ok(Json(context.quote_client().fetch(&requested).await))
}
