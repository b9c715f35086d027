use super::http_error::HttpError;
use crate::data::sectors;
use crate::models::context::ContextPointer;
use news_client::{Article, DEFAULT_NEWS_DAYS};
use rocket::get;
use rocket::serde::json::Json;
use rocket::State;

#[get("/news?<subsector>&<days>")]
pub async fn get(
    subsector: Option<&str>,
    days: Option<&str>,
    context: &State<ContextPointer>,
) -> Result<Json<Vec<Article>>, HttpError> {
    let subsector_id = subsector
        .ok_or_else(|| HttpError::BadRequest("subsector query parameter required".to_string()))?;

    let sub = sectors::subsector(subsector_id)
        .ok_or_else(|| HttpError::NotFound("Subsector not found".to_string()))?;

    // Absent or non-numeric day windows fall back to the default
    let days = days
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(DEFAULT_NEWS_DAYS);

    let articles = context
        .news_client()
        .fetch(subsector_id, sub.news_query(), days)
        .await;

    Ok(Json(articles))
}
