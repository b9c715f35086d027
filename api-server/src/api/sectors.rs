use super::http_error::HttpError;
use crate::data::sectors::{self, SectorSummary};
use rocket::get;
use rocket::serde::json::Json;

#[get("/sectors")]
pub fn list() -> Json<Vec<SectorSummary>> {
    Json(sectors::all().iter().map(|sector| sector.summary()).collect())
}

#[get("/sectors/<sector_id>")]
pub fn get(sector_id: &str) -> Result<Json<SectorSummary>, HttpError> {
    sectors::sector(sector_id)
        .map(|sector| Json(sector.summary()))
        .ok_or_else(|| HttpError::NotFound("Sector not found".to_string()))
}
