use super::http_error::HttpError;
use crate::data::sectors::{self, Subsector};
use rocket::get;
use rocket::serde::json::Json;

#[get("/subsectors/<subsector_id>")]
pub fn get(subsector_id: &str) -> Result<Json<&'static Subsector>, HttpError> {
    sectors::subsector(subsector_id)
        .map(Json)
        .ok_or_else(|| HttpError::NotFound("Subsector not found".to_string()))
}
