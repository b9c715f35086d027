mod companies;
mod health;
mod http_error;
mod news;
mod sectors;
mod subsectors;

use crate::models::context::ContextPointer;
use rocket::{catchers, routes, Build, Rocket};

/// Assemble the Rocket instance: routes under `/api`, JSON error
/// catchers, and the shared context as managed state.
pub fn rocket(context: ContextPointer) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("port", *context.config().port()));

    rocket::custom(figment).manage(context).mount(
        "/api",
        routes![
            health::health,
            sectors::list,
            sectors::get,
            subsectors::get,
            companies::get,
            news::get,
        ],
    )
    .register("/", catchers![http_error::not_found, http_error::internal_error])
}
