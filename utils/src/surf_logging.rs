use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response};

/// Surf middleware that logs every outgoing request and its outcome.
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(
        &self,
        req: Request,
        client: Client,
        next: Next<'_>,
    ) -> Result<Response, surf::Error> {
        let method = req.method();
        let url = req.url().clone();
        log::debug!("-> {} {}", method, url);

        let start = Instant::now();
        let res = next.run(req, client).await;
        let elapsed = start.elapsed();

        match &res {
            Ok(response) => {
                log::debug!("<- {} {} {} ({:?})", method, url, response.status(), elapsed)
            }
            Err(err) => log::debug!("<- {} {} failed: {} ({:?})", method, url, err, elapsed),
        }

        res
    }
}
