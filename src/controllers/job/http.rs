#[cfg(feature = "log")]
use esp_println::println;
use web2wire_core::PayloadFormat;

use crate::{
    config,
    controllers::dependencies::with_job_usecases,
    domain::dto::JobResponse,
    net::http::{
        Error as HttpError,
        HttpConnection,
        HttpHandler,
        HttpMethod,
        HttpResult,
        ResponseHeaders,
    },
};

/// Job API served on the station network
#[derive(Debug, Default)]
pub struct JobHttpController;

impl HttpHandler for JobHttpController {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult {
        let mut conn = conn;
        match conn.route() {
            (HttpMethod::Post, "/api/job/start") => handle_start_job(&mut conn).await,
            (HttpMethod::Get, "/api/status") => handle_get_status(&mut conn).await,
            _ => serve_404(&mut conn).await,
        }
    }
}

async fn handle_start_job(conn: &mut HttpConnection<'_>) -> HttpResult {
    if !is_authorized(conn.authorization()) {
        return conn.write_json(401, &JobResponse::UNAUTHORIZED).await;
    }

    let format = PayloadFormat::from_content_type(conn.content_type());
    let body = match conn.read_body().await {
        Ok(body) => body,
        Err(HttpError::TooLarge) => {
            return conn.write_json(413, &JobResponse::TOO_LARGE).await;
        }
        Err(e) => return Err(e),
    };

    let Some(outcome) = with_job_usecases(|usecases| usecases.submit_job(body, format))
    else {
        #[cfg(feature = "log")]
        println!("job_http: job posted before usecases are ready");
        return conn.write_json(503, &JobResponse::UNAVAILABLE).await;
    };
    let (status, response) = JobResponse::from_outcome(outcome);

    conn.write_json(status, &response).await
}

async fn handle_get_status(conn: &mut HttpConnection<'_>) -> HttpResult {
    let Some(status) = with_job_usecases(|usecases| usecases.job_status()) else {
        #[cfg(feature = "log")]
        println!("job_http: status requested before usecases are ready");
        conn.write_headers(&ResponseHeaders::from_code(503)).await?;
        return Ok(());
    };

    conn.write_json(200, &status).await
}

async fn serve_404(conn: &mut HttpConnection<'_>) -> HttpResult {
    conn.write_headers(&ResponseHeaders::not_found()).await
}

/// Bearer token check, open when no token is configured
fn is_authorized(header: Option<&str>) -> bool {
    let Some(token) = config::API_TOKEN else {
        return true;
    };

    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|presented| presented.trim() == token)
}
