use ::warp::reply::Response;
use ::warp::{http::StatusCode, Reply};

/// Health endpoint driven by the configured metric. Every call fetches the
/// metrics document once and answers 200, 503 or 500.
pub(crate) async fn handler(
    state: ::std::sync::Arc<crate::State>,
) -> Result<Response, ::std::convert::Infallible> {
    let verdict =
        crate::evaluate::check(state.source.as_ref(), &state.criteria).await;

    let status = StatusCode::from_u16(verdict.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(::warp::reply::with_status(verdict.body(), status).into_response())
}
