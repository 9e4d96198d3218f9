use ::warp::Filter;

pub mod config;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod source;

mod handlers;

pub use evaluate::{Criteria, Verdict};

/// Everything a request needs; immutable once the server is running.
pub struct State {
    pub source: Box<dyn source::MetricsSource>,
    pub criteria: Criteria,
}

impl State {
    pub fn new(source: Box<dyn source::MetricsSource>, criteria: Criteria) -> Self {
        Self { source, criteria }
    }
}

async fn handle_rejection(
    err: ::warp::Rejection,
) -> Result<impl ::warp::Reply, ::std::convert::Infallible> {
    if err.is_not_found() {
        return Ok(::warp::reply::with_status(
            "Not Found",
            ::warp::http::StatusCode::NOT_FOUND,
        ));
    }

    if err.find::<::warp::reject::MethodNotAllowed>().is_some() {
        return Ok(::warp::reply::with_status(
            "Method Not Allowed",
            ::warp::http::StatusCode::METHOD_NOT_ALLOWED,
        ));
    }

    ::log::warn!("rejection {:?}", err);

    Ok(::warp::reply::with_status(
        "Internal Server Error",
        ::warp::http::StatusCode::INTERNAL_SERVER_ERROR,
    ))
}

pub fn routes(
    state: ::std::sync::Arc<State>,
) -> impl Filter<Extract = impl ::warp::Reply, Error = ::std::convert::Infallible>
       + Clone {
    let state_filter = ::warp::any().map(move || state.clone());

    let health_route = ::warp::get()
        .and(::warp::path("health"))
        .and(::warp::path::end())
        .and(state_filter)
        .and_then(handlers::get_health::handler);

    health_route.recover(handle_rejection)
}
