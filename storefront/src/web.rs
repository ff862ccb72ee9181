pub mod error;
mod templates;

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use storefront_db::StorefrontDb;

use self::error::WebError;
use self::templates::page::RenderPage;
use self::templates::pages::search_page::SearchPage;

#[derive(Clone, FromRef)]
pub(crate) struct WebState {
    pub(crate) db: StorefrontDb,
}

#[derive(Deserialize, Default)]
struct SearchParams {
    keyword: Option<String>,
}

async fn root() -> Redirect {
    Redirect::to("/search")
}

async fn search_products(
    State(db): State<StorefrontDb>,
    Query(params): Query<SearchParams>,
) -> Result<RenderPage<SearchPage>, WebError> {
    // a missing keyword is the same as searching for everything
    let keyword = params.keyword.unwrap_or_default();
    let products = db.search_products(&keyword).await?;
    Ok(RenderPage(SearchPage { keyword, products }))
}

pub(crate) async fn start_web(state: WebState) -> anyhow::Result<()> {
    // build our application with a route
    let app = Router::new()
        .route("/", get(root))
        .route("/search", get(search_products))
        .fallback(fallback)
        .with_state(state);

    let port = std::env::var("PORT")
        .map(|p| p.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
