use crate::display::{AssetUrls, HomePage, SearchPage};
use crate::error::AppError;
use crate::search::SearchService;
use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub assets: Arc<AssetUrls>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "Search", default)]
    pub search: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/search", get(redirect_home).post(search_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!("unable to listen for shutdown signal: {}", e),
    }
}

async fn home_handler() -> Response {
    render(HomePage::default())
}

async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

async fn search_handler(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::info!("malformed search form: {}", rejection);
            return Redirect::to("/").into_response();
        }
    };

    let name = form.search.trim().to_string();
    if name.is_empty() {
        return Redirect::to("/").into_response();
    }

    let search = Arc::clone(&state.search);
    let outcome = tokio::task::spawn_blocking(move || search.search(&name)).await;

    let results = match outcome {
        Ok(Ok(results)) => results,
        Ok(Err(AppError::PlayerNotFound(name))) => {
            tracing::info!(summoner = %name, "no summoner found");
            return Redirect::to("/").into_response();
        }
        Ok(Err(e)) => {
            tracing::error!("search failed: {}", e);
            return Redirect::to("/").into_response();
        }
        Err(e) => {
            tracing::error!("search task aborted: {}", e);
            return Redirect::to("/").into_response();
        }
    };

    render(SearchPage {
        results: &results,
        assets: &state.assets,
    })
}

fn render<T: Template>(page: T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("template rendering failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
