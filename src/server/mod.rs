//! JSON API server
//!
//! Thin host surface over the content stores. Every handler performs its
//! own fresh disk scan, so no state is shared between requests beyond the
//! immutable site configuration. List and detail responses carry the
//! configured revalidation interval as a Cache-Control header; the
//! hosting layer owns the actual staleness policy.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::pagination::paginate;
use crate::Site;

/// Server state shared across handlers.
struct ServerState {
    site: Site,
}

/// Query parameters accepted by the list endpoints.
#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<usize>,
    per_page: Option<usize>,
    tag: Option<String>,
}

/// Start the API server.
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState { site: site.clone() });

    let app = Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .route("/api/tags", get(list_tags))
        .route("/api/shows", get(list_shows))
        .route("/api/shows/:slug", get(get_show))
        .nest_service("/assets", ServeDir::new(&site.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("API server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/posts?page=&per_page=&tag=
///
/// Tag filtering applies to the full set before pagination.
async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let store = state.site.posts();
    let posts = match query.tag.as_deref() {
        Some(tag) => store.list_by_tag(tag),
        None => store.list_all(),
    };

    let page = paginate(
        &posts,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(state.site.config.per_page),
    );
    cached_json(state.site.config.revalidate.posts, &page)
}

/// GET /api/posts/{slug} - full post with HTML body
async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match state.site.posts().get_by_slug(&slug) {
        Some(doc) => cached_json(state.site.config.revalidate.posts, &doc),
        None => not_found(),
    }
}

/// GET /api/tags - sorted distinct tags across all posts
async fn list_tags(State(state): State<Arc<ServerState>>) -> Response {
    let tags = state.site.posts().list_all_tags();
    cached_json(state.site.config.revalidate.posts, &tags)
}

/// GET /api/shows?page=&per_page=
async fn list_shows(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let store = state.site.shows();
    let shows = match query.tag.as_deref() {
        Some(tag) => store.list_by_tag(tag),
        None => store.list_all(),
    };

    let page = paginate(
        &shows,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(state.site.config.per_page),
    );
    cached_json(state.site.config.revalidate.shows, &page)
}

/// GET /api/shows/{slug} - full show with raw markdown body
async fn get_show(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match state.site.shows().get_by_slug(&slug) {
        Some(doc) => cached_json(state.site.config.revalidate.shows, &doc),
        None => not_found(),
    }
}

/// JSON response with the declared revalidation interval attached.
fn cached_json<T: Serialize>(revalidate_secs: u64, value: &T) -> Response {
    (
        [(
            header::CACHE_CONTROL,
            format!(
                "public, s-maxage={}, stale-while-revalidate",
                revalidate_secs
            ),
        )],
        Json(value),
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
