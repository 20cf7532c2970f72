//! Axum route handlers for the puzzle-hunt site.

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tera::{Context, Tera};
use tower::ServiceExt;
use tower_http::{services::ServeFile, trace::TraceLayer};

use hunt_core::{Puzzle, PuzzleMeta};

use crate::{error::SiteError, state::SiteState};

// ── Shared state ─────────────────────────────────────────────────────────────

type Site = Arc<SiteState>;

// ── Request types ─────────────────────────────────────────────────────────────

/// Form payload for `POST /guess`.
///
/// Missing fields deserialize to empty strings so that absent and blank
/// fields take the same rejection path.
#[derive(Debug, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    pub puzzle: String,
    #[serde(default)]
    pub guess: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over an immutable site state.
pub fn router(site: Site) -> Router {
    let css = ServeFile::new(site.layout_dir.join("main.css"));
    let js = ServeFile::new(site.layout_dir.join("main.js"));

    Router::new()
        .route("/", get(index_page))
        .route("/puzzles/{id}", get(redirect_to_slash))
        .route("/puzzles/{id}/", get(puzzle_page))
        .route("/puzzles/{id}/{file}", get(puzzle_file))
        .route("/guess", post(check_guess))
        .route_service("/main.css", css)
        .route_service("/main.js", js)
        .with_state(site)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — the landing page, rendered through the shared layout.
///
/// # Errors
/// Returns [`SiteError::Template`] if the layout cannot be read or rendered.
pub async fn index_page(State(site): State<Site>) -> Result<Html<String>, SiteError> {
    // The landing page reuses the puzzle layout with only the content slot
    // populated.
    let page = Puzzle {
        id: String::new(),
        meta: PuzzleMeta {
            title: String::new(),
            answers: Vec::new(),
            hints: Vec::new(),
        },
        content: site.catalog.index.clone(),
        files: Vec::new(),
    };
    render_page(&site, &page).await.map(Html)
}

/// `GET /puzzles/{id}` — canonicalize puzzle URLs to the trailing-slash
/// form so relative attachment links resolve under the puzzle path.
pub async fn redirect_to_slash(uri: Uri) -> Redirect {
    Redirect::temporary(&format!("{}/", uri.path()))
}

/// `GET /puzzles/{id}/` — one puzzle page.
///
/// # Errors
/// Returns [`SiteError::PuzzleNotFound`] for an unknown identifier, or
/// [`SiteError::Template`] if the layout cannot be read or rendered.
pub async fn puzzle_page(
    State(site): State<Site>,
    Path(id): Path<String>,
) -> Result<Html<String>, SiteError> {
    let puzzle = site
        .catalog
        .puzzle(&id)
        .ok_or_else(|| SiteError::PuzzleNotFound(id.clone()))?;
    render_page(&site, puzzle).await.map(Html)
}

/// `GET /puzzles/{id}/{file}` — serve a declared attachment.
///
/// The membership check against the load-time attachment list is the only
/// access-control boundary here: a file that exists on disk but was not
/// recorded when the catalog was built is never served.
///
/// # Errors
/// Returns [`SiteError::PuzzleNotFound`] or [`SiteError::AttachmentNotFound`].
pub async fn puzzle_file(
    State(site): State<Site>,
    Path((id, file)): Path<(String, String)>,
    request: Request,
) -> Result<Response, SiteError> {
    let puzzle = site
        .catalog
        .puzzle(&id)
        .ok_or_else(|| SiteError::PuzzleNotFound(id.clone()))?;
    if !puzzle.files.iter().any(|f| f == &file) {
        return Err(SiteError::AttachmentNotFound { puzzle: id, file });
    }

    // Range requests, conditional requests and MIME sniffing are the file
    // service's concern.
    let path = site.content_dir.join(&puzzle.id).join(&file);
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.into_response()),
        Err(infallible) => match infallible {},
    }
}

/// `POST /guess` — stateless answer check. Nothing is recorded; the
/// response status is the entire result.
///
/// # Errors
/// Returns [`SiteError::BlankField`] when either field is blank,
/// [`SiteError::UnknownPuzzle`] for an unrecognized identifier, and
/// [`SiteError::GuessIncorrect`] when no answer matches.
pub async fn check_guess(
    State(site): State<Site>,
    Form(form): Form<GuessForm>,
) -> Result<StatusCode, SiteError> {
    if form.puzzle.is_empty() {
        return Err(SiteError::BlankField("puzzle"));
    }
    if form.guess.is_empty() {
        return Err(SiteError::BlankField("guess"));
    }

    let puzzle = site
        .catalog
        .puzzle(&form.puzzle)
        .ok_or_else(|| SiteError::UnknownPuzzle(form.puzzle.clone()))?;

    // Exact, case-sensitive comparison against any acceptable answer.
    if puzzle.meta.answers.iter().any(|a| a == &form.guess) {
        Ok(StatusCode::OK)
    } else {
        Err(SiteError::GuessIncorrect(form.puzzle))
    }
}

// ── Template rendering ────────────────────────────────────────────────────────

/// Render the shared layout template with the given puzzle record.
///
/// The template is read from disk on every request. Substituted values are
/// escaped unless the template itself marks them `safe`, which is how the
/// puzzle's own markup reaches the page unescaped.
async fn render_page(site: &SiteState, page: &Puzzle) -> Result<String, SiteError> {
    let template_path = site.layout_dir.join("index.html");
    let template = tokio::fs::read_to_string(&template_path)
        .await
        .map_err(|e| SiteError::Template(format!("read {}: {e}", template_path.display())))?;

    let context = Context::from_serialize(page)
        .map_err(|e| SiteError::Template(format!("context: {e}")))?;
    Tera::one_off(&template, &context, true).map_err(|e| SiteError::Template(format!("render: {e}")))
}
