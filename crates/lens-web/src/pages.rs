//! Server-rendered page and result fragment

use crate::error::UPSTREAM_FAILURE_MESSAGE;
use crate::state::AppState;
use crate::view::ViewState;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use lens_analysis::render_blocks;
use minijinja::{Environment, context};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// Build the template environment with the embedded templates
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../templates/index.html"))?;
    env.add_template("result.html", include_str!("../templates/result.html"))?;
    env.add_template("error.html", include_str!("../templates/error.html"))?;
    Ok(env)
}

/// Render a named template into an axum response
fn render_template(state: &AppState, name: &str, ctx: minijinja::Value) -> Response {
    let rendered = state
        .templates
        .get_template(name)
        .and_then(|template| template.render(ctx));

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {e}"),
            )
                .into_response()
        }
    }
}

/// GET / - The analysis page
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    render_template(&state, "index.html", context! {})
}

/// POST /analyze form body
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    /// Raw ticker input
    pub ticker: String,
}

/// POST /analyze - Run one submission and return the rendered fragment
pub async fn analyze_fragment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let mut view = ViewState::Idle;

    if let Some(ticker) = view.submit(&form.ticker) {
        match state.analyst.analyze(&ticker).await {
            Ok(analysis) => view.resolve(analysis.text),
            Err(err) => {
                error!(error = %err, %ticker, "analysis failed");
                view.reject(UPSTREAM_FAILURE_MESSAGE);
            }
        }
    }

    render_view(&state, &view)
}

/// Render the fragment for a settled view state
fn render_view(state: &AppState, view: &ViewState) -> Response {
    match view {
        ViewState::Success { ticker, text } => {
            let blocks = render_blocks(text);
            render_template(state, "result.html", context! { ticker, blocks })
        }
        ViewState::Failed { message } => {
            render_template(state, "error.html", context! { message })
        }
        // A submission always settles in Success or Failed; the page itself
        // owns the idle and in-flight states.
        ViewState::Idle | ViewState::Loading { .. } => {
            render_template(state, "error.html", context! { message => UPSTREAM_FAILURE_MESSAGE })
        }
    }
}
