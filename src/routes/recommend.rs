use crate::forms::{parse_max_results, QueryForm, UrlForm};
use crate::routes::AppState;
use crate::views::home::{render_home_page, render_unavailable_page, ActiveTab};
use assessment_recommender::{cards::build_cards, session::Session};
use axum::{extract::State, http::StatusCode, response::Html, Form};
use tracing::info;

type PageResult = (StatusCode, Html<String>);

pub async fn home_page(State(state): State<AppState>) -> PageResult {
    let mut session = state.new_session();
    if let Some(unavailable) = gate(&state, &mut session).await {
        return unavailable;
    }
    (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Query, &[])))
}

pub async fn submit_query(State(state): State<AppState>, Form(form): Form<QueryForm>) -> PageResult {
    let mut session = state.new_session();
    if let Some(unavailable) = gate(&state, &mut session).await {
        return unavailable;
    }

    session.query = form.query;
    if session.query.is_empty() {
        return (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Query, &[])));
    }

    let max_results = parse_max_results(form.max_results.as_deref());
    let query = session.query.clone();
    let assessments = state
        .client
        .get_recommendations(&mut session, &query, max_results)
        .await;
    info!(count = assessments.len(), "rendering recommendations for typed query");

    let cards = build_cards(&assessments);
    (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Query, &cards)))
}

pub async fn submit_url(State(state): State<AppState>, Form(form): Form<UrlForm>) -> PageResult {
    let mut session = state.new_session();
    if let Some(unavailable) = gate(&state, &mut session).await {
        return unavailable;
    }

    session.job_url = form.url;
    if session.job_url.is_empty() {
        return (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Url, &[])));
    }

    let description = match state.scraper.scrape(&session.job_url).await {
        Ok(text) => text,
        Err(err) => {
            session.error(err.to_string());
            return (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Url, &[])));
        }
    };
    session.scraped_description = Some(description.clone());

    if description.trim().is_empty() {
        session.warning("No paragraph text was found at that URL.");
        return (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Url, &[])));
    }

    let max_results = parse_max_results(form.max_results.as_deref());
    let assessments = state
        .client
        .get_recommendations(&mut session, &description, max_results)
        .await;
    info!(count = assessments.len(), "rendering recommendations for scraped description");

    let cards = build_cards(&assessments);
    (StatusCode::OK, Html(render_home_page(&session, ActiveTab::Url, &cards)))
}

/// A failed health check replaces the whole page with the blocking error.
async fn gate(state: &AppState, session: &mut Session) -> Option<PageResult> {
    if session.ensure_backend(&state.client).await {
        None
    } else {
        Some((
            StatusCode::SERVICE_UNAVAILABLE,
            Html(render_unavailable_page(session)),
        ))
    }
}
