use crate::views::helpers::render_notices;
use crate::views::layout::{render_layout, template_env, APP_ICON, APP_TITLE};
use assessment_recommender::{cards::AssessmentCard, config::DEFAULT_MAX_RESULTS, session::Session};
use minijinja::context;

const QUERY_PLACEHOLDER: &str = "Example: I'm hiring for data analysts who can interpret business data and need assessments under 30 minutes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Query,
    Url,
}

pub fn render_unavailable_page(session: &Session) -> String {
    let content = format!(
        r#"<h1 class="h3 mb-3">{icon} {title}</h1>
        {notices}"#,
        icon = APP_ICON,
        title = APP_TITLE,
        notices = render_notices(session.notices()),
    );
    render_layout(APP_TITLE, &content)
}

pub fn render_home_page(session: &Session, tab: ActiveTab, cards: &[AssessmentCard]) -> String {
    let (query_active, url_active) = match tab {
        ActiveTab::Query => ("active", ""),
        ActiveTab::Url => ("", "active"),
    };
    let (query_hidden, url_hidden) = match tab {
        ActiveTab::Query => ("", "hidden"),
        ActiveTab::Url => ("hidden", ""),
    };

    let scraped = session
        .scraped_description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(|text| {
            format!(
                r#"<details class="mt-3" open>
              <summary>Scraped job description</summary>
              <p class="small text-muted mt-2">{text}</p>
            </details>"#,
                text = html_escape::encode_text(text),
            )
        })
        .unwrap_or_default();

    let content = format!(
        r##"<h1 class="h3 mb-2">{icon} {title}</h1>
        <p class="text-muted">This app recommends SHL assessments based on your job description or hiring needs.
        You can enter text or provide a URL for a job description.</p>
        {notices}
        <ul class="nav nav-tabs mb-3">
          <li class="nav-item"><a class="nav-link {query_active}" href="#query" data-tab="query">Enter Query</a></li>
          <li class="nav-item"><a class="nav-link {url_active}" href="#url" data-tab="url">Job Description URL</a></li>
        </ul>
        <section id="tab-query" {query_hidden}>
          <form method="post" action="/recommend">
            <label class="form-label" for="query">Enter your query:</label>
            <textarea class="form-control mb-2" id="query" name="query" rows="6" placeholder="{placeholder}">{query}</textarea>
            <input type="hidden" name="max_results" value="{max_results}">
            <button class="btn btn-primary" type="submit">🔍 Get Recommendations</button>
          </form>
        </section>
        <section id="tab-url" {url_hidden}>
          <form method="post" action="/recommend/url">
            <label class="form-label" for="url">Job description URL:</label>
            <input class="form-control mb-2" id="url" name="url" type="url" value="{url}" placeholder="https://careers.example.com/jobs/data-analyst">
            <input type="hidden" name="max_results" value="{max_results}">
            <button class="btn btn-primary" type="submit">🔍 Get Recommendations</button>
          </form>
          {scraped}
        </section>
        {results}
        <script>
          document.querySelectorAll('[data-tab]').forEach((link) => {{
            link.addEventListener('click', (event) => {{
              event.preventDefault();
              const target = link.dataset.tab;
              document.querySelectorAll('[data-tab]').forEach((other) => other.classList.toggle('active', other === link));
              document.getElementById('tab-query').hidden = target !== 'query';
              document.getElementById('tab-url').hidden = target !== 'url';
            }});
          }});
        </script>"##,
        icon = APP_ICON,
        title = APP_TITLE,
        notices = render_notices(session.notices()),
        query_active = query_active,
        url_active = url_active,
        query_hidden = query_hidden,
        url_hidden = url_hidden,
        placeholder = html_escape::encode_double_quoted_attribute(QUERY_PLACEHOLDER),
        query = html_escape::encode_text(&session.query),
        url = html_escape::encode_double_quoted_attribute(&session.job_url),
        max_results = DEFAULT_MAX_RESULTS,
        scraped = scraped,
        results = render_assessment_cards(cards),
    );

    render_layout(APP_TITLE, &content)
}

pub fn render_assessment_cards(cards: &[AssessmentCard]) -> String {
    if cards.is_empty() {
        return String::new();
    }

    template_env()
        .get_template("partials/assessment_cards.html")
        .and_then(|template| template.render(context! { cards => cards }))
        .unwrap_or_else(|err| format!("Template error: {err}"))
}
