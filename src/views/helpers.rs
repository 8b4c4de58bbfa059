use assessment_recommender::session::{Notice, NoticeLevel};

pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            format!(
                r#"<div class="alert {class} mb-2" role="alert">{icon} {message}</div>"#,
                class = alert_class(notice.level),
                icon = notice_icon(notice.level),
                message = html_escape::encode_text(&notice.message),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn alert_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "alert-success",
        NoticeLevel::Info => "alert-info",
        NoticeLevel::Warning => "alert-warning",
        NoticeLevel::Error => "alert-danger",
    }
}

fn notice_icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✅",
        NoticeLevel::Info => "ℹ️",
        NoticeLevel::Warning | NoticeLevel::Error => "⚠️",
    }
}
