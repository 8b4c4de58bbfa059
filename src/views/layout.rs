use minijinja::{context, Environment};
use std::sync::OnceLock;

pub const APP_TITLE: &str = "SHL Assessment Recommender";
pub const APP_ICON: &str = "🧪";

pub fn render_layout(title: &str, content: &str) -> String {
    let env = template_env();
    let context = context! {
        title => title,
        app_title => APP_TITLE,
        app_icon => APP_ICON,
        content => content,
    };

    env.get_template("layouts/base.html")
        .and_then(|template| template.render(context))
        .unwrap_or_else(|err| format!("Template error: {err}"))
}

pub fn template_env() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(templates_dir()));
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
        env
    })
}

fn templates_dir() -> String {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .to_string_lossy()
        .to_string()
}
