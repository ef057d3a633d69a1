use axum::{extract::State, response::Html};

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{demo_watermark, Role, RoleLayout};

/// GET /buyer
pub async fn buyer_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.config, Role::Buyer))
}

/// GET /agent
pub async fn agent_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.config, Role::Agent))
}

fn render_page(config: &AppConfig, role: Role) -> String {
    let body = format!(r#"<main id="app" data-role="{}"></main>"#, role.css_class());
    let watermark = if config.ui.show_demo_watermark { demo_watermark() } else { "" };

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title></head>",
            "<body>{content}{watermark}</body></html>"
        ),
        title = role.title(),
        content = RoleLayout::new(role).render(&body),
        watermark = watermark,
    )
}
