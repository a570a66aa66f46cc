use askama::Template;
use axum::extract::{Path, State};
use tracing::debug;

use crate::api::routes::PORTAL_PATH;
use crate::api::{AppState, Page};
use crate::first_run::FirstRunGate;

/// 應用詳情頁面模板
///
/// 應用識別碼原樣傳入模板，不做查詢或驗證，由模板引擎負責轉義。
#[derive(Template, Debug, Clone, PartialEq, Eq)]
#[template(path = "app.html")]
pub struct AppTemplate {
    pub app: String,
}

/// 決定應用詳情頁面的結果
///
/// 只有識別碼缺失時重定向到入口頁面，其餘任何值（包括空白）都原樣渲染。
pub fn app_page(gate: &FirstRunGate, app: Option<String>) -> Page<AppTemplate> {
    if let Some(setup_path) = gate.check() {
        debug!("首次運行，重定向到設定頁面: {}", setup_path);
        return Page::redirect(setup_path);
    }

    match app {
        Some(app) => Page::Render(AppTemplate { app }),
        None => {
            debug!("缺少應用識別碼，重定向到入口頁面");
            Page::redirect(PORTAL_PATH)
        }
    }
}

/// `GET /app/{app}`
pub async fn app(State(state): State<AppState>, Path(app): Path<String>) -> Page<AppTemplate> {
    app_page(&state.first_run, Some(app))
}

/// `GET /app`，沒有識別碼
pub async fn app_index(State(state): State<AppState>) -> Page<AppTemplate> {
    app_page(&state.first_run, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_run::FirstRun;
    use rstest::rstest;

    #[test]
    fn test_app_renders_identifier() {
        let page = app_page(&FirstRunGate::disabled(), Some("netflix".to_string()));
        assert_eq!(page, Page::Render(AppTemplate { app: "netflix".to_string() }));

        let html = page.render().unwrap().unwrap();
        assert!(html.contains("netflix"));
    }

    #[test]
    fn test_missing_app_redirects_to_portal() {
        let page = app_page(&FirstRunGate::disabled(), None);
        assert_eq!(page, Page::redirect("/portal"));
    }

    #[rstest]
    #[case("   ")]
    #[case(" plex ")]
    fn test_whitespace_identifier_renders_as_is(#[case] app: &str) {
        let page = app_page(&FirstRunGate::disabled(), Some(app.to_string()));
        assert_eq!(page, Page::Render(AppTemplate { app: app.to_string() }));
    }

    #[test]
    fn test_first_run_checked_before_missing_app() {
        let gate = FirstRunGate::new(true, FirstRun { is_first_run: true }, "/setup");
        assert_eq!(app_page(&gate, None), Page::redirect("/setup"));
        assert_eq!(app_page(&gate, Some("plex".to_string())), Page::redirect("/setup"));
    }

    #[test]
    fn test_app_identifier_is_escaped() {
        let page = app_page(&FirstRunGate::disabled(), Some("<script>".to_string()));
        let html = page.render().unwrap().unwrap();
        assert!(!html.contains("<script>"));
    }
}
