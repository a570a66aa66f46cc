use askama::Template;
use axum::extract::State;
use tracing::debug;

use crate::api::{AppState, Page};
use crate::first_run::FirstRunGate;

/// 入口頁面模板，無上下文資料
#[derive(Template, Debug, Clone, PartialEq, Eq)]
#[template(path = "portal.html")]
pub struct PortalTemplate;

/// 決定入口頁面的結果
pub fn portal_page(gate: &FirstRunGate) -> Page<PortalTemplate> {
    if let Some(setup_path) = gate.check() {
        debug!("首次運行，重定向到設定頁面: {}", setup_path);
        return Page::redirect(setup_path);
    }

    Page::Render(PortalTemplate)
}

pub async fn portal(State(state): State<AppState>) -> Page<PortalTemplate> {
    portal_page(&state.first_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_run::FirstRun;

    #[test]
    fn test_portal_renders_without_context() {
        let page = portal_page(&FirstRunGate::disabled());
        assert_eq!(page, Page::Render(PortalTemplate));

        let html = page.render().unwrap().unwrap();
        assert!(html.contains("<h1>Nateflix</h1>"));
    }

    #[test]
    fn test_portal_ignores_first_run_when_gate_disabled() {
        let gate = FirstRunGate::new(false, FirstRun { is_first_run: true }, "/setup");
        assert_eq!(portal_page(&gate), Page::Render(PortalTemplate));
    }

    #[test]
    fn test_portal_redirects_to_setup_on_first_run() {
        let gate = FirstRunGate::new(true, FirstRun { is_first_run: true }, "/setup");
        assert_eq!(portal_page(&gate), Page::redirect("/setup"));
    }
}
