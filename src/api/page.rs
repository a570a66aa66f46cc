use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// 頁面渲染錯誤
#[derive(Error, Debug)]
pub enum PageError {
    #[error("模板渲染失敗: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// 頁面處理器的結果：渲染模板，或以 302 重定向到另一路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<T> {
    Render(T),
    Redirect(String),
}

impl<T> Page<T> {
    pub fn redirect(to: impl Into<String>) -> Self {
        Page::Redirect(to.into())
    }
}

impl<T: Template> Page<T> {
    /// 渲染為 HTML 字串，重定向時返回 `None`
    pub fn render(&self) -> Result<Option<String>, PageError> {
        match self {
            Page::Render(template) => Ok(Some(template.render()?)),
            Page::Redirect(_) => Ok(None),
        }
    }
}

impl<T: Template> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        match self {
            Page::Render(template) => match template.render() {
                Ok(html) => Html(html).into_response(),
                Err(err) => PageError::from(err).into_response(),
            },
            Page::Redirect(to) => (StatusCode::FOUND, [(header::LOCATION, to)]).into_response(),
        }
    }
}
