use crate::application::error::HttpError;
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        HttpError::from_error(
            err.source,
            StatusCode::INTERNAL_SERVER_ERROR,
            err.public_message,
            &err.error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Endpoint listed on the landing page.
pub struct EndpointLink {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

pub const API_ENDPOINTS: &[EndpointLink] = &[
    EndpointLink {
        method: "GET",
        path: "/api/hello",
        summary: "Cached greeting",
    },
    EndpointLink {
        method: "GET",
        path: "/api/users",
        summary: "List users",
    },
    EndpointLink {
        method: "POST",
        path: "/api/users",
        summary: "Create a user",
    },
    EndpointLink {
        method: "GET",
        path: "/api/messages",
        summary: "List messages with analytics",
    },
    EndpointLink {
        method: "POST",
        path: "/api/messages",
        summary: "Post a message",
    },
    EndpointLink {
        method: "GET",
        path: "/api/pandas-demo",
        summary: "Sample dataset statistics",
    },
    EndpointLink {
        method: "GET",
        path: "/api/health",
        summary: "Dependency health",
    },
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub endpoints: &'static [EndpointLink],
}

impl IndexTemplate {
    pub fn landing() -> Self {
        Self {
            title: "hellohub",
            endpoints: API_ENDPOINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_lists_every_endpoint() {
        let html = render_template(IndexTemplate::landing()).expect("render index");
        let body = html.0;

        assert!(body.starts_with("<!DOCTYPE html>"));
        for endpoint in API_ENDPOINTS {
            assert!(body.contains(endpoint.summary), "missing {}", endpoint.path);
        }
    }
}
