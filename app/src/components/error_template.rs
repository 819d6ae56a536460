//! Fallback page for routes the site does not serve.
//!
//! During SSR it also sets the response status from the first [`AppError`].

use http::status::StatusCode;
use icondata::BsArrowLeft;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

use crate::components::icons;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the [`AppError`]s out of an `Errors` map, ignoring other kinds.
fn app_errors(errors: &Errors) -> Vec<AppError> {
    errors
        .iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page.
///
/// `outside_errors` comes from the router fallback during SSR; `errors` is
/// the reactive map an error boundary hands over on the client. With neither,
/// the page reports a plain 404.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let mut errors = match (outside_errors, errors) {
        (Some(outside), _) => app_errors(&outside),
        (None, Some(signal)) => signal.with_untracked(app_errors),
        (None, None) => Vec::new(),
    };
    if errors.is_empty() {
        errors.push(AppError::NotFound);
    }

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>()
            && let Some(first) = errors.first()
        {
            response.set_status(first.status_code());
        }
    }

    div()
        .class("grid place-content-center px-4 min-h-screen text-center antialiased bg-slate-950 text-slate-100")
        .child((
            h1().class("mb-6 text-4xl font-semibold text-sky-400").child(
                errors
                    .iter()
                    .map(|error| format!("{} | {error}", error.status_code().as_u16()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            p().class("mb-6 text-sm text-slate-300")
                .child("This page does not exist. / Esta página no existe."),
            a().href("/")
                .class("inline-flex gap-2 justify-center items-center text-sm font-semibold text-sky-300 hover:text-sky-200")
                .child((icons::icon(BsArrowLeft, "h-4 w-4"), "Juan Pablo Solís Ruiz")),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_app_errors_are_extracted() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        let extracted = app_errors(&errors);
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].status_code(), StatusCode::NOT_FOUND);
    }
}
