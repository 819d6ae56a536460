// Core application modules and components
use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
mod components;
#[cfg(feature = "ssr")]
pub mod config;
mod contact;
pub mod data;
pub mod filter;
#[cfg(feature = "ssr")]
pub mod form_client;
mod hero;
mod home;
pub mod i18n;
mod modal;
mod projects;
mod skills;
pub mod types;
pub mod validation;

pub use contact::SubmissionStatus;
pub use modal::{pdf_presentation, trap_target};
pub use skills::{CERTIFICATIONS, COMPETENCY_BADGES, SKILL_CARDS, visible_badges};

const DESCRIPTION: &str = "Portfolio of Juan Pablo Solís Ruiz: plasma physics simulations, engineering design and scientific computing.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta().name("description").content(DESCRIPTION),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
        )),
        body().class("bg-slate-950 antialiased").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <FlatRoutes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                error_template::component(Some(outside_errors), None)
            }>
                <Route path=StaticSegment("") view=home::component ssr=SsrMode::InOrder/>
            </FlatRoutes>
        </Router>
    }
}
