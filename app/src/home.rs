//! The single page of the site.
//!
//! It owns the language signal. Every section receives it read-only and the
//! floating switch is its only writer, so a toggle re-renders all text in
//! one reactive pass.

use chrono::{Datelike as _, Utc};
use leptos::{
    html::{div, footer, main},
    prelude::*,
};
use leptos_meta::{Html, Title};

use crate::components::lang_switch;
use crate::hero::{self, NAME};
use crate::i18n::{Lang, Text};
use crate::{contact, projects, skills};

pub const PAGE_TITLE: Text = Text::new(
    "Juan Pablo Solís Ruiz \u{2013} Engineering Physics Portfolio",
    "Juan Pablo Solís Ruiz \u{2013} Portafolio de Ingeniería Física",
);

/// Copyright line for the footer.
#[must_use]
pub fn footer_line(year: i32) -> String {
    format!("\u{a9} {year} {NAME} \u{b7} Portfolio")
}

fn background() -> impl IntoView {
    div().class("fixed inset-0 z-0 pointer-events-none").child((
        div().class("absolute inset-0 bg-[radial-gradient(circle_at_top,_rgba(56,189,248,0.22)_0,_transparent_55%),radial-gradient(circle_at_bottom,_rgba(168,85,247,0.24)_0,_transparent_55%)]"),
        div().class("absolute left-1/2 top-1/3 rounded-full -translate-x-1/2 -translate-y-1/2 h-[26rem] w-[26rem] bg-sky-500/70 blur-[120px] mix-blend-screen opacity-60 motion-safe:animate-breathe"),
    ))
}

fn footer_component() -> impl IntoView {
    footer()
        .class("px-5 pb-6 mx-auto max-w-6xl text-xs text-center text-slate-400")
        .child(footer_line(Utc::now().year()))
}

pub fn component() -> impl IntoView {
    let lang = RwSignal::new(Lang::default());
    let read: Signal<Lang> = lang.into();

    view! {
        <Html {..} lang=move || lang.get().code() />
        <Title text=move || PAGE_TITLE.get(lang.get()) />
        <div class="overflow-hidden relative min-h-screen bg-slate-950 text-slate-100">
            {background()}
            <div class="relative z-10">
                {main().class("px-5 pt-8 pb-20 mx-auto max-w-6xl").child((
                    hero::component(read),
                    projects::component(read),
                    skills::component(read),
                    contact::component(read),
                ))}
                {footer_component()}
                {lang_switch::component(lang)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_line() {
        assert_eq!(
            footer_line(2026),
            "\u{a9} 2026 Juan Pablo Solís Ruiz \u{b7} Portfolio"
        );
    }

    #[test]
    fn test_page_title_is_bilingual() {
        assert!(PAGE_TITLE.is_complete());
        assert_ne!(PAGE_TITLE.get(Lang::En), PAGE_TITLE.get(Lang::Es));
    }
}
