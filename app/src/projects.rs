//! The "Research & Projects" section: two filter rows, the card grid and the
//! detail dialog for the selected card.

use leptos::prelude::*;

use crate::data::{PROJECTS, project_from_fragment};
use crate::filter::{Facet, ProjectFilter, category_options, empty_message, kind_options};
use crate::i18n::{Lang, Text};
use crate::modal;
use crate::types::Project;

const TITLE: Text = Text::new("Research & Projects", "Investigación y Proyectos");
const SUBTITLE: Text = Text::new(
    "Selected work across physics, engineering, and computation.",
    "Trabajo seleccionado en física, ingeniería y cómputo.",
);
const DETAILS: Text = Text::new("View details", "Ver detalles");

#[must_use]
pub const fn pill_class(active: bool) -> &'static str {
    if active {
        "rounded-full border px-4 py-1.5 text-xs font-semibold transition border-sky-500 bg-sky-500 text-white shadow shadow-sky-500/30"
    } else {
        "rounded-full border px-4 py-1.5 text-xs font-semibold transition border-slate-700 bg-slate-950/30 text-slate-200 hover:border-sky-500/70 hover:bg-slate-900/40"
    }
}

fn card(
    project: &'static Project,
    lang: Signal<Lang>,
    selected: RwSignal<Option<&'static Project>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| selected.set(Some(project))
            class="group flex flex-col overflow-hidden rounded-3xl border border-slate-800 bg-slate-950/60 text-left shadow-sm ring-1 ring-transparent transition hover:-translate-y-1 hover:border-slate-700 hover:ring-sky-500/20 motion-reduce:hover:translate-y-0"
        >
            <div class="relative aspect-[16/9] overflow-hidden bg-slate-900">
                <img
                    src=project.image
                    alt=move || project.title.get(lang.get())
                    loading="lazy"
                    class="object-cover w-full h-full transition duration-500 group-hover:scale-[1.03]"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-slate-950/70 via-slate-950/10 to-transparent"></div>
                <span class="absolute left-3 top-3 rounded-full bg-slate-950/70 px-3 py-1 text-[11px] font-semibold text-sky-200 ring-1 ring-slate-700/60 backdrop-blur">
                    {move || project.category.label().get(lang.get())}
                </span>
            </div>
            <div class="flex flex-col flex-1 gap-2 p-5">
                <h3 class="text-sm font-semibold md:text-base text-slate-50">
                    {move || project.title.get(lang.get())}
                </h3>
                <p class="text-xs md:text-sm line-clamp-3 text-slate-300">
                    {move || project.short_description.get(lang.get())}
                </p>
                <div class="pt-2 mt-auto text-xs font-semibold text-sky-400">
                    {move || DETAILS.get(lang.get())}
                    " "
                    <span class="opacity-80">"→"</span>
                </div>
            </div>
        </button>
    }
}

pub fn component(lang: Signal<Lang>) -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());
    let selected = RwSignal::new(None::<&'static Project>);
    let close = Callback::new(move |()| selected.set(None));
    let visible = Memo::new(move |_| filter.get().apply(PROJECTS));

    // A link ending in `#<project id>` opens that project's dialog on load.
    Effect::new(move |_| {
        let fragment = window().location().hash().unwrap_or_default();
        if let Some(project) = project_from_fragment(&fragment) {
            selected.set(Some(project));
        }
    });

    let category_row = move || {
        category_options(PROJECTS)
            .into_iter()
            .map(|option| {
                let active = move || filter.get().category == option;
                view! {
                    <button
                        type="button"
                        aria-pressed=move || active().to_string()
                        class=move || pill_class(active())
                        on:click=move |_| filter.update(|f| f.select_category(option, PROJECTS))
                    >
                        {move || option.label().get(lang.get())}
                    </button>
                }
            })
            .collect_view()
    };

    let kind_row = move || {
        kind_options(PROJECTS, filter.get().category)
            .into_iter()
            .map(|option: Facet<_>| {
                let active = move || filter.get().kind == option;
                view! {
                    <button
                        type="button"
                        aria-pressed=move || active().to_string()
                        class=move || pill_class(active())
                        on:click=move |_| filter.update(|f| f.select_kind(option))
                    >
                        {move || option.label().get(lang.get())}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <section id="projects" class="py-20 scroll-mt-28 motion-safe:animate-fade-up">
            <div class="space-y-10">
                <div class="space-y-3 text-center">
                    <h2 class="text-4xl font-semibold text-sky-400 md:text-5xl">{move || TITLE.get(lang.get())}</h2>
                    <p class="mx-auto max-w-2xl text-sm md:text-base text-slate-300">
                        {move || SUBTITLE.get(lang.get())}
                    </p>
                </div>

                <div class="space-y-3">
                    <div role="group" class="flex flex-wrap gap-3 justify-center">{category_row}</div>
                    <div role="group" class="flex flex-wrap gap-2 justify-center">{kind_row}</div>
                </div>

                {move || match empty_message(&visible.get(), lang.get()) {
                    Some(message) => view! {
                        <div class="text-sm text-center text-slate-300">{message}</div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {visible
                                .get()
                                .into_iter()
                                .map(|project| card(project, lang, selected))
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            {move || selected.get().map(|project| modal::component(project, lang, close))}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_class_marks_active_state() {
        assert!(pill_class(true).contains("bg-sky-500"));
        assert!(!pill_class(false).contains("bg-sky-500 "));
        assert_ne!(pill_class(true), pill_class(false));
    }

    #[test]
    fn test_section_labels_are_bilingual() {
        for text in [TITLE, SUBTITLE, DETAILS] {
            assert!(text.is_complete());
        }
    }
}
