//! Project detail dialog.
//!
//! While mounted the dialog owns three browser resources: the body's
//! `overflow` style, the element focused before it opened, and a window
//! `keydown` listener (Escape closes, Tab cycles within the dialog). All of
//! them live in a [`ModalGuard`] whose `Drop` hands them back, so every way
//! of closing (Escape, backdrop, close button, unmount) releases them.

use icondata::{BsBoxArrowUpRight, BsFileEarmarkPdf, BsGithub, BsXLg};
use leptos::{ev, html, leptos_dom::helpers::WindowListenerHandle, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::components::icons;
use crate::i18n::{Lang, Text};
use crate::types::{Project, is_external_url};

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), textarea:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex='-1'])";

const OVERVIEW: Text = Text::new("Overview", "Resumen");
const ACHIEVEMENTS: Text = Text::new("Key Achievements", "Logros Clave");
const TECHNOLOGIES: Text = Text::new("Technologies & Tools", "Tecnologías y Herramientas");
const LINKS: Text = Text::new("Links", "Enlaces");
const VIEW_GITHUB: Text = Text::new("View GitHub", "Ver GitHub");
const OPEN_PDF: Text = Text::new("Open PDF", "Abrir PDF");
const DOWNLOAD_PDF: Text = Text::new("Download PDF", "Descargar PDF");
const OPEN_WEBSITE: Text = Text::new("Open website", "Abrir sitio");
const CLOSE: Text = Text::new("Close", "Cerrar");

const LINK_CLASS: &str = "inline-flex gap-2 items-center py-2 px-4 text-xs font-semibold rounded-full border transition focus:outline-none border-slate-700 bg-slate-950/30 text-slate-100 hover:bg-slate-900/60 focus-visible:ring-2 focus-visible:ring-sky-400/70";

/// `id` of the dialog heading, referenced by `aria-labelledby`.
#[must_use]
pub fn title_id(project: &Project) -> String {
    format!("project-modal-title-{}", project.id)
}

/// Where Tab should move focus to keep it inside the dialog, given `len`
/// focusable elements and the index of the focused one (`None` when focus
/// is outside). `None` means the browser's default order already stays
/// inside.
#[must_use]
pub const fn trap_target(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(index), false) if index >= last => Some(0),
        _ => None,
    }
}

/// How a PDF link is presented: external documents open in a new tab,
/// local files are downloaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PdfPresentation {
    pub label: Text,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    /// Value of the `download` attribute, omitted when `None`.
    pub download: Option<&'static str>,
}

#[must_use]
pub fn pdf_presentation(href: &str) -> PdfPresentation {
    if is_external_url(href) {
        PdfPresentation {
            label: OPEN_PDF,
            target: Some("_blank"),
            rel: Some("noreferrer"),
            download: None,
        }
    } else {
        PdfPresentation {
            label: DOWNLOAD_PDF,
            target: None,
            rel: None,
            download: Some(""),
        }
    }
}

/// Browser state taken over while the dialog is open.
struct ModalGuard {
    previous_overflow: String,
    previous_focus: Option<HtmlElement>,
    keydown: Option<WindowListenerHandle>,
}

impl ModalGuard {
    fn acquire(keydown: WindowListenerHandle) -> Self {
        let document = document();
        let previous_focus = document
            .active_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let previous_overflow = document
            .body()
            .map(|body| {
                let style = body.style();
                let previous = style.get_property_value("overflow").unwrap_or_default();
                _ = style.set_property("overflow", "hidden");
                previous
            })
            .unwrap_or_default();

        Self {
            previous_overflow,
            previous_focus,
            keydown: Some(keydown),
        }
    }
}

impl Drop for ModalGuard {
    fn drop(&mut self) {
        if let Some(keydown) = self.keydown.take() {
            keydown.remove();
        }
        if let Some(body) = document().body() {
            _ = body.style().set_property("overflow", &self.previous_overflow);
        }
        if let Some(element) = self.previous_focus.take() {
            _ = element.focus();
        }
    }
}

/// Keeps Tab and Shift+Tab cycling among the dialog's focusable elements.
fn trap_focus(ev: &KeyboardEvent, panel: &web_sys::HtmlDivElement) {
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE) else {
        return;
    };
    let focusable: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    let active: Option<Node> = document().active_element().map(Into::into);
    let current = active.as_ref().and_then(|active| {
        focusable
            .iter()
            .position(|element| element.is_same_node(Some(active)))
    });

    if let Some(target) = trap_target(focusable.len(), current, ev.shift_key())
        && let Some(element) = focusable.get(target)
    {
        ev.prevent_default();
        _ = element.focus();
    }
}

/// True when the event started on `element` itself rather than a child.
fn is_own_target(ev: &MouseEvent, element: &web_sys::HtmlDivElement) -> bool {
    let own: &Node = element.as_ref();
    ev.target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|target| target.is_same_node(Some(own)))
}

fn pdf_button(href: &'static str, lang: Signal<Lang>) -> impl IntoView {
    let pdf = pdf_presentation(href);
    view! {
        <a href=href target=pdf.target rel=pdf.rel download=pdf.download class=LINK_CLASS>
            {icons::icon(BsFileEarmarkPdf, "h-4 w-4")}
            {move || pdf.label.get(lang.get())}
            {pdf.target.map(|_| icons::icon(BsBoxArrowUpRight, "h-4 w-4 opacity-80"))}
        </a>
    }
}

fn links(project: &'static Project, lang: Signal<Lang>) -> impl IntoView {
    let links = project.links;
    (!links.is_empty()).then(|| {
        view! {
            <div class="space-y-3">
                <h3 class="text-sm font-semibold text-slate-200">{move || LINKS.get(lang.get())}</h3>
                <div class="flex flex-wrap gap-3">
                    {links.github.map(|github| {
                        view! {
                            <a
                                href=github
                                target="_blank"
                                rel="noreferrer"
                                class="inline-flex gap-2 items-center py-2 px-4 text-xs font-semibold text-white bg-sky-500 rounded-full transition hover:bg-sky-400 focus:outline-none focus-visible:ring-2 focus-visible:ring-sky-400/70"
                            >
                                {icons::icon(BsGithub, "h-4 w-4")}
                                {move || VIEW_GITHUB.get(lang.get())}
                                {icons::icon(BsBoxArrowUpRight, "h-4 w-4 opacity-80")}
                            </a>
                        }
                    })}
                    {move || links.pdf.map(|pdf| pdf_button(pdf.resolve(lang.get()), lang))}
                    {links.website.map(|website| {
                        view! {
                            <a href=website target="_blank" rel="noreferrer" class=LINK_CLASS>
                                {icons::icon(BsBoxArrowUpRight, "h-4 w-4")}
                                {move || OPEN_WEBSITE.get(lang.get())}
                            </a>
                        }
                    })}
                </div>
            </div>
        }
    })
}

/// Renders the dialog for `project`. Mount it only while a project is
/// selected; unmounting is what closes it.
pub fn component(
    project: &'static Project,
    lang: Signal<Lang>,
    on_close: Callback<()>,
) -> impl IntoView {
    let backdrop = NodeRef::<html::Div>::new();
    let panel = NodeRef::<html::Div>::new();
    let close_button = NodeRef::<html::Button>::new();
    let guard = StoredValue::new_local(None::<ModalGuard>);

    // Effects only run in the browser, after the dialog is in the DOM.
    Effect::new(move || {
        let keydown = window_event_listener(ev::keydown, move |ev| match ev.key().as_str() {
            "Escape" => on_close.run(()),
            "Tab" => {
                if let Some(panel) = panel.get_untracked() {
                    trap_focus(&ev, &panel);
                }
            }
            _ => {}
        });
        guard.set_value(Some(ModalGuard::acquire(keydown)));
        request_animation_frame(move || {
            if let Some(button) = close_button.get_untracked() {
                _ = button.focus();
            }
        });
    });
    on_cleanup(move || {
        _ = guard.try_update_value(Option::take);
    });

    let heading_id = title_id(project);
    let labelled_by = heading_id.clone();

    view! {
        <div
            node_ref=backdrop
            role="dialog"
            aria-modal="true"
            aria-labelledby=labelled_by
            class="flex overflow-y-auto fixed inset-0 z-50 justify-center items-start py-10 px-4 bg-black/70 backdrop-blur-sm motion-safe:animate-fade-in"
            on:mousedown=move |ev| {
                if backdrop.get_untracked().is_some_and(|element| is_own_target(&ev, &element)) {
                    on_close.run(());
                }
            }
        >
            <div
                node_ref=panel
                class="overflow-hidden relative w-full max-w-3xl rounded-3xl ring-1 shadow-2xl bg-slate-950/80 ring-slate-800"
            >
                <button
                    node_ref=close_button
                    type="button"
                    on:click=move |_| on_close.run(())
                    aria-label=move || CLOSE.get(lang.get())
                    class="inline-flex absolute top-4 right-4 z-10 gap-2 items-center py-2 px-3 text-xs font-semibold rounded-full ring-1 transition hover:bg-slate-900 focus:outline-none bg-slate-900/70 text-slate-200 ring-slate-700/70 backdrop-blur focus-visible:ring-2 focus-visible:ring-sky-400/70"
                >
                    {icons::icon(BsXLg, "h-4 w-4")}
                    <span class="hidden sm:inline">{move || CLOSE.get(lang.get())}</span>
                </button>

                <div class="relative w-full aspect-[16/9] bg-slate-900">
                    <img
                        src=project.detail_image()
                        alt=move || project.title.get(lang.get())
                        class="object-cover w-full h-full"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t to-transparent from-slate-950/80 via-slate-950/20"></div>
                    <div class="flex absolute top-5 left-5 flex-wrap gap-2 items-center">
                        <span class="py-1 px-3 font-semibold text-sky-200 rounded-full ring-1 text-[11px] bg-slate-950/70 ring-slate-700/70 backdrop-blur">
                            {move || project.category.label().get(lang.get())}
                        </span>
                        <span class="py-1 px-3 font-semibold rounded-full ring-1 text-[11px] bg-slate-950/70 text-slate-200 ring-slate-700/70 backdrop-blur">
                            {move || project.kind.label().get(lang.get())}
                        </span>
                    </div>
                </div>

                <div class="p-6 space-y-7 md:p-8">
                    <div class="space-y-2">
                        <h2 id=heading_id class="text-2xl font-semibold tracking-tight md:text-3xl text-slate-50">
                            {move || project.title.get(lang.get())}
                        </h2>
                        <h3 class="sr-only">{move || OVERVIEW.get(lang.get())}</h3>
                        <p class="text-sm leading-relaxed text-slate-300">
                            {move || project.overview().get(lang.get())}
                        </p>
                    </div>

                    {(!project.achievements.is_empty()).then(|| view! {
                        <div class="space-y-3">
                            <h3 class="text-sm font-semibold text-slate-200">{move || ACHIEVEMENTS.get(lang.get())}</h3>
                            <ul class="space-y-2">
                                {project.achievements.iter().map(|achievement| view! {
                                    <li class="flex gap-3 text-sm leading-relaxed text-slate-200">
                                        <span class="inline-block mt-1 w-2 h-2 rounded-full shrink-0 bg-sky-400/90"></span>
                                        <span>{move || achievement.get(lang.get())}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    })}

                    {(!project.technologies.is_empty()).then(|| view! {
                        <div class="space-y-3">
                            <h3 class="text-sm font-semibold text-slate-200">{move || TECHNOLOGIES.get(lang.get())}</h3>
                            <div class="flex flex-wrap gap-2">
                                {project.technologies.iter().map(|tech| view! {
                                    <span class="py-1 px-3 font-semibold rounded-full ring-1 text-[11px] bg-slate-900/60 text-slate-200 ring-slate-800">
                                        {*tech}
                                    </span>
                                }).collect_view()}
                            </div>
                        </div>
                    })}

                    {links(project, lang)}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PROJECTS;

    #[test]
    fn test_tab_wraps_from_last_to_first() {
        assert_eq!(trap_target(3, Some(2), false), Some(0));
    }

    #[test]
    fn test_shift_tab_wraps_from_first_to_last() {
        assert_eq!(trap_target(3, Some(0), true), Some(2));
    }

    #[test]
    fn test_inner_moves_use_browser_order() {
        assert_eq!(trap_target(3, Some(0), false), None);
        assert_eq!(trap_target(3, Some(1), false), None);
        assert_eq!(trap_target(3, Some(2), true), None);
    }

    #[test]
    fn test_focus_outside_dialog_is_pulled_in() {
        assert_eq!(trap_target(4, None, false), Some(0));
        assert_eq!(trap_target(4, None, true), Some(3));
    }

    #[test]
    fn test_single_focusable_element_keeps_focus() {
        assert_eq!(trap_target(1, Some(0), false), Some(0));
        assert_eq!(trap_target(1, Some(0), true), Some(0));
        assert_eq!(trap_target(0, None, false), None);
    }

    #[test]
    fn test_external_pdf_opens_in_new_tab() {
        let pdf = pdf_presentation("https://drive.google.com/file/d/abc/view");
        assert_eq!(pdf.label.get(Lang::En), "Open PDF");
        assert_eq!(pdf.label.get(Lang::Es), "Abrir PDF");
        assert_eq!(pdf.target, Some("_blank"));
        assert_eq!(pdf.download, None);
    }

    #[test]
    fn test_local_pdf_is_downloaded() {
        let pdf = pdf_presentation("/projects/grad-shafranov.pdf");
        assert_eq!(pdf.label.get(Lang::En), "Download PDF");
        assert_eq!(pdf.target, None);
        assert_eq!(pdf.rel, None);
        assert_eq!(pdf.download, Some(""));
    }

    #[test]
    fn test_heading_and_label_share_one_id() {
        for project in PROJECTS {
            let heading_id = title_id(project);
            assert_eq!(heading_id, title_id(project));
            assert!(heading_id.ends_with(project.id));
        }
    }

    #[test]
    fn test_title_id_is_unique_per_project() {
        let mut ids: Vec<String> = PROJECTS.iter().map(title_id).collect();
        assert_eq!(ids[0], format!("project-modal-title-{}", PROJECTS[0].id));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
