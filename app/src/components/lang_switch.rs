use leptos::prelude::*;

use crate::i18n::Lang;

const ACTIVE: &str = "rounded-full px-2.5 py-1 transition bg-sky-500 text-white";
const INACTIVE: &str = "rounded-full px-2.5 py-1 transition text-slate-300 hover:text-sky-300";

/// Floating EN/ES switch. It is the only writer of the page language.
pub fn component(lang: RwSignal<Lang>) -> impl IntoView {
    view! {
        <div class="fixed right-6 bottom-6 z-30">
            <div
                role="group"
                aria-label="Language"
                class="flex gap-1 items-center py-1 px-1 text-xs rounded-full border shadow-lg border-slate-700 bg-slate-900/90 shadow-slate-900/80 backdrop-blur"
            >
                {Lang::ALL
                    .into_iter()
                    .map(|option| {
                        let active = move || lang.get() == option;
                        view! {
                            <button
                                type="button"
                                aria-pressed=move || active().to_string()
                                class=move || if active() { ACTIVE } else { INACTIVE }
                                on:click=move |_| lang.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
