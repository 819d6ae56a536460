use leptos::prelude::*;

use crate::components::icons;
use crate::i18n::{Lang, Text};

pub const NAME: &str = "Juan Pablo Solís Ruiz";

/// Curriculum vitae, one document per language.
pub const CV: Text = Text::new("/cv/JuanPabloSolis_CV.pdf", "/cv/JuanPabloSolis_CV_ES.pdf");

const DEGREE: Text = Text::new("B.S. in Engineering Physics", "Ingeniería Física Industrial");
const TAGLINE: Text = Text::new(
    "Bridging theoretical physics and practical engineering to solve complex problems through computation, experimentation, and innovation.",
    "Uniendo la física teórica y la ingeniería aplicada para resolver problemas complejos mediante cómputo, experimentación e innovación.",
);

pub fn component(lang: Signal<Lang>) -> impl IntoView {
    view! {
        <section
            id="hero"
            class="flex flex-col gap-8 justify-center items-center min-h-screen text-center motion-safe:animate-fade-up"
        >
            <div class="py-1 px-4 text-xs font-medium text-sky-300 rounded-full border border-sky-400/40 bg-sky-500/10">
                {move || DEGREE.get(lang.get())}
            </div>
            <div class="space-y-4">
                <h1 class="text-5xl font-extrabold tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-sky-300 via-sky-100 to-purple-400 md:text-6xl">
                    {NAME}
                </h1>
                <p class="mx-auto max-w-2xl text-base md:text-lg text-slate-200">
                    {move || TAGLINE.get(lang.get())}
                </p>
            </div>
            <div class="flex flex-wrap gap-4 justify-center items-center">
                <a
                    href="#projects"
                    class="py-2.5 px-7 text-sm font-semibold text-white bg-sky-500 rounded-full shadow-lg transition hover:bg-sky-400 hover:-translate-y-0.5 shadow-sky-500/40"
                >
                    {move || Text::new("View Projects", "Ver Proyectos").get(lang.get())}
                </a>
                <a
                    href=move || CV.get(lang.get())
                    download
                    class="py-2.5 px-7 text-sm font-semibold rounded-full border shadow-sm transition hover:border-sky-400 border-slate-600 bg-slate-950/70 text-slate-100 hover:bg-slate-900"
                >
                    {move || Text::new("Download CV", "Descargar CV").get(lang.get())}
                </a>
            </div>
            <div class="mt-2">{icons::component()}</div>
        </section>
    }
}
