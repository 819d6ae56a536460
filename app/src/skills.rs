//! The "Skills & Expertise" section: skill cards, certifications and the
//! collapsible panel of institutional competency badges.

use icondata::{
    BsArrowUpRight, BsAward, BsBarChart, BsCodeSlash, BsCpu, BsPeople, BsRulers, BsStars, Icon,
};
use leptos::prelude::*;

use crate::components::icons;
use crate::i18n::{Lang, Text};

/// Badges shown before the panel is expanded with "Show all".
pub const BADGE_PREVIEW_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCard {
    pub icon: Icon,
    pub title: Text,
    pub items: &'static [Text],
    /// Tailwind gradient stops for the accent bar and icon tile.
    pub gradient: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    /// Credential state shown as a pill ("Verified", "Completed", ...).
    pub badge: Text,
    pub href: &'static str,
    pub topics: Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompetencyBadge {
    pub title: Text,
    pub issued: Text,
    pub href: &'static str,
    pub image: &'static str,
}

pub static SKILL_CARDS: &[SkillCard] = &[
    SkillCard {
        icon: BsCodeSlash,
        title: Text::new("Programming & Scientific Computing", "Programación y Cómputo Científico"),
        items: &[
            Text::new(
                "Python, Julia, MATLAB, C++ (scientific/engineering use)",
                "Python, Julia, MATLAB, C++ (uso científico/ingenieril)",
            ),
            Text::same("NumPy, SciPy, Pandas, Matplotlib"),
            Text::new(
                "Reproducible workflows: modular code, clear docs, version control",
                "Flujos reproducibles: código modular, documentación clara, control de versiones",
            ),
        ],
        gradient: "from-sky-400 to-cyan-300",
    },
    SkillCard {
        icon: BsCpu,
        title: Text::new("Simulation & Modelling", "Simulación y Modelado"),
        items: &[
            Text::new(
                "PIC, resistive MHD and two-fluid plasma models",
                "Modelos de plasma PIC, MHD resistivo y dos fluidos",
            ),
            Text::new(
                "Numerical methods for ODEs/PDEs; stability-minded implementations",
                "Métodos numéricos para EDOs/EDPs; implementaciones orientadas a estabilidad",
            ),
            Text::new(
                "Spectral/Fourier tools; diagnostics-driven analysis",
                "Herramientas espectrales/Fourier; análisis guiado por diagnósticos",
            ),
        ],
        gradient: "from-purple-400 to-sky-300",
    },
    SkillCard {
        icon: BsStars,
        title: Text::new("Fusion & Plasma Physics", "Fusión y Física de Plasmas"),
        items: &[
            Text::new(
                "Tokamak & Z-pinch equilibrium concepts and stability intuition",
                "Conceptos de equilibrio y estabilidad en tokamaks y Z-pinch",
            ),
            Text::new(
                "Waves, instabilities and dispersion (linking theory ↔ simulation)",
                "Ondas, inestabilidades y dispersión (conectando teoría ↔ simulación)",
            ),
            Text::new(
                "Grad–Shafranov workflows and FreeGSNKE-based diagnostics",
                "Flujos Grad–Shafranov y diagnósticos con FreeGSNKE",
            ),
        ],
        gradient: "from-indigo-400 to-purple-300",
    },
    SkillCard {
        icon: BsRulers,
        title: Text::new("RF, Antennas & Experimental", "RF, Antenas y Experimental"),
        items: &[
            Text::new(
                "CubeSat S-band RF links; practical integration and testing",
                "Enlaces RF en banda S para CubeSat; integración y pruebas",
            ),
            Text::new(
                "Patch and fractal antennas (HFSS + KiCad layouts/prototypes)",
                "Antenas patch y fractales (HFSS + layouts/prototipos en KiCad)",
            ),
            Text::new(
                "Optics lab work and basic instrumentation",
                "Trabajo en óptica e instrumentación básica",
            ),
        ],
        gradient: "from-amber-400 to-lime-300",
    },
    SkillCard {
        icon: BsBarChart,
        title: Text::new("Data Science & Analysis", "Ciencia de Datos y Análisis"),
        items: &[
            Text::new(
                "Statistical modeling and exploratory analysis for scientific datasets",
                "Modelado estadístico y análisis exploratorio en datos científicos",
            ),
            Text::new(
                "Basic ML (regression/classification) when appropriate",
                "ML básico (regresión/clasificación) cuando aporta valor",
            ),
            Text::new(
                "Clear, publication-style figures and result summaries",
                "Figuras claras estilo reporte y síntesis de resultados",
            ),
        ],
        gradient: "from-emerald-400 to-teal-300",
    },
    SkillCard {
        icon: BsPeople,
        title: Text::new("Research & Collaboration", "Investigación y Colaboración"),
        items: &[
            Text::new(
                "Independent research initiative with strong technical writing",
                "Iniciativa de investigación independiente con redacción técnica sólida",
            ),
            Text::new(
                "Interdisciplinary teamwork (engineering + physics contexts)",
                "Trabajo interdisciplinario (contextos de ingeniería + física)",
            ),
            Text::new(
                "Mentoring / tutoring and structured communication",
                "Mentoría / tutoría y comunicación estructurada",
            ),
        ],
        gradient: "from-pink-400 to-orange-300",
    },
];

const EPFLX: &str = "EPFLx / edX (École Polytechnique Fédérale de Lausanne)";
const VERIFIED: Text = Text::new("Verified", "Verificado");

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "PlasmaApplicationX: Plasma Physics – Applications",
        issuer: EPFLX,
        year: "2025",
        badge: VERIFIED,
        href: "https://courses.edx.org/certificates/12f2a36e4afa4cf995f74a2c678163bf",
        topics: Text::new(
            "Space & astrophysical plasmas; industrial/medical applications; fusion power balance; magnetic confinement devices (tokamaks, stellarators).",
            "Plasmas espaciales/astrofísicos; aplicaciones industriales/médicas; balance de potencia en fusión; confinamiento magnético (tokamaks, stellarators).",
        ),
    },
    Certification {
        title: "PlasmaIntroductionX: Plasma Physics – Introduction",
        issuer: EPFLX,
        year: "2025",
        badge: VERIFIED,
        href: "https://courses.edx.org/certificates/88fdb82fac6c419288f9a8cc5c273a93",
        topics: Text::new(
            "Debye shielding; single-particle motion; Vlasov/two-fluid/MHD; equilibrium & stability; MHD waves; basic numerical modeling.",
            "Apantallamiento de Debye; movimiento de partícula; Vlasov/dos fluidos/MHD; equilibrio y estabilidad; ondas MHD; modelado numérico básico.",
        ),
    },
    Certification {
        title: "Complete Guide to C++ Programming Foundations",
        issuer: "LinkedIn Learning",
        year: "2025",
        badge: Text::new("Completed", "Completado"),
        href: "https://www.linkedin.com/learning/certificates/3e3ff88a7b84a8bc384256876bdc9e6ca45422cd1afeb44fdebc5d0374c2b779?trk=share_certificate",
        topics: Text::new(
            "C++ fundamentals for scientific/engineering work: types, pointers, references, control flow, functions, classes, and intro STL.",
            "Fundamentos de C++ para trabajo científico/ingenieril: tipos, punteros, referencias, control de flujo, funciones, clases e introducción a STL.",
        ),
    },
    Certification {
        title: "Lean Six Sigma White Belt",
        issuer: "Certification",
        year: "2023",
        badge: Text::new("Certified", "Certificado"),
        href: "/docs/LeanSixSigma.pdf",
        topics: Text::new(
            "Process improvement basics: DMAIC overview, quality mindset, and foundational problem-structuring tools.",
            "Bases de mejora de procesos: visión general de DMAIC, enfoque de calidad y herramientas fundamentales para estructurar problemas.",
        ),
    },
];

const APRIL_2025: Text = Text::new("Apr 2025", "Abr 2025");

const fn badge(title: Text, assertion: &'static str, image: &'static str) -> CompetencyBadge {
    CompetencyBadge {
        title,
        issued: APRIL_2025,
        href: assertion,
        image,
    }
}

pub static COMPETENCY_BADGES: &[CompetencyBadge] = &[
    badge(
        Text::new("Complex Problem Solving", "Solución de problemas complejos"),
        "https://badges.parchment.com/public/assertions/6ek-039cTkm8yZ5bVNB80g",
        "https://api.badgr.io/public/assertions/6ek-039cTkm8yZ5bVNB80g/image",
    ),
    badge(
        Text::new("Model Building", "Construcción de modelos"),
        "https://badges.parchment.com/public/assertions/HHBUmb1IR6iTF_4bnC9j8Q",
        "https://api.badgr.io/public/assertions/HHBUmb1IR6iTF_4bnC9j8Q/image",
    ),
    badge(
        Text::new(
            "Characterization of Physical Phenomena",
            "Caracterización de fenómenos físicos",
        ),
        "https://badges.parchment.com/public/assertions/5FLulLFWRjGS_tUa4FRofA",
        "https://api.badgr.io/public/assertions/5FLulLFWRjGS_tUa4FRofA/image",
    ),
    badge(
        Text::new(
            "Identification of Physical Phenomena",
            "Identificación de fenómenos físicos",
        ),
        "https://badges.parchment.com/public/assertions/PRGE3-3USLOKx-iFVsUXrg",
        "https://api.badgr.io/public/assertions/PRGE3-3USLOKx-iFVsUXrg/image",
    ),
    badge(
        Text::new("Information Communication", "Comunicación de información"),
        "https://badges.parchment.com/public/assertions/aIhfUbr-TQeWy94mx9EQuw",
        "https://api.badgr.io/public/assertions/aIhfUbr-TQeWy94mx9EQuw/image",
    ),
    badge(
        Text::new("Research Stay", "Estancia de Investigación"),
        "https://badges.parchment.com/public/assertions/8tsBfUMCSyel8PxC6DcD7w",
        "https://api.badgr.io/public/assertions/8tsBfUMCSyel8PxC6DcD7w/image",
    ),
    badge(
        Text::new("Self-Awareness & Self-Management", "Autoconocimiento y gestión"),
        "https://badges.parchment.com/public/assertions/baESYvEaTKmwPBi5zrCB9w",
        "https://api.badgr.io/public/assertions/baESYvEaTKmwPBi5zrCB9w/image",
    ),
];

/// The badges currently on screen: the first [`BADGE_PREVIEW_COUNT`] unless
/// the panel has been expanded.
#[must_use]
pub fn visible_badges(badges: &[CompetencyBadge], show_all: bool) -> &[CompetencyBadge] {
    if show_all {
        badges
    } else {
        &badges[..badges.len().min(BADGE_PREVIEW_COUNT)]
    }
}

/// Label of the expand/collapse button, or `None` when every badge already
/// fits in the preview and no button is rendered.
#[must_use]
pub fn toggle_label(total: usize, show_all: bool, lang: Lang) -> Option<String> {
    if total <= BADGE_PREVIEW_COUNT {
        return None;
    }
    Some(match (show_all, lang) {
        (true, _) => Text::new("Show fewer", "Mostrar menos").get(lang).to_owned(),
        (false, Lang::En) => format!("Show all {total}"),
        (false, Lang::Es) => format!("Mostrar los {total}"),
    })
}

fn skill_card(card: &'static SkillCard, lang: Signal<Lang>) -> impl IntoView {
    view! {
        <div class="group relative h-full overflow-hidden rounded-3xl border border-slate-800/80 bg-slate-900/70 p-5 shadow-sm backdrop-blur-sm transition hover:-translate-y-1 hover:border-sky-400/50 hover:shadow-sky-500/10">
            <div class=format!("pointer-events-none absolute inset-x-0 top-0 h-0.5 bg-gradient-to-r {} opacity-70", card.gradient)></div>
            <div class="mb-4 flex items-start gap-3">
                <div class=format!("mt-0.5 flex h-10 w-10 shrink-0 items-center justify-center rounded-2xl bg-gradient-to-tr {} text-slate-950 shadow-lg", card.gradient)>
                    {icons::icon(card.icon, "h-5 w-5")}
                </div>
                <h3 class="min-w-0 text-[15px] font-semibold leading-snug text-slate-50">
                    {move || card.title.get(lang.get())}
                </h3>
            </div>
            <ul class="space-y-1.5 text-sm text-slate-300">
                {card
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex gap-2">
                                <span class="mt-2 h-1.5 w-1.5 shrink-0 rounded-full bg-slate-500/80"></span>
                                <span class="leading-relaxed">{move || item.get(lang.get())}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn certification_card(cert: &'static Certification, lang: Signal<Lang>) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col rounded-3xl border border-slate-800/80 bg-slate-900/60 p-4 shadow-sm backdrop-blur-sm transition hover:border-sky-400/40">
            <div class="flex items-start justify-between gap-3">
                <div class="min-w-0">
                    <p class="text-sm font-semibold leading-snug text-slate-100">{cert.title}</p>
                    <p class="mt-1 text-xs leading-relaxed text-slate-300">
                        {cert.issuer}
                        <span class="text-slate-500">" • "</span>
                        {cert.year}
                    </p>
                </div>
                <span class="shrink-0 rounded-full border border-slate-700/70 bg-slate-950/30 px-2 py-1 text-[11px] text-slate-200">
                    {move || cert.badge.get(lang.get())}
                </span>
            </div>
            <div class="mt-3 flex items-center justify-between gap-3">
                <a
                    href=cert.href
                    target="_blank"
                    rel="noreferrer"
                    class="inline-flex items-center gap-1 text-xs font-semibold text-sky-300 hover:text-sky-200"
                    aria-label=move || {
                        Text::new("Open certificate link", "Abrir enlace del certificado").get(lang.get())
                    }
                >
                    {move || Text::new("View", "Ver").get(lang.get())}
                    {icons::icon(BsArrowUpRight, "h-4 w-4")}
                </a>
                <details class="group">
                    <summary class="cursor-pointer list-none text-xs font-semibold text-slate-300 hover:text-sky-200">
                        {move || Text::new("Topics", "Temas").get(lang.get())}
                    </summary>
                    <div class="mt-2 rounded-2xl border border-slate-800/70 bg-slate-950/20 p-3">
                        <p class="text-xs leading-relaxed text-slate-300">
                            {move || cert.topics.get(lang.get())}
                        </p>
                    </div>
                </details>
            </div>
        </div>
    }
}

fn badge_tile(badge: &'static CompetencyBadge, lang: Signal<Lang>) -> impl IntoView {
    view! {
        <a
            href=badge.href
            target="_blank"
            rel="noreferrer"
            class="group rounded-3xl border border-slate-800/80 bg-slate-950/20 p-4 transition hover:border-sky-400/40"
            aria-label=move || {
                Text::new("Open badge validation link", "Abrir enlace de validación del badge")
                    .get(lang.get())
            }
        >
            <div class="flex items-center gap-3">
                <img
                    src=badge.image
                    alt=move || badge.title.get(lang.get())
                    loading="lazy"
                    class="h-12 w-12 rounded-2xl ring-1 ring-slate-800/70"
                />
                <div class="min-w-0">
                    <p class="truncate text-sm font-semibold text-slate-100">
                        {move || badge.title.get(lang.get())}
                    </p>
                    <p class="mt-0.5 text-xs text-slate-400">{move || badge.issued.get(lang.get())}</p>
                </div>
            </div>
            <p class="mt-3 text-xs font-semibold text-sky-300 opacity-0 transition group-hover:opacity-100">
                {move || Text::new("View validation", "Ver validación").get(lang.get())}
            </p>
        </a>
    }
}

fn badges_panel(lang: Signal<Lang>) -> impl IntoView {
    let show_all = RwSignal::new(false);
    let total = COMPETENCY_BADGES.len();

    view! {
        <div class="mt-6">
            <details class="rounded-3xl border border-slate-800/80 bg-slate-900/60 p-5 backdrop-blur-sm">
                <summary class="cursor-pointer select-none list-none">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="text-[15px] font-semibold text-slate-50">
                                {move || {
                                    Text::new("Tec Competency Badges", "Badges de Competencias (Tec)")
                                        .get(lang.get())
                                }}
                            </p>
                            <p class="mt-1 text-xs text-slate-300">
                                {move || {
                                    Text::new(
                                        "Verified micro-credentials issued by Tecnológico de Monterrey.",
                                        "Microcredenciales verificables emitidas por el Tecnológico de Monterrey.",
                                    )
                                    .get(lang.get())
                                }}
                            </p>
                        </div>
                        <span class="shrink-0 rounded-full border border-slate-700/70 bg-slate-950/30 px-2 py-1 text-[11px] text-slate-200">
                            {total}
                        </span>
                    </div>
                </summary>
                <div class="mt-4">
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        {move || {
                            visible_badges(COMPETENCY_BADGES, show_all.get())
                                .iter()
                                .map(|badge| badge_tile(badge, lang))
                                .collect_view()
                        }}
                    </div>
                    {move || {
                        toggle_label(total, show_all.get(), lang.get())
                            .map(|label| {
                                view! {
                                    <div class="mt-4 flex justify-center">
                                        <button
                                            type="button"
                                            on:click=move |_| show_all.update(|all| *all = !*all)
                                            class="rounded-full border border-slate-700/70 bg-slate-950/30 px-4 py-2 text-xs font-semibold text-slate-200 transition hover:border-sky-400/40 hover:text-sky-200"
                                        >
                                            {label}
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </div>
            </details>
        </div>
    }
}

pub fn component(lang: Signal<Lang>) -> impl IntoView {
    view! {
        <section id="skills" class="scroll-mt-28 py-20 md:py-24 motion-safe:animate-fade-up">
            <div class="mx-auto w-full max-w-6xl px-6">
                <div class="mb-10 space-y-3 text-center">
                    <h2 class="text-4xl font-semibold text-sky-400 md:text-5xl">
                        {move || Text::new("Skills & Expertise", "Habilidades y Experiencia").get(lang.get())}
                    </h2>
                    <p class="mx-auto max-w-2xl text-sm text-slate-300 md:text-base">
                        {move || {
                            Text::new(
                                "A concise overview of my technical strengths across plasma/fusion, simulation, and engineering.",
                                "Resumen conciso de mis fortalezas técnicas en plasmas/fusión, simulación e ingeniería.",
                            )
                            .get(lang.get())
                        }}
                    </p>
                </div>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {SKILL_CARDS.iter().map(|card| skill_card(card, lang)).collect_view()}
                </div>
                <div class="mt-10">
                    <div class="mb-5 flex items-center gap-3">
                        <div class="flex h-10 w-10 items-center justify-center rounded-2xl bg-sky-500/10 text-sky-300 ring-1 ring-sky-400/20">
                            {icons::icon(BsAward, "h-5 w-5")}
                        </div>
                        <h3 class="min-w-0 text-[15px] font-semibold text-slate-50">
                            {move || Text::new("Certifications", "Certificaciones").get(lang.get())}
                        </h3>
                    </div>
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                        {CERTIFICATIONS.iter().map(|cert| certification_card(cert, lang)).collect_view()}
                    </div>
                </div>
                {badges_panel(lang)}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_shows_first_four() {
        let visible = visible_badges(COMPETENCY_BADGES, false);
        assert_eq!(visible.len(), BADGE_PREVIEW_COUNT);
        assert_eq!(visible[0].title.en, "Complex Problem Solving");
    }

    #[test]
    fn test_expanded_shows_everything() {
        assert_eq!(visible_badges(COMPETENCY_BADGES, true).len(), 7);
    }

    #[test]
    fn test_short_lists_are_never_truncated() {
        let few = &COMPETENCY_BADGES[..2];
        assert_eq!(visible_badges(few, false).len(), 2);
        assert_eq!(toggle_label(few.len(), false, Lang::En), None);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(toggle_label(7, false, Lang::En).as_deref(), Some("Show all 7"));
        assert_eq!(toggle_label(7, false, Lang::Es).as_deref(), Some("Mostrar los 7"));
        assert_eq!(toggle_label(7, true, Lang::En).as_deref(), Some("Show fewer"));
        assert_eq!(toggle_label(7, true, Lang::Es).as_deref(), Some("Mostrar menos"));
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(SKILL_CARDS.len(), 6);
        assert_eq!(CERTIFICATIONS.len(), 4);
        assert!(SKILL_CARDS.iter().all(|card| card.items.len() == 3));
    }
}
