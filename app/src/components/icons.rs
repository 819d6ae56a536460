use icondata::{BsEnvelope, BsGithub, BsLinkedin, Icon};
use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::types::is_external_url;

pub const GITHUB_URL: &str = "https://github.com/h4xter1612";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/juan-pablo-solís-ruiz-h4xter";
pub const EMAIL: &str = "jp.sruiz18.tec@gmail.com";
pub const MAILTO: &str = "mailto:jp.sruiz18.tec@gmail.com";

/// Inline SVG for an `icondata` icon, coloured by the surrounding text.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}

/// `target`/`rel` for a link: external URLs open in a new tab.
pub fn new_tab_attrs(href: &str) -> (Option<&'static str>, Option<&'static str>) {
    if is_external_url(href) {
        (Some("_blank"), Some("noreferrer"))
    } else {
        (None, None)
    }
}

fn social_link(href: &'static str, label: &'static str, glyph: Icon) -> impl IntoView {
    let (target, rel) = new_tab_attrs(href);
    a().href(href)
        .target(target)
        .rel(rel)
        .aria_label(label)
        .class("flex h-10 w-10 items-center justify-center rounded-full border border-slate-700 bg-slate-900/80 text-slate-200 transition hover:-translate-y-0.5 hover:border-sky-400 hover:text-sky-400")
        .child(icon(glyph, "h-4 w-4"))
}

/// GitHub, LinkedIn and email shortcuts shown under the hero.
pub fn component() -> impl IntoView {
    div().class("flex flex-row gap-3 items-center").child((
        social_link(GITHUB_URL, "GitHub", BsGithub),
        social_link(LINKEDIN_URL, "LinkedIn", BsLinkedin),
        social_link(MAILTO, "Email", BsEnvelope),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_links_open_in_new_tab() {
        assert_eq!(
            new_tab_attrs(GITHUB_URL),
            (Some("_blank"), Some("noreferrer"))
        );
        assert_eq!(new_tab_attrs(MAILTO), (None, None));
        assert_eq!(new_tab_attrs("/cv/JuanPabloSolis_CV.pdf"), (None, None));
    }
}
