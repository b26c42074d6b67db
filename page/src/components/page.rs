//! Page composition: every configured section, in order.

use leptos::prelude::*;

use super::{
    CallToAction, Comparison, Features, Footer, Hero, Nav, StatsBar, Steps, Testimonials,
};
use crate::content::{SectionKind, SiteContent};
use crate::hook::SubmitHook;
use crate::styles::MOTION_CSS;
use crate::theme::ThemeTokens;
use crate::MOUNT_ID;

/// The whole landing page.
///
/// Creates the [`SubmitHook`] shared by the nav CTA and the hero form. Pass
/// `hook` to keep a handle for callers outside the page.
#[component]
pub fn LandingPage(
    content: SiteContent,
    #[prop(optional)] hook: Option<SubmitHook>,
) -> impl IntoView {
    let tokens = content.palette.tokens();
    let hook = hook.unwrap_or_default();

    view! {
        <style>{MOTION_CSS}</style>
        <div class="font-sans antialiased">
            {content
                .sections
                .iter()
                .map(|kind| section_view(*kind, &content, tokens, &hook))
                .collect_view()}
        </div>
    }
}

fn section_view(
    kind: SectionKind,
    content: &SiteContent,
    tokens: ThemeTokens,
    hook: &SubmitHook,
) -> AnyView {
    match kind {
        SectionKind::Nav => {
            let form_anchor = content
                .hero
                .form
                .anchor
                .clone()
                .filter(|_| content.has_section(SectionKind::Hero));
            view! {
                <Nav
                    content=content.nav.clone()
                    brand=content.brand.clone()
                    tokens=tokens
                    hook=hook.clone()
                    form_anchor=form_anchor
                />
            }
            .into_any()
        }
        SectionKind::Hero => {
            view! { <Hero content=content.hero.clone() tokens=tokens hook=hook.clone() /> }
                .into_any()
        }
        SectionKind::Stats => {
            view! { <StatsBar stats=content.stats.clone() tokens=tokens /> }.into_any()
        }
        SectionKind::Comparison => {
            view! { <Comparison content=content.comparison.clone() /> }.into_any()
        }
        SectionKind::Steps => {
            view! { <Steps content=content.steps.clone() tokens=tokens /> }.into_any()
        }
        SectionKind::Features => {
            view! { <Features content=content.features.clone() tokens=tokens /> }.into_any()
        }
        SectionKind::Testimonials => {
            view! { <Testimonials content=content.testimonials.clone() tokens=tokens /> }
                .into_any()
        }
        SectionKind::CallToAction => {
            view! { <CallToAction content=content.cta.clone() tokens=tokens /> }.into_any()
        }
        SectionKind::Footer => {
            view! { <Footer content=content.footer.clone() brand=content.brand.clone() tokens=tokens /> }
                .into_any()
        }
    }
}

/// Full HTML document around [`LandingPage`], for prerendering.
///
/// The page sits inside the mount element, so the CSR build can take over
/// the same container.
#[component]
pub fn PageDocument(content: SiteContent) -> impl IntoView {
    let title = content.brand.name.clone();
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
            </head>
            <body>
                <div id=MOUNT_ID>
                    <LandingPage content=content />
                </div>
            </body>
        </html>
    }
}
