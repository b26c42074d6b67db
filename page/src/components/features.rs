use leptos::prelude::*;

use super::Icon;
use crate::content::{Feature, FeaturesContent, SectionKind};
use crate::motion::Reveal;
use crate::theme::ThemeTokens;

#[component]
pub fn Features(content: FeaturesContent, tokens: ThemeTokens) -> impl IntoView {
    view! {
        <section id=SectionKind::Features.anchor() class="py-32 bg-slate-50">
            <div class="max-w-[1280px] mx-auto px-8">
                <div class="text-center mb-20" data-reveal=Reveal::FadeUp.attr()>
                    <h2 class="text-[52px] font-bold text-slate-900 mb-4 leading-[1.1]">{content.title}</h2>
                    <p class="text-[21px] text-slate-600">{content.subtitle}</p>
                </div>
                <div class="grid grid-cols-3 gap-6">
                    {content
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(i, feature)| view! { <FeatureCard feature=feature index=i tokens=tokens /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize, tokens: ThemeTokens) -> impl IntoView {
    let reveal = Reveal::Stagger(index);
    view! {
        <article
            class=format!("lift-on-hover bg-white rounded-[18px] p-8 border border-slate-200 group {}", tokens.card_hover)
            data-reveal=reveal.attr()
            style=reveal.style()
        >
            <div class=format!("w-14 h-14 {} {} rounded-[14px] flex items-center justify-center mb-5 group-hover:scale-110 transition-transform duration-300", tokens.icon_tile, tokens.accent_text)>
                <Icon kind=feature.icon class="w-7 h-7" />
            </div>
            <h3 class="text-lg font-bold text-slate-900 mb-2">{feature.title}</h3>
            <p class="text-[15px] text-slate-600 leading-relaxed">{feature.description}</p>
        </article>
    }
}
