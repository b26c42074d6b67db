use leptos::prelude::*;

use super::Icon;
use crate::content::{SectionKind, StepsContent};
use crate::motion::Reveal;
use crate::theme::ThemeTokens;

/// Numbered "how it works" cards on a gradient timeline.
#[component]
pub fn Steps(content: StepsContent, tokens: ThemeTokens) -> impl IntoView {
    view! {
        <section id=SectionKind::Steps.anchor() class="py-32 bg-white">
            <div class="max-w-[1280px] mx-auto px-8">
                <div class="text-center mb-20" data-reveal=Reveal::FadeUp.attr()>
                    <h2 class="text-[52px] font-bold text-slate-900 mb-4 leading-[1.1]">{content.title}</h2>
                    <p class="text-[21px] text-slate-600">{content.subtitle}</p>
                </div>

                <div class="relative">
                    <div class=format!("absolute top-24 left-0 right-0 h-[2px] opacity-30 {}", tokens.timeline)></div>
                    <div class="grid grid-cols-3 gap-8">
                        {content
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(i, step)| {
                                let reveal = Reveal::Stagger(i);
                                view! {
                                    <div class="relative" data-reveal=reveal.attr() style=reveal.style()>
                                        <div class=format!("absolute -top-12 left-8 w-16 h-16 {} rounded-full flex items-center justify-center text-white text-xl font-bold shadow-[0_8px_16px_rgba(0,0,0,0.15)] z-10", tokens.logo_gradient)>
                                            {step.number}
                                        </div>
                                        <div class="lift-on-hover bg-white rounded-[20px] p-8 pt-12 border border-slate-200 shadow-[0_2px_4px_rgba(0,0,0,0.04)] hover:shadow-[0_8px_16px_rgba(0,0,0,0.08)] hover:border-slate-300">
                                            <div class=format!("mb-4 {}", tokens.accent_text)>
                                                <Icon kind=step.icon class="w-12 h-12" />
                                            </div>
                                            <h3 class="text-2xl font-bold text-slate-900 mb-3">{step.title}</h3>
                                            <p class="text-base text-slate-600 leading-relaxed">{step.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
