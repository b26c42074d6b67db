use leptos::prelude::*;

use super::Icon;
use crate::content::{IconKind, SectionKind, TestimonialsContent};
use crate::motion::Reveal;
use crate::theme::ThemeTokens;

#[component]
pub fn Testimonials(content: TestimonialsContent, tokens: ThemeTokens) -> impl IntoView {
    view! {
        <section id=SectionKind::Testimonials.anchor() class="py-32 bg-white">
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
                        .map(|(i, item)| {
                            let reveal = Reveal::Stagger(i);
                            view! {
                                <figure
                                    class="bg-slate-50 rounded-[18px] p-8 border border-slate-200 flex flex-col gap-6"
                                    data-reveal=reveal.attr()
                                    style=reveal.style()
                                >
                                    <div class=tokens.accent_text>
                                        <Icon kind=IconKind::Quote class="w-8 h-8" />
                                    </div>
                                    <blockquote class="text-[17px] text-slate-700 leading-relaxed flex-1">
                                        {item.quote}
                                    </blockquote>
                                    <figcaption>
                                        <div class="text-sm font-semibold text-slate-900">{item.name}</div>
                                        <div class="text-sm text-slate-500">{item.role}</div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
