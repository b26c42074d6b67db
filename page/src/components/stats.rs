use leptos::prelude::*;

use crate::content::Stat;
use crate::motion::Reveal;
use crate::theme::ThemeTokens;

/// Three headline numbers overlapping the bottom of the hero.
#[component]
pub fn StatsBar(stats: Vec<Stat>, tokens: ThemeTokens) -> impl IntoView {
    view! {
        <section class="relative z-10 -mt-16 mb-24">
            <div class="max-w-[1100px] mx-auto px-8">
                <div
                    class="bg-white rounded-[20px] p-10 shadow-[0_0_0_1px_rgba(0,0,0,0.04),0_8px_16px_rgba(0,0,0,0.08),0_24px_48px_rgba(0,0,0,0.12)] grid grid-cols-3 gap-8"
                    data-reveal=Reveal::FadeUp.attr()
                >
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center border-r border-slate-200 last:border-0">
                                    <div class=format!("text-[56px] font-bold leading-none mb-2 {}", tokens.gradient_text)>
                                        {stat.number}
                                    </div>
                                    <div class="text-[15px] sm:text-[16px] font-semibold text-slate-900 mb-1">
                                        {stat.label}
                                    </div>
                                    <div class="text-[13px] text-slate-600">{stat.sublabel}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
