use leptos::prelude::*;

use super::{line_breaks, Icon, WaitlistForm};
use crate::content::{HeroContent, IconKind, Scorecard as ScorecardContent};
use crate::hook::SubmitHook;
use crate::motion::Reveal;
use crate::theme::{FormVariant, ThemeTokens};

#[component]
pub fn Hero(content: HeroContent, tokens: ThemeTokens, hook: SubmitHook) -> impl IntoView {
    let HeroContent {
        badge,
        title_lines,
        description,
        form,
        scorecard,
    } = content;

    view! {
        <section class="relative min-h-[90vh] flex items-center pt-16 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-white to-emerald-50/30"></div>
            <div class=format!("absolute top-1/4 left-1/4 w-[600px] h-[600px] {} rounded-full blur-[120px]", tokens.orb_primary)></div>
            <div class=format!("absolute bottom-1/4 right-1/4 w-[600px] h-[600px] {} rounded-full blur-[120px]", tokens.orb_secondary)></div>

            <div class="relative max-w-[1280px] mx-auto px-8 w-full">
                <div class="grid grid-cols-[55%_45%] gap-12 items-center">
                    <div data-reveal=Reveal::FadeUp.attr()>
                        <div class=format!("inline-flex items-center gap-2 px-4 py-2 rounded-full mb-6 {}", tokens.badge)>
                            <Icon kind=IconKind::Sparkles class="w-4 h-4" />
                            <span class="text-sm font-semibold">{badge}</span>
                        </div>
                        <h1 class="text-[72px] leading-[1.05] font-bold tracking-[-0.04em] text-slate-900 mb-6">
                            {line_breaks(title_lines)}
                        </h1>
                        <p class="text-[21px] leading-[1.6] text-slate-600 max-w-[520px] mb-10">
                            {description}
                        </p>
                        <WaitlistForm copy=form variant=FormVariant::Light tokens=tokens hook=hook />
                    </div>
                    <Scorecard content=scorecard />
                </div>
            </div>
        </section>
    }
}

/// Floating analytics card beside the hero copy.
#[component]
pub fn Scorecard(content: ScorecardContent) -> impl IntoView {
    let ScorecardContent {
        eyebrow,
        title,
        trend,
        metrics,
        activity_label,
        activity,
    } = content;

    view! {
        <div class="relative" data-reveal=Reveal::SlideInRight.attr()>
            <div class="absolute inset-0 bg-gradient-to-br from-emerald-500/20 via-teal-500/20 to-cyan-500/20 blur-[100px] rounded-full scale-150"></div>
            <div class="relative w-[480px] bg-white rounded-[24px] p-8 shadow-[0_0_0_1px_rgba(0,0,0,0.04),0_2px_4px_rgba(0,0,0,0.04),0_8px_16px_rgba(0,0,0,0.06),0_16px_32px_rgba(0,0,0,0.08)] border border-white/60 backdrop-blur-xl">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <div class="text-[11px] uppercase tracking-[0.08em] text-slate-500 font-semibold mb-1">{eyebrow}</div>
                        <div class="text-2xl font-bold text-slate-900">{title}</div>
                    </div>
                    <div class="flex items-center gap-2 px-3 py-1.5 bg-emerald-50 rounded-lg">
                        <Icon kind=IconKind::TrendingUp class="w-4 h-4 text-emerald-600" />
                        <span class="text-sm font-semibold text-emerald-600">{trend}</span>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4 mb-6">
                    {metrics
                        .into_iter()
                        .map(|metric| {
                            view! {
                                <div class="bg-slate-50 rounded-[12px] p-4">
                                    <div class="flex items-center gap-2 mb-2">
                                        <Icon kind=metric.icon class="w-4 h-4 text-slate-500" />
                                        <span class="text-xs text-slate-600">{metric.label}</span>
                                    </div>
                                    <div class="text-2xl font-bold text-slate-900">{metric.value}</div>
                                    <div class="text-xs text-emerald-600 font-medium">{metric.change}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="space-y-0">
                    <div class="text-xs uppercase tracking-[0.08em] text-slate-500 font-semibold mb-3">{activity_label}</div>
                    {activity
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="flex items-start gap-3 py-3 border-b border-slate-200 last:border-0">
                                    <div class=format!("w-8 h-8 rounded-lg bg-slate-50 flex items-center justify-center flex-shrink-0 {}", item.tone.text_class())>
                                        <Icon kind=item.icon class="w-4 h-4" />
                                    </div>
                                    <div class="flex-1 min-w-0">
                                        <div class="text-xs text-slate-500 mb-0.5">{item.kind}</div>
                                        <div class="text-sm font-semibold text-slate-900 truncate">{item.title}</div>
                                    </div>
                                    <div class="text-xs text-slate-400 whitespace-nowrap">{item.time}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
