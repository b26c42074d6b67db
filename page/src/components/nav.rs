use leptos::prelude::*;

use super::Icon;
use crate::content::{Brand, IconKind, NavContent};
use crate::hook::SubmitHook;
use crate::theme::ThemeTokens;

/// Fixed top bar. The CTA jumps to `form_anchor` and, when the bound form
/// already holds an address, submits it through `hook`.
#[component]
pub fn Nav(
    content: NavContent,
    brand: Brand,
    tokens: ThemeTokens,
    hook: SubmitHook,
    /// Hero form id; `None` when no hero form is rendered
    form_anchor: Option<String>,
) -> impl IntoView {
    let cta_href = form_anchor.map_or_else(|| "#".to_string(), |a| format!("#{a}"));
    let on_cta = move |_| {
        let accepted = hook.submit_if_filled();
        log::debug!("nav waitlist cta: submitted={accepted}");
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-xl border-b border-slate-200/60">
            <div class="max-w-[1280px] mx-auto px-8 h-16 flex items-center justify-between">
                <a href="#" class="flex items-center gap-2">
                    <div class=format!("w-8 h-8 {} rounded-lg flex items-center justify-center", tokens.logo_gradient)>
                        <Icon kind=IconKind::Bot class="w-5 h-5 text-white" />
                    </div>
                    <span class="text-lg font-bold text-slate-900">{brand.name}</span>
                </a>
                <div class="flex items-center gap-8 text-sm font-medium text-slate-600">
                    {content
                        .links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="hover:text-slate-900 transition-colors">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=cta_href
                        class="px-5 py-2 bg-slate-900 text-white rounded-xl hover:bg-slate-800 transition-colors"
                        on:click=on_cta
                    >
                        {content.cta_label}
                    </a>
                </div>
            </div>
        </nav>
    }
}
