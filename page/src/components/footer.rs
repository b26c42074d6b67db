use leptos::prelude::*;

use super::Icon;
use crate::content::{Brand, FooterContent, IconKind};
use crate::theme::ThemeTokens;

#[component]
pub fn Footer(content: FooterContent, brand: Brand, tokens: ThemeTokens) -> impl IntoView {
    view! {
        <footer class="bg-slate-900 py-16">
            <div class="max-w-[1280px] mx-auto px-8">
                <div class="flex items-center justify-between text-slate-400 text-sm">
                    <div class="flex items-center gap-2">
                        <div class=format!("w-8 h-8 {} rounded-lg flex items-center justify-center", tokens.logo_gradient)>
                            <Icon kind=IconKind::Bot class="w-5 h-5 text-white" />
                        </div>
                        <span class="font-semibold text-white">{brand.name}</span>
                    </div>
                    <div class="flex gap-8">
                        {content
                            .links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="hover:text-white transition-colors">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="mt-8 text-center text-slate-500 text-sm">{brand.copyright}</div>
            </div>
        </footer>
    }
}
