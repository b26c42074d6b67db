use leptos::prelude::*;

use super::{line_breaks, WaitlistForm};
use crate::content::CtaContent;
use crate::motion::Reveal;
use crate::theme::{FormVariant, ThemeTokens};

/// Closing call to action with its own, independent waitlist form.
#[component]
pub fn CallToAction(content: CtaContent, tokens: ThemeTokens) -> impl IntoView {
    view! {
        <section class="relative py-32 overflow-hidden">
            <div class=format!("absolute inset-0 {}", tokens.cta_background)></div>
            <div class=format!("absolute top-0 left-1/4 w-[500px] h-[500px] {} rounded-full blur-[120px]", tokens.cta_orb_primary)></div>
            <div class=format!("absolute bottom-0 right-1/4 w-[500px] h-[500px] {} rounded-full blur-[120px]", tokens.cta_orb_secondary)></div>

            <div class="relative max-w-[800px] mx-auto px-8 text-center" data-reveal=Reveal::FadeUp.attr()>
                <h2 class="text-[64px] font-bold text-white mb-6 leading-[1.05]">
                    {line_breaks(content.title_lines)}
                </h2>
                <p class=format!("text-[21px] mb-10 {}", tokens.cta_subtext)>{content.subtitle}</p>
                <div class="flex justify-center">
                    <WaitlistForm copy=content.form variant=FormVariant::Dark tokens=tokens />
                </div>
                <p class=format!("mt-6 text-sm {}", tokens.cta_fineprint)>{content.fineprint}</p>
            </div>
        </section>
    }
}
