use leptos::prelude::*;

use super::{line_breaks, Icon};
use crate::content::{ComparisonColumn, ComparisonContent, IconKind, SectionKind};
use crate::motion::Reveal;

/// Before/after columns.
#[component]
pub fn Comparison(content: ComparisonContent) -> impl IntoView {
    view! {
        <section id=SectionKind::Comparison.anchor() class="py-32 bg-slate-50">
            <div class="max-w-[1280px] mx-auto px-8">
                <div class="grid grid-cols-2 gap-16 items-center">
                    <Column column=content.before after=false index=0 />
                    <Column column=content.after after=true index=1 />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Column(column: ComparisonColumn, after: bool, index: usize) -> impl IntoView {
    let reveal = Reveal::Stagger(index);
    let (badge_class, badge_text, icon, icon_class, item_class) = if after {
        (
            "inline-block px-4 py-2 bg-emerald-50 rounded-full",
            "text-[13px] font-semibold text-emerald-600",
            IconKind::CheckCircle,
            "w-5 h-5 text-emerald-500 mt-0.5 flex-shrink-0",
            "text-[17px] text-slate-900 font-medium",
        )
    } else {
        (
            "inline-block px-4 py-2 bg-red-50 rounded-full",
            "text-[13px] font-semibold text-red-600",
            IconKind::X,
            "w-5 h-5 text-red-500 mt-0.5 flex-shrink-0",
            "text-[17px] text-slate-600 line-through",
        )
    };

    view! {
        <div class="space-y-6" data-reveal=reveal.attr() style=reveal.style()>
            <div class=badge_class>
                <span class=badge_text>{column.badge}</span>
            </div>
            <h2 class="text-[42px] font-bold text-slate-900 leading-[1.1]">
                {line_breaks(column.title_lines)}
            </h2>
            <div class="space-y-4">
                {column
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="flex items-start gap-3">
                                <Icon kind=icon class=icon_class />
                                <span class=item_class>{item}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
