//! Inline SVG icons (Lucide outline style, 24px grid).

use leptos::prelude::*;

use crate::content::IconKind;

/// Renders an outline icon by name.
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::ArrowRight class="w-5 h-5" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Sizing/colour utility classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon_paths(kind).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

/// Path data for an icon. Circles are written as two arcs.
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        IconKind::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        IconKind::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        IconKind::Bot => &[
            "M12 8V4H8",
            "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
            "M2 14h2",
            "M20 14h2",
            "M15 13v2",
            "M9 13v2",
        ],
        IconKind::CheckCircle => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "m9 12 2 2 4-4",
        ],
        IconKind::FileText => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M10 9H8",
            "M16 13H8",
            "M16 17H8",
        ],
        IconKind::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
        IconKind::MessageSquare => &[
            "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
        ],
        IconKind::Quote => &[
            "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-2 6-4 6z",
            "M15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-2 6-4 6z",
        ],
        IconKind::Search => &[
            "M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z",
            "m21 21-4.3-4.3",
        ],
        IconKind::Sparkles => &[
            "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
            "M5 3v4",
            "M19 17v4",
            "M3 5h4",
            "M17 19h4",
        ],
        IconKind::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        IconKind::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        IconKind::X => &["M18 6 6 18", "m6 6 12 12"],
        IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
    }
}
