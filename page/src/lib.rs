//! # fixbot-page
//!
//! Leptos components for the FixBot landing page.
//!
//! The page is a fixed composition of presentational sections driven by a
//! [`content::SiteContent`], plus one interactive piece: the waitlist form.
//! The same component tree is mounted client-side by the `fixbot-landing`
//! binary (`csr` feature) and can be rendered to a static HTML string with
//! [`render_page`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixbot_page::{render_page, content::SiteContent};
//!
//! let content = SiteContent::fixbot()?;
//! let html = render_page(&content);
//! std::fs::write("index.html", html)?;
//! ```
//!
//! ## Architecture
//!
//! - [`waitlist`] - submission state machine (idle / error / success)
//! - [`hook`] - explicit handle for submitting a form from elsewhere on the page
//! - [`content`] - page copy and section order, loaded from TOML
//! - [`theme`] - palette and form colour tokens (Tailwind classes)
//! - [`motion`] - reveal presets for entry/scroll animation
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS that utilities don't cover
//!
//! ---
//!
//! Developed by the FixBot team (c)2025

#![recursion_limit = "256"]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod hook;
pub mod motion;
pub mod styles;
pub mod theme;
pub mod waitlist;

use components::PageDocument;
use content::SiteContent;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Id of the element the page is mounted into.
pub const MOUNT_ID: &str = "root";

/// Render the complete page as an HTML document.
///
/// Output starts with `<!DOCTYPE html>` and wraps the page in the
/// [`MOUNT_ID`] container.
pub fn render_page(content: &SiteContent) -> String {
    let doc = view! { <PageDocument content=content.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionKind;

    fn fixbot() -> SiteContent {
        SiteContent::fixbot().expect("bundled content")
    }

    #[test]
    fn renders_document_shell() {
        let html = render_page(&fixbot());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(r#"id="root""#));
        assert!(html.contains("<title>"));
    }

    #[test]
    fn renders_sections_in_order() {
        let html = render_page(&fixbot());

        let markers = [
            "Join Waitlist",
            "AI Support Automation",
            "Lower ticket volume",
            r#"id="problem""#,
            r#"id="how-it-works""#,
            r#"id="features""#,
            r#"id="use-cases""#,
            "No spam, ever.",
            "All rights reserved.",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn renders_both_forms_idle() {
        let html = render_page(&fixbot());

        assert!(html.contains(r#"id="waitlist""#));
        assert!(html.contains(r#"id="join""#));
        assert_eq!(html.matches(r#"data-status="idle""#).count(), 2);
        assert!(!html.contains("Please enter an email."));
    }

    #[test]
    fn nav_cta_targets_hero_form() {
        let html = render_page(&fixbot());
        assert!(html.contains(r##"href="#waitlist""##));
        assert!(html.contains(r##"href="#problem""##));
    }

    #[test]
    fn custom_order_and_subset() {
        let content = SiteContent {
            sections: vec![SectionKind::Footer, SectionKind::Features],
            ..fixbot()
        };
        let html = render_page(&content);

        let footer = html.find("All rights reserved.").expect("footer");
        let features = html.find(r#"id="features""#).expect("features");
        assert!(footer < features);
        assert!(!html.contains("AI Support Automation"));
        assert!(!html.contains("data-status"));
    }

    #[test]
    fn nav_without_hero_links_to_top() {
        let content = SiteContent {
            sections: vec![SectionKind::Nav],
            ..fixbot()
        };
        let html = render_page(&content);
        assert!(!html.contains(r##"href="#waitlist""##));
        assert!(html.contains("Join Waitlist"));
    }

    #[test]
    fn spectrum_palette_changes_accents_only() {
        let content = SiteContent {
            palette: crate::theme::Palette::Spectrum,
            ..fixbot()
        };
        let html = render_page(&content);
        assert!(html.contains("from-blue-600 via-purple-600 to-pink-600"));
        assert_eq!(html.matches(r#"data-status="idle""#).count(), 2);
    }

    #[test]
    fn hook_from_caller_reaches_hero_form() {
        use crate::components::LandingPage;
        use crate::hook::SubmitHook;

        let hook = SubmitHook::new();
        assert!(!hook.submit());

        let page = view! { <LandingPage content=fixbot() hook=hook.clone() /> };
        assert!(hook.bound_form().is_some());
        assert!(!hook.submit());

        let html = page.to_html();
        assert_eq!(html.matches("Please enter an email.").count(), 1);
        assert_eq!(html.matches(r#"data-status="idle""#).count(), 1);
    }

    #[test]
    fn nav_cta_on_fresh_page_shows_no_error() {
        use crate::components::LandingPage;
        use crate::hook::SubmitHook;

        let hook = SubmitHook::new();
        let page = view! { <LandingPage content=fixbot() hook=hook.clone() /> };

        // what the nav CTA runs on click
        assert!(!hook.submit_if_filled());

        let html = page.to_html();
        assert!(!html.contains("Please enter an email."));
        assert_eq!(html.matches(r#"data-status="idle""#).count(), 2);
    }
}
