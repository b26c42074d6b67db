//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingPage (sections in SiteContent order)
//! ├── Nav            ── "Join Waitlist" submits the hero form via SubmitHook
//! ├── Hero
//! │   ├── WaitlistForm (light, registered with the SubmitHook)
//! │   └── Scorecard
//! ├── StatsBar
//! ├── Comparison     #problem
//! ├── Steps          #how-it-works
//! ├── Features       #features
//! ├── Testimonials   #use-cases
//! ├── CallToAction
//! │   └── WaitlistForm (dark)
//! └── Footer
//! ```

mod comparison;
mod cta;
mod features;
mod footer;
mod hero;
mod icons;
mod nav;
mod page;
mod stats;
mod steps;
mod testimonials;
mod waitlist_form;

pub use comparison::Comparison;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::{Hero, Scorecard};
pub use icons::{icon_paths, Icon};
pub use nav::Nav;
pub use page::{LandingPage, PageDocument};
pub use stats::StatsBar;
pub use steps::Steps;
pub use testimonials::Testimonials;
pub use waitlist_form::WaitlistForm;

use leptos::prelude::*;

/// Headline lines joined with `<br />`.
pub(crate) fn line_breaks(lines: Vec<String>) -> impl IntoView {
    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {line}
                {(i < last).then(|| view! { <br /> })}
            }
        })
        .collect_view()
}
