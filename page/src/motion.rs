//! Entry/scroll reveal presets.
//!
//! Elements opt in with a `data-reveal` attribute. [`crate::styles::MOTION_CSS`]
//! keeps them hidden until the landing binary's observer adds `is-visible`.

/// Delay between consecutive items of a staggered group.
pub const STAGGER_STEP_MS: u32 = 80;
/// Easing shared by every reveal.
pub const REVEAL_EASE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
/// Class the observer adds once an element has been seen.
pub const VISIBLE_CLASS: &str = "is-visible";

/// How an element enters the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Rise 24px while fading in
    FadeUp,
    /// Slide in 40px from the right, slightly slower
    SlideInRight,
    /// Rise 20px, delayed by the item's position in its group
    Stagger(usize),
}

impl Reveal {
    /// Value of the `data-reveal` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Reveal::FadeUp => "fade-up",
            Reveal::SlideInRight => "slide-right",
            Reveal::Stagger(_) => "stagger",
        }
    }

    pub fn delay_ms(self) -> u32 {
        match self {
            Reveal::Stagger(index) => STAGGER_STEP_MS.saturating_mul(index as u32),
            _ => 0,
        }
    }

    /// Inline style carrying the per-element delay.
    pub fn style(self) -> String {
        format!("transition-delay: {}ms;", self.delay_ms())
    }
}
