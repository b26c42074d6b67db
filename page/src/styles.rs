//! CSS that Tailwind utilities don't cover.
//!
//! Only the reveal states live here; everything else is utility classes on
//! the elements themselves.

/// Hidden/visible states for `[data-reveal]` elements.
///
/// Timings match [`crate::motion`]: 500ms fade-up, 700ms slide-in, with the
/// `cubic-bezier(0.22, 1, 0.36, 1)` ease.
pub const MOTION_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

[data-reveal] {
    opacity: 0;
    transition-property: opacity, transform;
    transition-duration: 500ms;
    transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
    will-change: opacity, transform;
}

[data-reveal="fade-up"] {
    transform: translateY(24px);
}

[data-reveal="stagger"] {
    transform: translateY(20px);
}

[data-reveal="slide-right"] {
    transform: translateX(40px);
    transition-duration: 700ms;
}

[data-reveal].is-visible {
    opacity: 1;
    transform: none;
}

.lift-on-hover {
    transition: transform 300ms cubic-bezier(0.22, 1, 0.36, 1);
}

.lift-on-hover:hover {
    transform: translateY(-4px);
}

@media (prefers-reduced-motion: reduce) {
    [data-reveal] {
        opacity: 1;
        transform: none;
        transition: none;
    }
}
"#;
