//! Styling tokens: Tailwind class strings shared by the sections.
//!
//! A [`Palette`] picks the accent colours for the whole page. A
//! [`FormVariant`] only decides how one waitlist form is coloured against
//! the background it sits on. Neither changes behaviour.

use serde::{Deserialize, Serialize};

use crate::waitlist::SubmitStatus;

/// Accent colour family for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    /// Emerald → teal → cyan
    #[default]
    Emerald,
    /// Blue → purple → pink
    Spectrum,
}

/// Class strings resolved from a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub logo_gradient: &'static str,
    pub button_gradient: &'static str,
    pub button_shadow: &'static str,
    pub gradient_text: &'static str,
    pub badge: &'static str,
    pub accent_text: &'static str,
    pub focus_ring: &'static str,
    pub orb_primary: &'static str,
    pub orb_secondary: &'static str,
    pub timeline: &'static str,
    pub card_hover: &'static str,
    pub icon_tile: &'static str,
    pub cta_background: &'static str,
    pub cta_orb_primary: &'static str,
    pub cta_orb_secondary: &'static str,
    pub cta_subtext: &'static str,
    pub cta_fineprint: &'static str,
}

impl Palette {
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Palette::Emerald => ThemeTokens {
                logo_gradient: "bg-gradient-to-br from-emerald-600 to-teal-600",
                button_gradient: "bg-gradient-to-br from-emerald-600 via-teal-600 to-cyan-600",
                button_shadow: "shadow-[0_1px_2px_rgba(0,0,0,0.08),0_8px_16px_rgba(16,185,129,0.24)] hover:shadow-[0_1px_2px_rgba(0,0,0,0.08),0_12px_24px_rgba(16,185,129,0.32)]",
                gradient_text: "bg-gradient-to-br from-emerald-600 to-cyan-600 bg-clip-text text-transparent",
                badge: "bg-emerald-50 text-emerald-600",
                accent_text: "text-emerald-600",
                focus_ring: "focus-within:border-emerald-500 focus-within:shadow-[0_2px_8px_rgba(16,185,129,0.18)]",
                orb_primary: "bg-emerald-400/20",
                orb_secondary: "bg-teal-400/20",
                timeline: "bg-gradient-to-r from-emerald-600 via-teal-600 to-cyan-600",
                card_hover: "hover:border-emerald-600 hover:shadow-[0_8px_24px_rgba(16,185,129,0.12)]",
                icon_tile: "bg-gradient-to-br from-emerald-50 to-teal-50",
                cta_background: "bg-gradient-to-br from-emerald-900 via-teal-900 to-cyan-900",
                cta_orb_primary: "bg-emerald-500/30",
                cta_orb_secondary: "bg-teal-500/30",
                cta_subtext: "text-emerald-100",
                cta_fineprint: "text-emerald-200",
            },
            Palette::Spectrum => ThemeTokens {
                logo_gradient: "bg-gradient-to-br from-blue-600 to-purple-600",
                button_gradient: "bg-gradient-to-br from-blue-600 via-purple-600 to-pink-600",
                button_shadow: "shadow-[0_1px_2px_rgba(0,0,0,0.08),0_8px_16px_rgba(37,99,235,0.24)] hover:shadow-[0_1px_2px_rgba(0,0,0,0.08),0_12px_24px_rgba(37,99,235,0.32)]",
                gradient_text: "bg-gradient-to-br from-blue-600 to-pink-600 bg-clip-text text-transparent",
                badge: "bg-blue-50 text-blue-600",
                accent_text: "text-blue-600",
                focus_ring: "focus-within:border-blue-500 focus-within:shadow-[0_2px_8px_rgba(37,99,235,0.18)]",
                orb_primary: "bg-blue-400/20",
                orb_secondary: "bg-purple-400/20",
                timeline: "bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600",
                card_hover: "hover:border-blue-600 hover:shadow-[0_8px_24px_rgba(37,99,235,0.12)]",
                icon_tile: "bg-gradient-to-br from-blue-50 to-purple-50",
                cta_background: "bg-gradient-to-br from-blue-900 via-purple-900 to-pink-900",
                cta_orb_primary: "bg-blue-500/30",
                cta_orb_secondary: "bg-purple-500/30",
                cta_subtext: "text-purple-100",
                cta_fineprint: "text-purple-200",
            },
        }
    }
}

/// Background a waitlist form is placed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    #[default]
    Light,
    Dark,
}

const INPUT_SHELL: &str = "flex items-center h-[56px] px-4 rounded-[14px] border shadow-[0_1px_2px_rgba(0,0,0,0.04)] transition-all duration-150 min-w-[280px]";
const BUTTON_BASE: &str = "h-[56px] px-8 rounded-[14px] font-semibold hover:scale-[1.02] transition-all duration-200 inline-flex items-center gap-2";

impl FormVariant {
    /// Wrapper around the email `<input>`.
    pub fn input_class(self, tokens: &ThemeTokens) -> String {
        let surface = match self {
            FormVariant::Light => "bg-white border-slate-300",
            FormVariant::Dark => "bg-white/90 border-white/30 text-slate-900",
        };
        format!("{INPUT_SHELL} {} {surface}", tokens.focus_ring)
    }

    pub fn button_class(self, tokens: &ThemeTokens) -> String {
        match self {
            FormVariant::Light => format!(
                "{BUTTON_BASE} {} {} text-white",
                tokens.button_gradient, tokens.button_shadow
            ),
            FormVariant::Dark => format!(
                "{BUTTON_BASE} bg-white text-slate-900 shadow-[0_4px_16px_rgba(0,0,0,0.2)] hover:shadow-[0_8px_24px_rgba(0,0,0,0.3)]"
            ),
        }
    }

    /// Colour of the inline status message.
    pub fn message_class(self, status: SubmitStatus) -> &'static str {
        match (self, status) {
            (FormVariant::Light, SubmitStatus::Success) => "text-emerald-600",
            (FormVariant::Dark, SubmitStatus::Success) => "text-emerald-100",
            (FormVariant::Light, _) => "text-red-600",
            (FormVariant::Dark, _) => "text-red-200",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_in_accent() {
        let emerald = Palette::Emerald.tokens();
        let spectrum = Palette::Spectrum.tokens();
        assert!(emerald.button_gradient.contains("emerald"));
        assert!(spectrum.button_gradient.contains("purple"));
        assert_ne!(emerald, spectrum);
    }

    #[test]
    fn dark_form_uses_white_button() {
        let tokens = Palette::Emerald.tokens();
        let class = FormVariant::Dark.button_class(&tokens);
        assert!(class.contains("bg-white"));
        assert!(!class.contains("from-emerald-600"));

        let light = FormVariant::Light.button_class(&tokens);
        assert!(light.contains(tokens.button_gradient));
    }

    #[test]
    fn message_colour_follows_status() {
        assert_eq!(
            FormVariant::Light.message_class(SubmitStatus::Success),
            "text-emerald-600"
        );
        assert_eq!(FormVariant::Light.message_class(SubmitStatus::Error), "text-red-600");
        assert_eq!(
            FormVariant::Dark.message_class(SubmitStatus::Success),
            "text-emerald-100"
        );
        assert_eq!(FormVariant::Dark.message_class(SubmitStatus::Error), "text-red-200");
    }

    #[test]
    fn palette_names_in_toml() {
        #[derive(Deserialize)]
        struct Wrap {
            palette: Palette,
        }
        let wrap: Wrap = toml::from_str(r#"palette = "spectrum""#).expect("parse");
        assert_eq!(wrap.palette, Palette::Spectrum);
    }
}
