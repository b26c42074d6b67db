//! Page content model.
//!
//! Everything the page says lives in a [`SiteContent`]: section order, copy,
//! icons and the accent palette. The FixBot copy ships as TOML embedded at
//! build time; other pages can be described the same way.
//!
//! ```rust
//! use fixbot_page::content::{SectionKind, SiteContent};
//!
//! let content = SiteContent::from_toml_str(r#"
//! sections = ["nav", "hero", "footer"]
//!
//! [brand]
//! name = "Acme"
//! "#).unwrap();
//! assert_eq!(content.brand.name, "Acme");
//! assert_eq!(content.sections, vec![SectionKind::Nav, SectionKind::Hero, SectionKind::Footer]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Palette;

/// FixBot copy, embedded at build time.
pub const FIXBOT_TOML: &str = include_str!("../content/fixbot.toml");

/// Problems found while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("section `{0:?}` is listed more than once")]
    DuplicateSection(SectionKind),
    #[error("anchor `{0}` is used by more than one target")]
    DuplicateAnchor(String),
    #[error("nav link `{0}` points at an anchor the page does not render")]
    DanglingAnchor(String),
}

/// One top-level block of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Nav,
    Hero,
    Stats,
    Comparison,
    Steps,
    Features,
    Testimonials,
    CallToAction,
    Footer,
}

impl SectionKind {
    /// Order used when content doesn't specify one.
    pub const DEFAULT_ORDER: [SectionKind; 9] = [
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::Stats,
        SectionKind::Comparison,
        SectionKind::Steps,
        SectionKind::Features,
        SectionKind::Testimonials,
        SectionKind::CallToAction,
        SectionKind::Footer,
    ];

    /// Element id that in-page links can target.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionKind::Comparison => Some("problem"),
            SectionKind::Steps => Some("how-it-works"),
            SectionKind::Features => Some("features"),
            SectionKind::Testimonials => Some("use-cases"),
            _ => None,
        }
    }
}

/// Icons available to content, by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    ArrowRight,
    BarChart,
    BookOpen,
    #[default]
    Bot,
    CheckCircle,
    FileText,
    MessageCircle,
    MessageSquare,
    Quote,
    Search,
    Sparkles,
    TrendingUp,
    Users,
    X,
    Zap,
}

/// Colour of a small accent (activity icons).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Emerald,
    Blue,
    Purple,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Emerald => "text-emerald-500",
            Tone::Blue => "text-blue-500",
            Tone::Purple => "text-purple-500",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    /// Footer line, e.g. "© 2025 FixBot. All rights reserved."
    pub copyright: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavContent {
    pub links: Vec<Link>,
    /// Label of the button that submits the hero form
    pub cta_label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub change: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub kind: String,
    pub title: String,
    pub time: String,
    pub icon: IconKind,
    pub tone: Tone,
}

/// Floating analytics card next to the hero copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scorecard {
    pub eyebrow: String,
    pub title: String,
    pub trend: String,
    pub metrics: Vec<Metric>,
    pub activity_label: String,
    pub activity: Vec<Activity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistCopy {
    pub placeholder: String,
    pub button_label: String,
    /// `id` of the form element, so links can jump to it
    pub anchor: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub badge: String,
    pub title_lines: Vec<String>,
    pub description: String,
    pub form: WaitlistCopy,
    pub scorecard: Scorecard,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub sublabel: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonColumn {
    pub badge: String,
    pub title_lines: Vec<String>,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonContent {
    pub before: ComparisonColumn,
    pub after: ComparisonColumn,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub number: String,
    pub title: String,
    pub description: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepsContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Step>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaContent {
    pub title_lines: Vec<String>,
    pub subtitle: String,
    pub fineprint: String,
    pub form: WaitlistCopy,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub links: Vec<Link>,
}

/// Everything one landing page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub palette: Palette,
    /// Sections in render order
    pub sections: Vec<SectionKind>,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub stats: Vec<Stat>,
    pub comparison: ComparisonContent,
    pub steps: StepsContent,
    pub features: FeaturesContent,
    pub testimonials: TestimonialsContent,
    pub cta: CtaContent,
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            palette: Palette::default(),
            sections: SectionKind::DEFAULT_ORDER.to_vec(),
            nav: NavContent::default(),
            hero: HeroContent::default(),
            stats: Vec::new(),
            comparison: ComparisonContent::default(),
            steps: StepsContent::default(),
            features: FeaturesContent::default(),
            testimonials: TestimonialsContent::default(),
            cta: CtaContent::default(),
            footer: FooterContent::default(),
        }
    }
}

impl SiteContent {
    /// The bundled FixBot page.
    pub fn fixbot() -> Result<Self, ContentError> {
        Self::from_toml_str(FIXBOT_TOML)
    }

    /// Parse and validate content.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }

    /// Ids that in-page links may target, for the sections actually rendered.
    pub fn anchors(&self) -> Vec<&str> {
        let mut anchors: Vec<&str> = self.sections.iter().filter_map(|s| s.anchor()).collect();
        if self.has_section(SectionKind::Hero) {
            anchors.extend(self.hero.form.anchor.as_deref());
        }
        if self.has_section(SectionKind::CallToAction) {
            anchors.extend(self.cta.form.anchor.as_deref());
        }
        anchors
    }

    /// Check section order and in-page links.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for kind in &self.sections {
            if !seen.insert(*kind) {
                return Err(ContentError::DuplicateSection(*kind));
            }
        }

        let anchors = self.anchors();
        let mut unique = HashSet::new();
        for anchor in &anchors {
            if !unique.insert(*anchor) {
                return Err(ContentError::DuplicateAnchor((*anchor).to_string()));
            }
        }

        if self.has_section(SectionKind::Nav) {
            for link in &self.nav.links {
                if let Some(target) = link.href.strip_prefix('#') {
                    if !target.is_empty() && !unique.contains(target) {
                        return Err(ContentError::DanglingAnchor(link.href.clone()));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::fixbot().expect("bundled content is valid");
        assert_eq!(content.brand.name, "FixBot");
        assert_eq!(content.sections, SectionKind::DEFAULT_ORDER.to_vec());
        assert_eq!(content.hero.form.anchor.as_deref(), Some("waitlist"));
        assert_eq!(content.stats.len(), 3);
        assert_eq!(content.steps.items.len(), 3);
        assert_eq!(content.features.items.len(), 6);
        assert!(!content.testimonials.items.is_empty());
    }

    #[test]
    fn bundled_nav_links_resolve() {
        let content = SiteContent::fixbot().expect("bundled content is valid");
        let anchors = content.anchors();
        for href in ["#problem", "#how-it-works", "#features", "#waitlist"] {
            assert!(
                anchors.contains(&href.trim_start_matches('#')),
                "missing anchor {href}"
            );
        }
    }

    #[test]
    fn empty_source_uses_defaults() {
        let content = SiteContent::from_toml_str("").expect("empty is valid");
        assert_eq!(content.palette, Palette::Emerald);
        assert_eq!(content.sections.len(), 9);
    }

    #[test]
    fn rejects_duplicate_section() {
        let err = SiteContent::from_toml_str(r#"sections = ["hero", "stats", "hero"]"#)
            .expect_err("duplicate");
        assert!(matches!(err, ContentError::DuplicateSection(SectionKind::Hero)));
    }

    #[test]
    fn rejects_dangling_nav_anchor() {
        let source = r##"
sections = ["nav", "hero"]

[[nav.links]]
label = "Features"
href = "#features"
"##;
        let err = SiteContent::from_toml_str(source).expect_err("features not rendered");
        assert_eq!(err.to_string(), "nav link `#features` points at an anchor the page does not render");
    }

    #[test]
    fn external_and_bare_links_are_not_checked() {
        let source = r##"
sections = ["nav"]

[[nav.links]]
label = "Docs"
href = "https://example.com/docs"

[[nav.links]]
label = "Top"
href = "#"
"##;
        assert!(SiteContent::from_toml_str(source).is_ok());
    }

    #[test]
    fn rejects_shared_form_anchor() {
        let source = r#"
sections = ["hero", "call-to-action"]

[hero.form]
anchor = "waitlist"

[cta.form]
anchor = "waitlist"
"#;
        let err = SiteContent::from_toml_str(source).expect_err("shared anchor");
        assert!(matches!(err, ContentError::DuplicateAnchor(a) if a == "waitlist"));
    }

    #[test]
    fn reports_parse_errors() {
        let err = SiteContent::from_toml_str("sections = [\"sidebar\"]").expect_err("unknown kind");
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn section_anchors() {
        assert_eq!(SectionKind::Comparison.anchor(), Some("problem"));
        assert_eq!(SectionKind::Steps.anchor(), Some("how-it-works"));
        assert_eq!(SectionKind::Hero.anchor(), None);
    }
}
