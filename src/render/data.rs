//! Data structures for template context
//!
//! Every string in here is already HTML-escaped; templates print them raw.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub meta_generator: String,
    pub stylesheet_href: String,
    /// Whether entrance transitions are emitted at all
    pub animate: bool,
    pub animation_duration_ms: u32,
    pub identity: IdentityData,
    pub resume: Option<LinkData>,
    pub nav: Vec<LinkData>,
    pub hero: HeroData,
    pub heading_appear: String,
    pub headings: HeadingsData,
    pub projects: Vec<ProjectData>,
    pub skills: Vec<String>,
    pub about: AboutData,
    pub contact: ContactData,
    pub footer: FooterData,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityData {
    pub name: String,
    pub handle: String,
    pub tagline: String,
    pub monogram: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkData {
    pub label: String,
    pub href: String,
    /// Extra attributes, e.g. target/rel for off-site links
    pub attrs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialData {
    pub platform: String,
    pub label: String,
    pub href: String,
    pub attrs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroData {
    pub headline: String,
    pub headline_appear: String,
    pub subheadline: String,
    pub subheadline_appear: String,
    pub actions: Vec<LinkData>,
    pub actions_appear: String,
    pub highlights: Vec<HighlightData>,
    pub highlights_appear: String,
    pub featured: Option<SocialData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightData {
    pub label: String,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadingsData {
    pub projects: String,
    pub skills: String,
    pub about: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    /// DOM id, unique within the page
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub live: Option<LinkData>,
    pub repo: Option<LinkData>,
    pub appear: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutData {
    pub paragraphs: Vec<String>,
    pub facts_heading: String,
    pub facts: Vec<String>,
    pub actions: Vec<LinkData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactData {
    pub intro: String,
    pub form_action: String,
    pub mailto: Option<String>,
    pub connect_heading: String,
    pub connect_intro: String,
    pub socials: Vec<SocialData>,
    pub privacy_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterData {
    pub year: i32,
    pub name: String,
    pub handle: String,
    pub note: String,
}
