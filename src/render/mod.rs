//! Page renderer - turns a content document into the portfolio page
//!
//! Templates are embedded in the binary and rendered with Tera. The page has
//! six sections in a fixed order: hero, projects, skills, about, contact and
//! footer. The footer year is the only value taken from the clock.

mod data;

pub use data::*;

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{CallToAction, ContentDocument, ProjectEntry, SocialLink};
use crate::helpers::{
    appear, card_appear, html_escape, link_target_attrs, mailto, meta_generator, resolve_href,
    url_for, year_of, Motion, ACTIONS_DELAY_MS, HIGHLIGHTS_DELAY_MS, SUBHEADLINE_DELAY_MS,
};

/// Path of the stylesheet inside the output directory
pub const STYLESHEET_PATH: &str = "css/folio.css";

const STYLESHEET: &str = include_str!("templates/folio.css");

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Projects,
    Skills,
    About,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections linked from the header
    pub const NAVIGABLE: [Section; 4] = [
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    /// Element id, `None` for the footer
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("hero"),
            Section::Projects => Some("projects"),
            Section::Skills => Some("skills"),
            Section::About => Some("about"),
            Section::Contact => Some("contact"),
            Section::Footer => None,
        }
    }

    /// Label used in the header navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::About => "About",
            Section::Contact => "Contact",
            Section::Footer => "",
        }
    }
}

/// Renders the portfolio page with the embedded templates
pub struct PageRenderer {
    tera: Tera,
    config: SiteConfig,
}

impl PageRenderer {
    /// Create a renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Context strings are escaped while building PageData
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("templates/layout.html")),
            (
                "partials/header.html",
                include_str!("templates/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("templates/partials/footer.html"),
            ),
            (
                "sections/hero.html",
                include_str!("templates/sections/hero.html"),
            ),
            (
                "sections/projects.html",
                include_str!("templates/sections/projects.html"),
            ),
            (
                "sections/skills.html",
                include_str!("templates/sections/skills.html"),
            ),
            (
                "sections/about.html",
                include_str!("templates/sections/about.html"),
            ),
            (
                "sections/contact.html",
                include_str!("templates/sections/contact.html"),
            ),
        ])?;

        Ok(Self {
            tera,
            config: config.clone(),
        })
    }

    /// The stylesheet the page links to
    pub fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }

    /// Render the page using the system clock
    pub fn render(&self, doc: &ContentDocument) -> Result<String> {
        self.render_at(doc, &Local::now())
    }

    /// Render the page as of `now`
    pub fn render_at<Tz: TimeZone>(&self, doc: &ContentDocument, now: &DateTime<Tz>) -> Result<String> {
        let page = self.build_page_data(doc, year_of(now));

        let mut context = Context::new();
        context.insert("page", &page);

        let html = self.tera.render("layout.html", &context)?;
        tracing::debug!(
            "Rendered page: {} projects, {} skills, {} bytes",
            page.projects.len(),
            page.skills.len(),
            html.len()
        );
        Ok(html)
    }

    /// Build the escaped template context
    pub fn build_page_data(&self, doc: &ContentDocument, year: i32) -> PageData {
        let anim = &self.config.animation;
        let identity = &doc.identity;

        let title = if self.config.title.trim().is_empty() {
            format!("{} ({})", identity.display_name(), identity.handle)
        } else {
            self.config.title.clone()
        };

        let resume = identity
            .resume
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .map(|r| LinkData {
                label: "Resume".to_string(),
                href: html_escape(&resolve_href(&self.config, r)),
                attrs: String::new(),
            });

        let nav = Section::NAVIGABLE
            .iter()
            .filter_map(|section| {
                let anchor = section.anchor()?;
                Some(LinkData {
                    label: section.nav_label().to_string(),
                    href: format!("#{}", anchor),
                    attrs: String::new(),
                })
            })
            .collect();

        let hero = HeroData {
            headline: html_escape(&doc.hero.headline),
            headline_appear: appear(anim, Motion::Drop, 0),
            subheadline: html_escape(&doc.hero.subheadline),
            subheadline_appear: appear(anim, Motion::Rise, SUBHEADLINE_DELAY_MS),
            actions: doc.hero.actions.iter().map(|a| self.link(a)).collect(),
            actions_appear: appear(anim, Motion::Fade, ACTIONS_DELAY_MS),
            highlights: doc
                .hero
                .highlights
                .iter()
                .map(|h| HighlightData {
                    label: html_escape(&h.label),
                    title: html_escape(&h.title),
                    detail: html_escape(&h.detail),
                })
                .collect(),
            highlights_appear: appear(anim, Motion::Grow, HIGHLIGHTS_DELAY_MS),
            featured: doc.hero.featured_link.as_ref().map(|s| self.social(s)),
        };

        let contact = &doc.contact;
        let email = contact.email.trim();

        PageData {
            lang: html_escape(&self.config.language),
            title: html_escape(&title),
            description: html_escape(&self.config.description),
            meta_generator: if self.config.meta_generator {
                meta_generator()
            } else {
                String::new()
            },
            stylesheet_href: html_escape(&url_for(&self.config, STYLESHEET_PATH)),
            animate: anim.enable,
            animation_duration_ms: anim.duration_ms,
            identity: IdentityData {
                name: html_escape(identity.display_name()),
                handle: html_escape(&identity.handle),
                tagline: html_escape(&identity.tagline),
                monogram: html_escape(&identity.monogram()),
            },
            resume,
            nav,
            hero,
            heading_appear: appear(anim, Motion::Rise, 0),
            headings: HeadingsData {
                projects: html_escape(&doc.headings.projects),
                skills: html_escape(&doc.headings.skills),
                about: html_escape(&doc.headings.about),
                contact: html_escape(&doc.headings.contact),
            },
            projects: self.project_cards(&doc.projects),
            skills: doc.skills.iter().map(|s| html_escape(s)).collect(),
            about: AboutData {
                paragraphs: doc.about.paragraphs.iter().map(|p| html_escape(p)).collect(),
                facts_heading: html_escape(&doc.about.facts_heading),
                facts: doc.about.facts.iter().map(|f| html_escape(f)).collect(),
                actions: doc.about.actions.iter().map(|a| self.link(a)).collect(),
            },
            contact: ContactData {
                intro: html_escape(&contact.intro),
                form_action: html_escape(contact.form_action.trim()),
                mailto: if email.is_empty() {
                    None
                } else {
                    Some(html_escape(&mailto(email)))
                },
                connect_heading: html_escape(&contact.connect_heading),
                connect_intro: html_escape(&contact.connect_intro),
                socials: contact.socials.iter().map(|s| self.social(s)).collect(),
                privacy_note: contact
                    .privacy_note
                    .as_deref()
                    .filter(|n| !n.trim().is_empty())
                    .map(html_escape),
            },
            footer: FooterData {
                year,
                name: html_escape(identity.display_name()),
                handle: html_escape(&identity.handle),
                note: html_escape(&self.config.footer_note),
            },
        }
    }

    fn project_cards(&self, projects: &[ProjectEntry]) -> Vec<ProjectData> {
        let mut used_ids: Vec<String> = Vec::with_capacity(projects.len());

        projects
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let id = unique_id(&mut used_ids, &p.title, i);
                ProjectData {
                    id,
                    title: html_escape(&p.title),
                    description: html_escape(&p.description),
                    technologies: p
                        .unique_technologies()
                        .into_iter()
                        .map(html_escape)
                        .collect(),
                    image_url: if p.image_url.trim().is_empty() {
                        String::new()
                    } else {
                        html_escape(&resolve_href(&self.config, &p.image_url))
                    },
                    live: self.optional_link("Live", &p.live_link),
                    repo: self.optional_link("Code", &p.repo_link),
                    appear: card_appear(&self.config.animation, i),
                }
            })
            .collect()
    }

    fn link(&self, action: &CallToAction) -> LinkData {
        let href = resolve_href(&self.config, &action.target);
        LinkData {
            label: html_escape(&action.label),
            attrs: link_target_attrs(&href).to_string(),
            href: html_escape(&href),
        }
    }

    fn optional_link(&self, label: &str, target: &str) -> Option<LinkData> {
        if target.trim().is_empty() {
            return None;
        }
        Some(self.link(&CallToAction {
            label: label.to_string(),
            target: target.to_string(),
        }))
    }

    fn social(&self, social: &SocialLink) -> SocialData {
        let href = resolve_href(&self.config, &social.url);
        let label = if social.label.trim().is_empty() {
            &social.url
        } else {
            &social.label
        };
        SocialData {
            platform: html_escape(&social.platform),
            label: html_escape(label),
            attrs: link_target_attrs(&href).to_string(),
            href: html_escape(&href),
        }
    }
}

/// Slug-based card id, suffixed when the slug is already taken
fn unique_id(used: &mut Vec<String>, title: &str, index: usize) -> String {
    let slug = slug::slugify(title);
    let base = if slug.is_empty() {
        format!("project-{}", index + 1)
    } else {
        format!("project-{}", slug)
    };

    let mut id = base.clone();
    let mut n = 2;
    while used.contains(&id) {
        id = format!("{}-{}", base, n);
        n += 1;
    }
    used.push(id.clone());
    id
}
