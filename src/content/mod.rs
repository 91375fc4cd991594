//! Content module - the document the page is rendered from

mod document;
mod validate;

pub use document::{
    About, CallToAction, Contact, ContentDocument, HeroCopy, Highlight, Identity, ProjectEntry,
    SectionHeadings, SocialLink,
};
pub use validate::ContentError;
