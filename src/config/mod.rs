//! Configuration module

mod site;

pub use site::AnimationConfig;
pub use site::SiteConfig;
