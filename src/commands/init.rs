//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# folio-rs configuration

# Site
title: ''
description: ''
language: en

# URL
root: /

# Directory
content_file: content.yml
static_dir: static
public_dir: public

# Page
footer_note: Built with Rust
meta_generator: true
animation:
  enable: true
  duration_ms: 500
  card_stagger_ms: 50
"#;

const CONTENT_TEMPLATE: &str = r#"# Portfolio content. Replace the placeholders (endpoint, links, resume).

identity:
  name: Marcelino Emmanuel
  handle: TheCyberBeat
  tagline: Cybersecurity Enthusiast & Ethical Hacker
  resume: /resume.pdf

hero:
  headline: Marcelino Emmanuel
  subheadline: >-
    Cybersecurity Enthusiast & Ethical Hacker. I build tools, conduct
    simulated attacks, and write defensive playbooks to make systems safer.
  actions:
    - label: See Projects
      target: '#projects'
    - label: Contact Me
      target: '#contact'
  featured_link:
    platform: GitHub
    label: github.com/your-username
    url: https://github.com/your-username
  highlights:
    - label: Primary
      title: Web App Hardening
      detail: Vuln assessment, secure config, CI checks.
    - label: Tools
      title: Scripts & Automations
      detail: Small utilities to speed up triage.
    - label: Playbooks
      title: Incident Response
      detail: Checklist-based, time-saving templates.
    - label: Phishing
      title: Manual Simulations
      detail: Human-centred, educational campaigns.

projects:
  - title: PhishSim - Manual Phishing Demo
    description: A simulated manual phishing workflow with step-by-step breakdown and defensive notes.
    technologies: [Node, Express, Puppeteer]
    live_link: '#'
    repo_link: '#'
    image_url: https://images.unsplash.com/photo-1556157382-97eda2d62296?auto=format&fit=crop&w=1200&q=60
  - title: NetGuard - Small Network Hardening
    description: Automated configuration templates and checklist for small office networks.
    technologies: [Bash, Ansible]
    live_link: '#'
    repo_link: '#'
    image_url: https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1200&q=60
  - title: VulnScan UI
    description: A compact frontend to visualize vulnerability scan results with filters and priorities.
    technologies: [React, Tailwind]
    live_link: '#'
    repo_link: '#'
    image_url: https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=1200&q=60

skills:
  - Linux
  - Nmap
  - Burp Suite
  - Scripting (Python/Bash)
  - React
  - Tailwind
  - Docker
  - Ansible

about:
  paragraphs:
    - >-
      I'm Marcelino, a cybersecurity enthusiast focused on pragmatic defenses
      and human-centred security. I enjoy building small tools that automate
      repetitive triage tasks, running controlled simulations to teach teams
      about phishing, and writing clear playbooks that a junior analyst can follow.
    - >-
      I'm always learning: from web app hardening to network fundamentals. I
      like projects with clear ROI, where a short script or configuration saves
      hours during incident response.
  facts:
    - Based in Nigeria
    - 'Focus: Web App / People-centred security'
    - 'Tools: Nmap, Burp, Git, Docker'
  actions:
    - label: Work with me
      target: '#contact'

contact:
  form_action: https://formspree.io/f/yourFormId
  email: your@email.com
  intro: Got a project or want to collaborate? Drop a short message and I'll get back to you.
  socials:
    - platform: GitHub
      label: github.com/your-username
      url: https://github.com/your-username
    - platform: LinkedIn
      label: linkedin.com/in/your
      url: https://linkedin.com/in/your
    - platform: X
      label: '@your_handle'
      url: https://x.com/your_handle
  privacy_note: >-
    Privacy: I won't share your message. Form submissions go to the inbox
    configured on the provider.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let content_path = target_dir.join("content.yml");
    if content_path.exists() {
        anyhow::bail!("File already exists: {:?}", content_path);
    }

    fs::create_dir_all(target_dir.join("static"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    fs::write(&content_path, CONTENT_TEMPLATE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentDocument;
    use tempfile::TempDir;

    #[test]
    fn test_init_scaffold_is_valid() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("static").is_dir());
        let config = SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.footer_note, "Built with Rust");

        let doc = ContentDocument::load(dir.path().join("content.yml")).unwrap();
        assert_eq!(doc.identity.handle, "TheCyberBeat");
        assert_eq!(doc.projects.len(), 3);
        assert_eq!(doc.skills.len(), 8);
        assert_eq!(doc.contact.socials.len(), 3);
        assert_eq!(doc.hero.highlights.len(), 4);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
