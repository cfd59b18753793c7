// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundled content - compiled into the binary
//!
//! Served when neither remote tier answers, so every page still renders
//! something complete.

use super::normalize::Family;
use super::request::Slug;
use super::types::{
    AboutSection, ContactSection, ContentData, ContentItem, ContentKind, HeroSection,
    HomepageSections, ItemDetails,
};

/// Bundled content for a kind
///
/// Single-item kinds carry the requested slug when there is one.
pub fn content(kind: ContentKind, slug: Option<&Slug>) -> ContentData {
    match kind {
        ContentKind::Homepage => ContentData::Homepage(homepage()),
        ContentKind::ProjectList => ContentData::Projects(projects()),
        ContentKind::PostList => ContentData::Posts(posts()),
        ContentKind::AboutPage => ContentData::Page(about_page()),
        ContentKind::SinglePost => ContentData::Post(post(slug)),
        ContentKind::SingleProject => ContentData::Project(project(slug)),
    }
}

pub fn homepage() -> HomepageSections {
    HomepageSections {
        hero: HeroSection {
            title: "Hi, I build things for the web".to_string(),
            subtitle: "Developer & designer".to_string(),
            description: "I design and build fast, accessible websites and the tools behind them."
                .to_string(),
            cta_text: "View my work".to_string(),
            cta_link: "/projects".to_string(),
        },
        about: AboutSection {
            title: "About me".to_string(),
            content: "<p>I have spent the last decade shipping websites, APIs and design systems for teams of every size.</p>".to_string(),
        },
        contact: ContactSection {
            title: "Get in touch".to_string(),
            description: "Have a project in mind? I'd love to hear about it.".to_string(),
            email: "hello@example.com".to_string(),
        },
    }
}

fn placeholder_project(slug: &str) -> ContentItem {
    ContentItem {
        id: "fallback-project-1".to_string(),
        title: "Portfolio Website".to_string(),
        excerpt: "<p>A headless WordPress site with a statically rendered front end.</p>"
            .to_string(),
        slug: slug.to_string(),
        date: None,
        featured_image: None,
        link: Family::Project.link(slug),
        details: ItemDetails::Project {
            content: "<p>Project details are temporarily unavailable.</p>".to_string(),
            visit_link: None,
            repository_link: None,
            technologies: vec!["WordPress".to_string(), "GraphQL".to_string()],
        },
    }
}

pub fn projects() -> Vec<ContentItem> {
    vec![placeholder_project("portfolio-website")]
}

fn placeholder_post(index: usize, title: &str, slug: &str, excerpt: &str) -> ContentItem {
    ContentItem {
        id: format!("fallback-post-{}", index),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        slug: slug.to_string(),
        date: None,
        featured_image: None,
        link: Family::Post.link(slug),
        details: ItemDetails::Post {
            content: "<p>This post is temporarily unavailable.</p>".to_string(),
            author: None,
            categories: Vec::new(),
            tags: Vec::new(),
        },
    }
}

pub fn posts() -> Vec<ContentItem> {
    vec![
        placeholder_post(
            1,
            "Building a Headless Portfolio",
            "building-a-headless-portfolio",
            "<p>Notes on pairing WordPress with a modern front end.</p>",
        ),
        placeholder_post(
            2,
            "Designing for Performance",
            "designing-for-performance",
            "<p>Small decisions that keep pages fast.</p>",
        ),
        placeholder_post(
            3,
            "Lessons from Client Work",
            "lessons-from-client-work",
            "<p>What a few years of freelance projects taught me.</p>",
        ),
    ]
}

pub fn about_page() -> ContentItem {
    ContentItem {
        id: "fallback-page-about".to_string(),
        title: "About".to_string(),
        excerpt: String::new(),
        slug: "about".to_string(),
        date: None,
        featured_image: None,
        link: Family::Page.link("about"),
        details: ItemDetails::Page {
            content: "<p>I'm a developer and designer focused on the web. More about me soon.</p>"
                .to_string(),
        },
    }
}

/// Placeholder for a post that could not be loaded
pub fn post(slug: Option<&Slug>) -> ContentItem {
    let slug = slug.map(Slug::as_str).unwrap_or_default();
    placeholder_post(
        0,
        "Post unavailable",
        slug,
        "<p>This post could not be loaded right now.</p>",
    )
}

/// Placeholder for a project that could not be loaded
pub fn project(slug: Option<&Slug>) -> ContentItem {
    let slug = slug.map(Slug::as_str).unwrap_or_default();
    placeholder_project(slug)
}
