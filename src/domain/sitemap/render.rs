// src/domain/sitemap/render.rs
use crate::domain::sitemap::builder::SiteRoot;
use crate::domain::sitemap::entity::SiteManifestEntry;
use chrono::SecondsFormat;
use std::fmt::Write as _;

/// Paths crawlers must not index.
const DISALLOWED_PATHS: [&str; 2] = ["/auth", "/api/"];

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_sitemap_xml(entries: &[SiteManifestEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // writing into a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency,
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(root: &SiteRoot) -> String {
    let mut robots = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        let _ = writeln!(robots, "Disallow: {path}");
    }
    let _ = write!(robots, "\nSitemap: {}\n", root.join("/sitemap.xml"));
    robots
}
