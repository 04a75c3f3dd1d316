//! sitemap.xml generation

use crate::content::Catalog;
use crate::routes::{comparison_path, tool_path, COMPARE_PREFIX, TOOLS_PREFIX};
use crate::{CoreResult, SiteConfig};
use chrono::NaiveDate;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
}

/// Every public URL of the site, listing pages first
pub fn entries(catalog: &Catalog, config: &SiteConfig) -> CoreResult<Vec<SitemapEntry>> {
    let mut entries = Vec::new();

    for path in ["/", TOOLS_PREFIX, COMPARE_PREFIX] {
        entries.push(SitemapEntry {
            loc: config.canonical(path)?,
            lastmod: None,
        });
    }

    for page in catalog.reviews() {
        entries.push(SitemapEntry {
            loc: config.canonical(&tool_path(&page.slug))?,
            lastmod: page.last_modified(),
        });
    }

    for page in catalog.comparisons() {
        entries.push(SitemapEntry {
            loc: config.canonical(&comparison_path(&page.slug))?,
            lastmod: page.updated,
        });
    }

    Ok(entries)
}

pub fn render_sitemap(catalog: &Catalog, config: &SiteConfig) -> CoreResult<String> {
    let mut xml = String::new();
    xml.push_str(XML_HEADER);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');

    for entry in entries(catalog, config)? {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        if let Some(date) = entry.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", date.format("%Y-%m-%d")));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    Ok(xml)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
