//! Site pages

mod compare;
mod home;
mod not_found;
mod tools;

pub use compare::{ComparisonPageView, ComparisonsIndexPage};
pub use home::HomePage;
pub use not_found::NotFound;
pub use tools::{ToolPage, ToolsIndexPage};

use crate::components::PageLink;
use tc_core::routes::{comparison_path, tool_path};
use tc_core::{ComparisonPage, ReviewPage};

pub fn review_link(page: &ReviewPage) -> PageLink {
    PageLink {
        href: tool_path(&page.slug),
        label: page.tool.name.clone(),
        detail: format!("{} · rated {:.1}/5", page.category, page.rating),
    }
}

pub fn comparison_link(page: &ComparisonPage) -> PageLink {
    let names: Vec<&str> = page.contenders.iter().map(|c| c.name.as_str()).collect();
    PageLink {
        href: comparison_path(&page.slug),
        label: page.title.clone(),
        detail: format!("{} · {}", page.category, names.join(" vs ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::model::{Hero, SeoFields};
    use tc_core::Contender;

    #[test]
    fn test_review_link() {
        let page = ReviewPage {
            slug: "buffer".to_string(),
            category: "Social".to_string(),
            tool: Contender::new("buffer", "Buffer", "", ""),
            seo: SeoFields::default(),
            hero: Hero::default(),
            features: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            pricing: Vec::new(),
            faqs: Vec::new(),
            rating: 4.25,
            verdict: String::new(),
            related: Vec::new(),
            published: None,
            updated: None,
        };
        let link = review_link(&page);
        assert_eq!(link.href, "/tools/buffer");
        assert_eq!(link.label, "Buffer");
        assert!(link.detail.starts_with("Social · rated"));
    }

    #[test]
    fn test_comparison_link() {
        let page = ComparisonPage {
            slug: "a-vs-b".to_string(),
            category: "VPN".to_string(),
            title: "A vs B".to_string(),
            seo: SeoFields::default(),
            intro: String::new(),
            contenders: vec![Contender::new("a", "Alpha", "", ""), Contender::new("b", "Beta", "", "")],
            scores: Vec::new(),
            faqs: Vec::new(),
            verdict: String::new(),
            updated: None,
        };
        let link = comparison_link(&page);
        assert_eq!(link.href, "/tools/compare/a-vs-b");
        assert_eq!(link.detail, "VPN · Alpha vs Beta");
    }
}
