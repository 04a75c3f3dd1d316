//! Content loading
//!
//! Pages are TOML files: reviews under `tools/`, comparisons under
//! `compare/`. A missing directory simply contributes no pages.

use crate::model::{ComparisonPage, ReviewPage};
use crate::routes::{comparison_slug, slugify};
use crate::{CoreError, CoreResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const TOOLS_DIR: &str = "tools";
pub const COMPARE_DIR: &str = "compare";

/// Every review and comparison page, indexed by slug
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    reviews: BTreeMap<String, ReviewPage>,
    comparisons: BTreeMap<String, ComparisonPage>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all pages below a content directory
    pub fn load(dir: &Path) -> CoreResult<Self> {
        let mut catalog = Self::new();

        for path in toml_files(&dir.join(TOOLS_DIR))? {
            let text = fs::read_to_string(&path)?;
            let page = parse_review(&text, &path)?;
            debug!("Loaded review {} from {}", page.slug, path.display());
            catalog.add_review(page)?;
        }

        for path in toml_files(&dir.join(COMPARE_DIR))? {
            let text = fs::read_to_string(&path)?;
            let page = parse_comparison(&text, &path)?;
            debug!("Loaded comparison {} from {}", page.slug, path.display());
            catalog.add_comparison(page)?;
        }

        info!(
            "Catalog loaded from {}: {} reviews, {} comparisons",
            dir.display(),
            catalog.review_count(),
            catalog.comparison_count()
        );

        Ok(catalog)
    }

    pub fn add_review(&mut self, page: ReviewPage) -> CoreResult<()> {
        if self.reviews.contains_key(&page.slug) {
            return Err(CoreError::Content(format!("duplicate review slug '{}'", page.slug)));
        }
        self.reviews.insert(page.slug.clone(), page);
        Ok(())
    }

    pub fn add_comparison(&mut self, page: ComparisonPage) -> CoreResult<()> {
        if self.comparisons.contains_key(&page.slug) {
            return Err(CoreError::Content(format!(
                "duplicate comparison slug '{}'",
                page.slug
            )));
        }
        self.comparisons.insert(page.slug.clone(), page);
        Ok(())
    }

    pub fn review(&self, slug: &str) -> Option<&ReviewPage> {
        self.reviews.get(slug)
    }

    pub fn comparison(&self, slug: &str) -> Option<&ComparisonPage> {
        self.comparisons.get(slug)
    }

    /// Reviews in slug order
    pub fn reviews(&self) -> impl Iterator<Item = &ReviewPage> {
        self.reviews.values()
    }

    /// Comparisons in slug order
    pub fn comparisons(&self) -> impl Iterator<Item = &ComparisonPage> {
        self.comparisons.values()
    }

    /// Comparisons listing a contender with this key
    pub fn comparisons_featuring(&self, key: &str) -> Vec<&ComparisonPage> {
        self.comparisons
            .values()
            .filter(|page| page.contenders.iter().any(|c| c.key == key))
            .collect()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn comparison_count(&self) -> usize {
        self.comparisons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty() && self.comparisons.is_empty()
    }
}

/// Parse a review, taking the slug from the file name when the file omits it
pub fn parse_review(text: &str, path: &Path) -> CoreResult<ReviewPage> {
    let mut page: ReviewPage = toml::from_str(text)
        .map_err(|e| CoreError::Parse(format!("{}: {}", path.display(), e)))?;

    if page.slug.is_empty() {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        page.slug = slugify(stem);
    }
    if page.slug.is_empty() {
        return Err(CoreError::Content(format!(
            "{}: review has no slug",
            path.display()
        )));
    }

    Ok(page)
}

/// Parse a comparison, deriving the slug from contender keys when omitted
pub fn parse_comparison(text: &str, path: &Path) -> CoreResult<ComparisonPage> {
    let mut page: ComparisonPage = toml::from_str(text)
        .map_err(|e| CoreError::Parse(format!("{}: {}", path.display(), e)))?;

    if page.slug.is_empty() {
        let keys: Vec<&str> = page.contenders.iter().map(|c| c.key.as_str()).collect();
        page.slug = comparison_slug(&keys);
    }

    Ok(page)
}

fn toml_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!("Content directory {} not present, skipping", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEW: &str = r#"
category = "VPN"
rating = 4.7
verdict = "Fast and affordable."
pros = ["Fast", "Cheap"]
cons = ["Busy apps"]

[tool]
key = "nordvpn"
name = "NordVPN"
description = "Fast VPN with a huge server network"
url = "https://nordvpn.com"

[seo]
title = "NordVPN Review"
description = "Is NordVPN worth it?"

[hero]
headline = "NordVPN Review"

[[faqs]]
question = "Does it log?"
answer = "No."
"#;

    const COMPARISON: &str = r#"
category = "VPN"
title = "NordVPN vs Surfshark"

[seo]
title = "NordVPN vs Surfshark"
description = "Head to head"

[[contenders]]
key = "nordvpn"
name = "NordVPN"
description = "Fast"
url = "https://nordvpn.com"
review_slug = "nordvpn"

[[contenders]]
key = "surfshark"
name = "Surfshark"
description = "Cheap"
url = "https://surfshark.com"

[[scores]]
label = "Speed"
scores = { nordvpn = 9.4, surfshark = 9.0 }
"#;

    #[test]
    fn test_parse_review_takes_slug_from_file_name() {
        let page = parse_review(REVIEW, Path::new("content/tools/NordVPN.toml")).unwrap();
        assert_eq!(page.slug, "nordvpn");
        assert_eq!(page.tool.name, "NordVPN");
        assert_eq!(page.pros.len(), 2);
        assert_eq!(page.faqs[0].answer, "No.");
        assert!(page.pricing.is_empty());
    }

    #[test]
    fn test_parse_comparison_derives_slug() {
        let page = parse_comparison(COMPARISON, Path::new("vpn.toml")).unwrap();
        assert_eq!(page.slug, "nordvpn-vs-surfshark");
        assert_eq!(page.scores[0].score("surfshark"), Some(9.0));
        assert_eq!(page.contenders[0].review_slug.as_deref(), Some("nordvpn"));
    }

    #[test]
    fn test_parse_review_reports_path() {
        let err = parse_review("category = ", Path::new("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(TOOLS_DIR)).unwrap();
        fs::create_dir_all(dir.path().join(COMPARE_DIR)).unwrap();
        fs::write(dir.path().join(TOOLS_DIR).join("nordvpn.toml"), REVIEW).unwrap();
        fs::write(dir.path().join(TOOLS_DIR).join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join(COMPARE_DIR).join("vpn.toml"), COMPARISON).unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();

        assert_eq!(catalog.review_count(), 1);
        assert_eq!(catalog.comparison_count(), 1);
        assert!(catalog.review("nordvpn").is_some());
        assert!(catalog.comparison("nordvpn-vs-surfshark").is_some());
        assert_eq!(catalog.comparisons_featuring("surfshark").len(), 1);
        assert!(catalog.comparisons_featuring("expressvpn").is_empty());
    }

    #[test]
    fn test_load_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(&dir.path().join("nothing")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let page = parse_review(REVIEW, Path::new("nordvpn.toml")).unwrap();
        let mut catalog = Catalog::new();
        catalog.add_review(page.clone()).unwrap();
        assert!(matches!(catalog.add_review(page), Err(CoreError::Content(_))));
    }

    #[test]
    fn test_bundled_content_is_valid() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../content");
        let catalog = Catalog::load(&dir).unwrap();

        assert_eq!(catalog.review_count(), 9);
        assert_eq!(catalog.comparison_count(), 3);
        assert!(catalog.comparison("nordvpn-vs-expressvpn-vs-surfshark").is_some());

        let report = crate::validation::validate_catalog(&catalog);
        assert!(report.is_clean(), "{:?}", report.issues);
    }
}
