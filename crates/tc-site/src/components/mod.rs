//! Site components

mod cards;
mod faq;
mod footer;
mod nav;
mod pricing;
mod pros_cons;
mod score_table;
mod seo_head;

pub use cards::*;
pub use faq::FaqAccordion;
pub use footer::Footer;
pub use nav::SiteNav;
pub use pricing::PricingTable;
pub use pros_cons::ProsCons;
pub use score_table::ScoreTable;
pub use seo_head::{Breadcrumbs, SeoHead};
