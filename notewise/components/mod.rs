pub mod accordion;
pub mod card;
pub mod footer;
pub mod nav;
pub mod section;
pub mod seo;
