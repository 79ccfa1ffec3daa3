//! Breadcrumb generation and site taxonomy for SiteCrumbs.
//!
//! This crate turns request paths into localized navigation trails
//! ([`breadcrumbs`]) and renders those trails as schema.org structured data
//! ([`structured_data`]).

pub mod breadcrumbs;
pub mod locale;
pub mod section;
pub mod slug;
pub mod structured_data;

pub use breadcrumbs::{
    generate_blog_breadcrumbs, generate_breadcrumbs, generate_goodies_breadcrumbs,
    generate_project_breadcrumbs, generate_service_breadcrumbs,
};
pub use locale::Locale;
pub use section::{GoodiesCategory, Section};
