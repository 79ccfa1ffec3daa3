//! Shared types, error model, and configuration for SiteCrumbs.
//!
//! This crate is the foundation depended on by the other SiteCrumbs crates.
//! It provides:
//! - [`SiteCrumbsError`] — the unified error type
//! - Domain types ([`BreadcrumbEntry`], [`BreadcrumbList`], [`ListItem`])
//! - Configuration ([`AppConfig`], [`SiteConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, OutputFormat, SiteConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from, validate_base_url,
};
pub use error::{Result, SiteCrumbsError};
pub use types::{
    BREADCRUMB_LIST_TYPE, BreadcrumbEntry, BreadcrumbList, LIST_ITEM_TYPE, ListItem,
    SCHEMA_CONTEXT,
};
