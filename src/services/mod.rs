pub mod boilerplate_service;
pub mod site_audit_service;
pub mod sitemap_service;

pub use boilerplate_service::{load_settings, render_html, save_settings};
pub use site_audit_service::{
    perform_metadata_audit, run_audit_from_file, run_audit_from_url, ScoringRules,
};
pub use sitemap_service::{generate_sitemap, GeneratedSitemap};
