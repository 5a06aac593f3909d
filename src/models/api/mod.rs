pub mod params;

pub use params::{AuditHtmlRequest, AuditQuery, AuditResponse, BoilerplateRequest, SitemapRequest};
