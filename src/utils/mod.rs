pub mod errors;
pub mod file_utils;
pub mod pdf_utils;

pub use file_utils::{
    default_report_filename, ensure_pdf_extension, sanitize_filename, save_report,
    save_report_pdf, save_report_text, ReportFormat,
};
pub use pdf_utils::{paginate, render_report_pdf};
