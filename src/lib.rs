//! zele-report - renders the ZELE phishing campaign analysis report

pub mod config;
pub mod report;

pub use config::{OutputFormat, ReportConfig};
pub use report::{render, render_banner, render_report, render_summary, write_report};
