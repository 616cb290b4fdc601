pub mod crawl;
pub mod report;

pub use crawl::{MirrorOptions, MirrorProgressCallback, execute_mirror};
pub use report::{ReportFormat, generate_mirror_report, render_report};
