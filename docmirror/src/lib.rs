// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{normalize_start_path, parse_base_url, resolve_output_dir, write_report};

// Re-export mirror functionality from docmirror-core
pub use docmirror_core::crawl::{MirrorOptions, MirrorProgressCallback, execute_mirror};
pub use docmirror_core::report::{ReportFormat, generate_mirror_report, render_report};
