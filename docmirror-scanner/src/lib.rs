pub mod crawler;
pub mod document;
pub mod error;
pub mod fetch;
pub mod identifier;
pub mod result;
pub mod store;

pub use crawler::{Crawler, ProgressCallback};
pub use error::{MirrorError, Result};
pub use fetch::{Fetch, FetchResponse, HttpFetcher};
pub use identifier::{DocPath, IdentifierError, parse_identifier};
pub use result::MirrorSummary;
pub use store::{FsStore, Persist};
