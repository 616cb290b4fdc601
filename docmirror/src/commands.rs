use crate::CLAP_STYLING;
use clap::arg;
use docmirror_core::crawl::{DEFAULT_BASE_URL, DEFAULT_DOMAIN_FILTER, DEFAULT_START_PATH};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("docmirror")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("docmirror")
        .about(
            "Mirror a documentation JSON API to disk, following references between \
            documents and writing each document once.",
        )
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner, progress and the report").required(false))
        .arg(
            arg!(-b --"base-url" <URL>)
                .required(false)
                .help("Prefix for the start path and every reference url")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            arg!(-s --"start-path" <PATH>)
                .required(false)
                .help("Path of the first document, appended to the base URL")
                .default_value(DEFAULT_START_PATH),
        )
        .arg(
            arg!(--"filter" <SUBSTRING>)
                .required(false)
                .help("Only URLs containing this substring are fetched")
                .default_value(DEFAULT_DOMAIN_FILTER),
        )
        .arg(
            arg!(-o --"output" <DIR>)
                .required(false)
                .help("Directory the mirrored tree is written into")
                .default_value("."),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds (default: wait indefinitely)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-r --"report-file" <PATH>)
                .required(false)
                .help("Save report to file (default: display to screen)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}
