use commands::command_argument_builder;
use docmirror::handlers::{handle_mirror, init_tracing, print_banner};

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();
    let quiet = matches.get_flag("quiet");

    init_tracing(quiet);

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if let Err(e) = handle_mirror(&matches).await {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
