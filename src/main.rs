use clap::Parser;
use std::process::ExitCode;

use trad::cli::commands::{translate, usage};
use trad::cli::{Args, Invocation};
use trad::translation::print_languages;
use trad::{logging, output};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    output::init(output::OutputConfig::default());
    if let Err(e) = logging::init() {
        trad::warn!("{e}");
    }

    match args.invocation() {
        Invocation::Help => usage::print_usage(),
        Invocation::Version => usage::print_version(),
        Invocation::Languages => print_languages(),
        Invocation::Translate { country, word } => {
            let options = translate::TranslateOptions {
                word,
                country,
                endpoint: args.endpoint,
                key_source: args.key_source,
                env_file: args.env_file,
            };
            if let Err(failure) = translate::run_translate(options).await {
                failure.report();
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
