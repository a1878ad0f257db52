//! Swagger trimming tool - CLI interface
//!
//! `load-trimmed-swagger <k8s_tag> <out_file>`

use std::process;

use clap::{error::ErrorKind, Arg, ArgAction, ArgMatches, Command};
use swagger_trim::{utils::init_logging, Pipeline, ProcessingConfig};
use tracing::{error, info};

const PROGRAM: &str = env!("CARGO_BIN_NAME");

#[tokio::main]
async fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => usage(),
    };

    let (Some(tag), Some(out_file)) = positionals(&matches) else {
        usage();
    };

    if let Err(e) = init_logging() {
        eprintln!("{e}");
    }

    let pipeline = match Pipeline::new(ProcessingConfig::default()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to set up pipeline: {}", e);
            process::exit(1);
        }
    };

    match pipeline.execute(tag, out_file).await {
        Ok(report) => {
            info!(
                "Done in {:.2?}: {} fields cleared, {} bytes fetched, {} bytes written ({:.1}%)",
                report.elapsed,
                report.trim.fields_cleared,
                report.fetched_bytes,
                report.output.compressed_bytes,
                report.output.ratio() * 100.0
            );
        }
        Err(e) => {
            error!("Pipeline execution failed: {}", e);
            process::exit(1);
        }
    }
}

fn usage() -> ! {
    println!("Usage: {PROGRAM} <k8s_tag> <out_file>");
    process::exit(1);
}

fn build_cli() -> Command {
    Command::new(PROGRAM)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch the Kubernetes swagger document, clear description fields and write it gzip-compressed")
        .arg(Arg::new("tag")
            .value_name("K8S_TAG")
            .allow_hyphen_values(true)
            .help("Kubernetes release tag, e.g. v1.20.2"))
        .arg(Arg::new("out_file")
            .value_name("OUT_FILE")
            .allow_hyphen_values(true)
            .help("Destination of the gzip-compressed JSON"))
        .arg(Arg::new("extra")
            .action(ArgAction::Append)
            .allow_hyphen_values(true)
            .hide(true))
}

fn positionals(matches: &ArgMatches) -> (Option<&str>, Option<&str>) {
    (
        matches.get_one::<String>("tag").map(String::as_str),
        matches.get_one::<String>("out_file").map(String::as_str),
    )
}
