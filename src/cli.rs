//! Command-line interface implementation for pagesmith.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Config;

/// Command-line arguments structure for pagesmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "pagesmith: render text templates into pages", long_about = None)]
pub struct Args {
    /// Path to the template file
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory where rendered pages are written. Prints to stdout when omitted.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON or YAML file with context bindings
    #[arg(short, long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Bind a single value, e.g. --set title="My album" or --set count=3
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    /// Context name of the list to split over pages
    #[arg(long, value_name = "NAME")]
    pub paginate: Option<String>,

    /// Items per page; 0 disables pagination
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// File name stem of rendered pages
    #[arg(long, value_name = "NAME")]
    pub base_name: Option<String>,

    /// Fail when tokens are left unresolved
    #[arg(long)]
    pub strict: bool,

    /// Force overwrite of existing output directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Applies command-line overrides on top of file configuration.
    pub fn merge_into(&self, mut config: Config) -> Config {
        if self.strict {
            config.strict = true;
        }
        if let Some(paginate) = &self.paginate {
            config.paginate = Some(paginate.clone());
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(base_name) = &self.base_name {
            config.base_name = base_name.clone();
        }
        config
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
