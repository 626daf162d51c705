//! Demonstration target for the argbind argument binder.
//!
//! Binds a small application struct to `-d/--debug`, `-v/--verbose`,
//! `--configuration-file=<path>` and `-Dmode=<strict|lenient>`, processes
//! the process arguments, and prints the resulting state.

use std::path::PathBuf;

use argbind_core::{ArgumentSpec, Scheme, SchemeBuilder};
use argbind_parser::process;
use tracing::debug;

#[derive(Debug, Default)]
struct App {
    debug: bool,
    verbose: bool,
    configuration_file: Option<PathBuf>,
    mode: Option<String>,
}

fn scheme() -> Result<Scheme<App>, argbind_core::SchemeError> {
    SchemeBuilder::new()
        .flag(
            ArgumentSpec::new("debug").with_short("d").with_long("debug"),
            |app: &mut App| {
                app.debug = true;
                Ok(())
            },
        )
        .flag(
            ArgumentSpec::new("verbose").with_short("v").with_long("verbose"),
            |app| {
                app.verbose = true;
                Ok(())
            },
        )
        .value(
            ArgumentSpec::new("configuration-file").with_long("configuration-file"),
            |app, value| {
                app.configuration_file = Some(PathBuf::from(value));
                Ok(())
            },
        )
        .value(ArgumentSpec::new("mode").with_long("mode"), |app, value| {
            match value {
                "strict" | "lenient" => {
                    app.mode = Some(value.to_string());
                    Ok(())
                }
                other => Err(format!("unsupported mode `{other}`").into()),
            }
        })
        .build()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let arguments: Vec<String> = std::env::args().skip(1).collect();
    debug!(count = arguments.len(), "processing raw arguments");

    let scheme = scheme()?;
    let mut app = App::default();
    process(&mut app, &scheme, &arguments)?;

    println!("{app:#?}");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
