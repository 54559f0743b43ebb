//! `actionflow` binary: argument parsing, logging setup and exit codes

use actionflow_cli::{
    build_document, init_tracing, load_config, read_records, render_deps, render_order,
    write_document, CommandError, LogFormat,
};
use actionflow_pipeline::WorkflowDocument;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;

fn input_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("JSON array of tasks ({id, text, role, confidence})"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding the keyword tables"),
        )
        .arg(
            Arg::new("strict-admin")
                .long("strict-admin")
                .action(ArgAction::SetTrue)
                .help("Also treat follow-up/call/time-blocking phrases as administrative"),
        )
}

fn cli() -> Command {
    Command::new("actionflow")
        .version(actionflow_core::VERSION)
        .about("Infer task dependencies from meeting action items")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json-logs")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            input_args(Command::new("build").about("Build the workflow document")).arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_parser(value_parser!(PathBuf))
                    .help("Write the document here instead of stdout"),
            ),
        )
        .subcommand(input_args(
            Command::new("deps").about("Print each owner's tasks with their dependencies"),
        ))
        .subcommand(input_args(
            Command::new("order").about("Print a dispatch order, or the cycle blocking one"),
        ))
}

fn load(args: &ArgMatches) -> Result<WorkflowDocument, CommandError> {
    let input = args
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
    let config = load_config(
        args.get_one::<PathBuf>("config").map(PathBuf::as_path),
        args.get_flag("strict-admin"),
    )?;
    let records = read_records(input)?;
    build_document(records, &config)
}

fn run(matches: &ArgMatches) -> Result<(), CommandError> {
    match matches.subcommand() {
        Some(("build", args)) => {
            let document = load(args)?;
            match args.get_one::<PathBuf>("output") {
                Some(path) => write_document(&document, path)?,
                None => println!(
                    "{}",
                    document.to_json_pretty().map_err(anyhow::Error::from)?
                ),
            }
        }
        Some(("deps", args)) => {
            print!("{}", render_deps(&load(args)?));
        }
        Some(("order", args)) => {
            print!("{}", render_order(&load(args)?)?);
        }
        _ => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(if matches.get_flag("json-logs") {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}
