use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use cmdtree_cli::{commands, load, logging, Outcome};
use std::path::{Path, PathBuf};

fn response_arg() -> Arg {
    Arg::new("response")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .help("Workspace response JSON file")
}

fn previous_arg() -> Arg {
    Arg::new("previous")
        .long("previous")
        .value_name("ID")
        .help("Previously selected identifier, e.g. command:vm/start")
}

fn cli() -> Command {
    Command::new("cmdtree")
        .version(cmdtree_cli::VERSION)
        .about("Build and inspect workspace command trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Editor config file (defaults to ./.cmdtree.toml if present)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging unless RUST_LOG is set"),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the normalized tree with the selection marked")
                .arg(response_arg())
                .arg(previous_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Show where a previous selection lands")
                .arg(response_arg())
                .arg(previous_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Verify lookups and child ordering")
                .arg(response_arg()),
        )
}

fn run(matches: &ArgMatches) -> Result<Outcome> {
    let explicit = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let config = load::load_config(explicit, Path::new("."))?;

    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("missing subcommand");
    };
    let response_path = args
        .get_one::<PathBuf>("response")
        .ok_or_else(|| anyhow::anyhow!("missing response file"))?;
    let response = load::load_response(response_path)?;
    let previous = || args.get_one::<String>("previous").map(String::as_str);

    match name {
        "tree" => commands::tree(&response, &config, previous(), args.get_flag("json")),
        "resolve" => commands::resolve_selection(&response, &config, previous()),
        "check" => commands::check(&response, &config),
        other => anyhow::bail!("unknown subcommand {other}"),
    }
}

fn main() {
    let matches = cli().get_matches();
    logging::init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(outcome) => {
            print!("{}", outcome.text);
            std::process::exit(if outcome.passed { 0 } else { 1 });
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    }
}
