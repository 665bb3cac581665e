use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use cgmon::commands;

fn url_arg() -> Arg {
    Arg::new("url")
        .short('u')
        .long("url")
        .value_name("URL")
        .help("Nightscout base URL (overrides the saved config)")
}

fn low_arg() -> Arg {
    Arg::new("low")
        .long("low")
        .value_name("MMOL")
        .help("Low bound in mmol/L (overrides the saved config)")
        .value_parser(clap::value_parser!(f64))
}

fn high_arg() -> Arg {
    Arg::new("high")
        .long("high")
        .value_name("MMOL")
        .help("High bound in mmol/L (overrides the saved config)")
        .value_parser(clap::value_parser!(f64))
}

fn urgent_high_arg() -> Arg {
    Arg::new("urgent-high")
        .long("urgent-high")
        .value_name("MMOL")
        .help("Urgent-high bound in mmol/L (overrides the saved config)")
        .value_parser(clap::value_parser!(f64))
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print machine-readable JSON instead of formatted lines")
        .action(ArgAction::SetTrue)
}

fn alert_arg() -> Arg {
    Arg::new("alert")
        .help("Alert name: predicted-low, low, falling-fast, urgent-high, rising-fast")
        .required(true)
        .index(1)
}

fn threshold_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(
        Arg::new("value")
            .help("Threshold in mmol/L")
            .required(true)
            .index(1)
            .value_parser(clap::value_parser!(f64)),
    )
}

fn build_cli() -> Command {
    Command::new("cgmon")
        .version(env!("CARGO_PKG_VERSION"))
        .author("CGMON Contributors")
        .about("Terminal blood glucose monitor for Nightscout")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("watch")
                .about("Poll the Nightscout site and alert on transitions")
                .arg(url_arg())
                .arg(low_arg())
                .arg(high_arg())
                .arg(urgent_high_arg())
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("SECONDS")
                        .help("Seconds between polls")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("60"),
                )
                .arg(
                    Arg::new("no-notify")
                        .long("no-notify")
                        .help("Log alerts instead of sending desktop notifications")
                        .action(ArgAction::SetTrue),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("status")
                .about("Fetch the latest reading once and print it")
                .arg(url_arg())
                .arg(low_arg())
                .arg(high_arg())
                .arg(urgent_high_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("alerts")
                .about("List or toggle alert categories")
                .subcommand(Command::new("list").about("List alert categories and their state"))
                .subcommand(
                    Command::new("enable")
                        .about("Enable an alert category")
                        .arg(alert_arg()),
                )
                .subcommand(
                    Command::new("disable")
                        .about("Disable an alert category")
                        .arg(alert_arg()),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change the saved configuration")
                .subcommand(Command::new("show").about("Show the saved configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Change a configuration value")
                        .subcommand_required(true)
                        .arg_required_else_help(true)
                        .subcommand(
                            Command::new("url").about("Set the Nightscout base URL").arg(
                                Arg::new("value")
                                    .help("Nightscout base URL")
                                    .required(true)
                                    .index(1),
                            ),
                        )
                        .subcommand(threshold_command("low", "Set the low bound (mmol/L)"))
                        .subcommand(threshold_command("high", "Set the high bound (mmol/L)"))
                        .subcommand(threshold_command(
                            "urgent-high",
                            "Set the urgent-high bound (mmol/L)",
                        ))
                        .subcommand(
                            Command::new("show-value")
                                .about("Show or hide the numeric reading in watch output")
                                .arg(Arg::new("value").help("on or off").required(true).index(1)),
                        ),
                ),
        )
        .subcommand(
            Command::new("open")
                .about("Open the Nightscout site in the default browser")
                .arg(url_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Print version information"))
}

fn main() -> Result<()> {
    cgmon::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("cgmon version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("watch", sub_matches)) => commands::watch(sub_matches),
        Some(("status", sub_matches)) => commands::status(sub_matches),
        Some(("alerts", sub_matches)) => commands::alerts(sub_matches),
        Some(("config", sub_matches)) => commands::config(sub_matches),
        Some(("open", sub_matches)) => commands::open(sub_matches),
        Some(("completions", sub_matches)) => commands::completions(sub_matches, &mut build_cli()),
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to cgmon!");
            println!();
            println!("Use 'cgmon --help' to see available commands.");
            Ok(())
        }
    }
}
