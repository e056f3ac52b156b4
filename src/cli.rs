// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn date_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).value_name("dd-mm-yyyy").help(help)
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("till")
        .about("Daily cash-register ledger: record movements, filter by date, print totals")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("entry")
                .about("Record and manage ledger entries")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Record a new entry")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("inflow or outflow"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("desc")
                                .required(true)
                                .help("What the movement was"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Locale amount, e.g. 1.234,56"),
                        )
                        .arg(date_arg("date", "When it occurred (default: today)"))
                        .arg(
                            Arg::new("method")
                                .long("method")
                                .required(true)
                                .help("cash, pix, card, check, store-credit or invoice"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Overwrite an entry (id and date stay fixed)")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("kind").long("kind").required(true))
                        .arg(Arg::new("description").long("desc").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("method")
                                .long("method")
                                .help("Payment method (default: cash)"),
                        ),
                )
                .subcommand(
                    Command::new("rm").about("Delete an entry permanently").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List entries in a date range with totals")
                        .arg(date_arg("from", "Range start (default: today)"))
                        .arg(date_arg("to", "Range end (default: today)")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Write a printable report for a date range")
                .arg(date_arg("from", "Range start (default: today)"))
                .arg(date_arg("to", "Range end (default: today)"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value("till_report.txt")
                        .help("Output file"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export entries in a date range")
                .arg(date_arg("from", "Range start (default: today)"))
                .arg(date_arg("to", "Range end (default: today)"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true).help("Output file")),
        )
}
