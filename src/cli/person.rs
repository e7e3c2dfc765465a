use ascii_table::{Align, AsciiTable};
use clap::{arg, value_parser, Arg, ArgAction, Command};
use helloworld_core::{PersonMessage, SearchMode};

use crate::context::Context;

pub fn args() -> Command {
    Command::new("person")
        .long_flag("person")
        .about("manage persons")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create")
                .about("create person, or update one with --id")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .help("id of an existing person to update")
                        .value_parser(value_parser!(i64))
                        .action(ArgAction::Set),
                )
                .arg(arg!(<NAME> "person name"))
                .arg(arg!(<EMAIL> "person email"))
                .arg_required_else_help(true),
        )
        .subcommand(Command::new("list").about("list persons"))
        .subcommand(
            Command::new("search")
                .about("find persons by name, ignoring case")
                .arg(
                    Arg::new("exact")
                        .long("exact")
                        .help("match case exactly")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("partial")
                        .long("partial")
                        .help("match any part of the name")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("exact"),
                )
                .arg(arg!(<NAME> "name to search for"))
                .arg_required_else_help(true),
        )
}

pub async fn handlers(model_match: &clap::ArgMatches, context: &Context) -> anyhow::Result<()> {
    match model_match.subcommand() {
        Some(("create", create_match)) => {
            let name = create_match
                .get_one::<String>("NAME")
                .ok_or_else(|| anyhow::anyhow!("person name expected"))?;
            let email = create_match
                .get_one::<String>("EMAIL")
                .ok_or_else(|| anyhow::anyhow!("person email expected"))?;

            let person = PersonMessage {
                id: create_match.get_one::<i64>("id").copied(),
                name: name.to_string(),
                email: email.to_string(),
            };

            let saved = context.client.upsert(&person).await?;

            tracing::info!("person '{}' saved with id {:?}", saved.name, saved.id);

            print_persons(vec![saved]);

            Ok(())
        }
        Some(("list", _)) => {
            let persons = context.client.list().await?;

            print_persons(persons);

            Ok(())
        }
        Some(("search", search_match)) => {
            let name = search_match
                .get_one::<String>("NAME")
                .ok_or_else(|| anyhow::anyhow!("name expected"))?;

            let mode = if search_match.get_flag("exact") {
                SearchMode::Exact
            } else if search_match.get_flag("partial") {
                SearchMode::Partial
            } else {
                SearchMode::IgnoreCase
            };

            let persons = context.client.search(name, mode).await?;

            print_persons(persons);

            Ok(())
        }
        _ => unreachable!(), // If all subcommands are defined above, anything else is unreachable
    }
}

fn print_persons(persons: Vec<PersonMessage>) {
    let table_data: Vec<Vec<String>> = persons
        .into_iter()
        .map(|person| {
            vec![
                person.id.map(|id| id.to_string()).unwrap_or_default(),
                person.name,
                person.email,
            ]
        })
        .collect();

    if table_data.is_empty() {
        tracing::info!("no persons found");

        return;
    }

    let mut ascii_table = AsciiTable::default();

    ascii_table
        .column(0)
        .set_header("ID")
        .set_align(Align::Right);

    ascii_table
        .column(1)
        .set_header("NAME")
        .set_align(Align::Left);

    ascii_table
        .column(2)
        .set_header("EMAIL")
        .set_align(Align::Left);

    ascii_table.print(table_data);
}
