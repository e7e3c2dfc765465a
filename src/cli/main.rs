use clap::{Arg, Command};

mod context;
mod greeting;
mod person;

use context::Context;

const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

fn cli() -> Command {
    Command::new("helloworld")
        .about("client for the helloworld service")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .env("HELLOWORLD_ENDPOINT")
                .default_value(DEFAULT_ENDPOINT)
                .global(true)
                .help("service endpoint"),
        )
        .subcommand(greeting::hello_args())
        .subcommand(greeting::info_args())
        .subcommand(person::args())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();

    let endpoint = matches
        .get_one::<String>("endpoint")
        .ok_or_else(|| anyhow::anyhow!("endpoint expected"))?;

    let context = Context::new(endpoint);

    match matches.subcommand() {
        Some(("hello", submatches)) => Ok(greeting::hello_handler(submatches, &context).await?),
        Some(("info", _)) => Ok(greeting::info_handler(&context).await?),
        Some(("person", submatches)) => Ok(person::handlers(submatches, &context).await?),
        _ => unreachable!(), // If all subcommands are defined above, anything else is unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_endpoint_is_global() {
        let matches = cli()
            .try_get_matches_from([
                "helloworld",
                "person",
                "list",
                "--endpoint",
                "http://example.com:9000",
            ])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("endpoint").unwrap(),
            "http://example.com:9000"
        );
    }

    #[test]
    fn test_endpoint_defaults() {
        let matches = cli()
            .try_get_matches_from(["helloworld", "info"])
            .unwrap();

        let expected = std::env::var("HELLOWORLD_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        assert_eq!(matches.get_one::<String>("endpoint").unwrap(), &expected);
    }

    #[test]
    fn test_search_modes_conflict() {
        let result = cli().try_get_matches_from([
            "helloworld",
            "person",
            "search",
            "--exact",
            "--partial",
            "john",
        ]);

        assert!(result.is_err());
    }
}
