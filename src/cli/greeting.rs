use clap::{arg, Command};

use crate::context::Context;

pub fn hello_args() -> Command {
    Command::new("hello")
        .about("ask the service for a greeting")
        .arg(arg!([NAME] "name to greet"))
}

pub fn info_args() -> Command {
    Command::new("info").about("show service information")
}

pub async fn hello_handler(hello_match: &clap::ArgMatches, context: &Context) -> anyhow::Result<()> {
    let name = hello_match.get_one::<String>("NAME").map(String::as_str);

    let greeting = context.client.hello(name).await?;

    println!("{greeting}");

    Ok(())
}

pub async fn info_handler(context: &Context) -> anyhow::Result<()> {
    let info = context.client.info().await?;

    println!("{} {}", info.name, info.version);
    println!("{} / {}", info.framework, info.language);

    Ok(())
}
