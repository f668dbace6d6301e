use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

use drug_price_search::config::Config;
use drug_price_search::scrapers::YaopinnetScraper;
use drug_price_search::session::{read_input_line, Command, Outcome, Session, HELP};
use drug_price_search::utils;

const PROMPT: &str = "药品价格查询> ";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, the table to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drug_price_search=info".parse()?),
        )
        .init();

    info!("Starting Drug Price Search");

    let config = Arc::new(Config::load()?);
    let client = utils::http::create_client(&config)?;
    let mut session = Session::new(Box::new(YaopinnetScraper::new(config.clone())), client);

    println!("{}", HELP);
    let mut input = BufReader::new(tokio::io::stdin());

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        // EOF ends the session like :quit
        let Some(line) = read_input_line(&mut input).await? else {
            break;
        };

        match session.handle(Command::parse(&line)).await {
            Outcome::Continue(Some(output)) => println!("{}", output),
            Outcome::Continue(None) => {}
            Outcome::Quit => break,
        }
    }

    info!("Bye");
    Ok(())
}
