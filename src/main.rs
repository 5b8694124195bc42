use anyhow::{anyhow, Result};
use clap::{App as Cli, Arg};
use creator_market_tui::app::{check_report, load_catalog, App};
use creator_market_tui::catalog::Skin;
use creator_market_tui::config::Config;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("YAML or JSON catalog to browse instead of the builtin one")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("skin")
                .short("s")
                .long("skin")
                .value_name("SKIN")
                .possible_values(&["marketplace", "club"])
                .help("Builtin catalog to browse")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Reject items whose category is not offered by their screen"),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Validate the catalog and print a summary without starting the interface"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(skin) = matches.value_of("skin") {
        config.skin = skin.parse::<Skin>().map_err(|e| anyhow!(e))?;
    }
    if let Some(path) = matches.value_of("catalog") {
        config.catalog_path = Some(PathBuf::from(path));
    }
    if matches.is_present("strict") {
        config.strict_categories = true;
    }

    if matches.is_present("check") {
        let (catalog, warnings) = load_catalog(&config)?;
        println!("{}", check_report(&catalog, &warnings));
        return Ok(());
    }

    App::start(config)
}
