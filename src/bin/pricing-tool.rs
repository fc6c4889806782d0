//! Pricing management CLI tool
//!
//! Quotes, lists and validates plans from a plan catalog

use anyhow::{Context, bail};
use clap::{Arg, ArgMatches, Command, value_parser};
use plan_pricing::utils::{format_money, logging};
use plan_pricing::{Config, PricingService};
use std::process::ExitCode;
use tracing::{debug, info};

fn cli() -> Command {
    Command::new("pricing-tool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Quote and inspect subscription plan pricing")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .help("YAML configuration file (defaults to PRICING_* environment variables)"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_name("FILE")
                .help("Plan catalog file, overrides the configured catalog path"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("quote")
                .about("Price a plan for a number of seats")
                .arg(
                    Arg::new("plan")
                        .long("plan")
                        .short('p')
                        .required(true)
                        .value_name("ID"),
                )
                .arg(
                    Arg::new("users")
                        .long("users")
                        .short('u')
                        .required(true)
                        .value_name("N")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("list").about("List plans in the catalog"))
        .subcommand(
            Command::new("validate").about("Check every plan, treating tier layout issues as errors"),
        )
        .subcommand(Command::new("stats").about("Print catalog statistics"))
}

/// Global options may appear before or after the subcommand
fn global_arg<'a>(matches: &'a ArgMatches, sub: &'a ArgMatches, name: &str) -> Option<&'a String> {
    sub.get_one::<String>(name)
        .or_else(|| matches.get_one::<String>(name))
}

async fn load_config(matches: &ArgMatches, sub: &ArgMatches) -> anyhow::Result<Config> {
    let mut config = match global_arg(matches, sub, "config") {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading configuration from {}", path))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };

    if let Some(catalog) = global_arg(matches, sub, "catalog") {
        config.engine.pricing.catalog_path = Some(catalog.clone());
    }
    Ok(config)
}

async fn run(matches: ArgMatches) -> anyhow::Result<()> {
    let (command, sub_matches) = matches
        .subcommand()
        .context("a subcommand is required")?;

    let mut config = load_config(&matches, sub_matches).await?;
    logging::init_logging(config.logging())?;

    if config.pricing().catalog_path.is_none() {
        bail!("no plan catalog configured (use --catalog or PRICING_CATALOG_PATH)");
    }

    if command == "validate" {
        config.engine.pricing.strict_tiers = true;
    }

    let service = PricingService::new(config.pricing().clone());
    service
        .initialize()
        .await
        .context("loading plan catalog")?;
    debug!("Running '{}' command", command);

    match command {
        "quote" => {
            let plan_id = sub_matches
                .get_one::<String>("plan")
                .context("--plan is required")?;
            let users = *sub_matches
                .get_one::<u32>("users")
                .context("--users is required")?;

            let quote = service.quote(plan_id, users)?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        "list" => {
            let currency = &service.config().default_currency;
            for plan in service.list_plans() {
                println!(
                    "{}\t{}\t{}\t{}",
                    plan.id,
                    plan.pricing_model,
                    format_money(plan.price, currency),
                    plan.name
                );
            }
        }
        "validate" => {
            // the catalog was loaded in strict mode, so every plan passed
            let plans = service.list_plans();
            for plan in &plans {
                println!("ok\t{}\t{}", plan.id, plan.pricing_model);
            }
            info!("{} plans validated", plans.len());
        }
        "stats" => {
            let stats = service.get_statistics();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        other => bail!("unknown command: {}", other),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run(cli().get_matches()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display with causes, not Debug
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
