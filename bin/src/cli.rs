use std::sync::Arc;

use clap::{builder::PossibleValuesParser, builder::TypedValueParser, Parser, Subcommand};
use console::style;
use folio_utils::{
    balances::{BalanceFetcher, ConfigContracts, FetchMode, FetchOutcome, RpcBalanceOracle},
    comparison::{ComparisonResult, ComparisonStrategy},
    config::Config,
    format::{
        format_balance_str, format_duration_ms, format_percent, format_price, format_usd,
        shorten_address,
    },
    metrics::ComparisonHistory,
    tokens::total_value,
};

#[derive(Parser, Debug)]
#[clap(version, subcommand_required = false, arg_required_else_help = false)]
#[command(name = "folio", bin_name = "folio", version)]
pub struct Cli {
    /// Wallet address to show, overrides `current_account` from the config
    #[arg(long, global = true, env = "FOLIO_ADDRESS")]
    pub address: Option<String>,

    /// JSON-RPC endpoint, overrides `rpc_url` from the config
    #[arg(long, global = true, env = "FOLIO_RPC_URL")]
    pub rpc_url: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch token balances once and print them
    #[command(alias = "b")]
    Balances {
        /// Fetch token balances one call at a time
        #[arg(long)]
        individual: bool,
    },

    /// Time batched against individual calls and print the average
    Compare {
        /// Draw timings from fixed ranges, or sleep and measure them
        #[arg(long, default_value = "range", value_parser = strategy_parser())]
        strategy: ComparisonStrategy,

        #[arg(long, default_value_t = 5)]
        runs: u32,
    },
}

impl Commands {
    pub async fn handle(self, config: &Config) -> folio_tui::Result<()> {
        match self {
            Commands::Balances { individual } => {
                let mode = if individual {
                    FetchMode::Individual
                } else {
                    FetchMode::Batched
                };
                print_balances(config, mode).await
            }
            Commands::Compare { strategy, runs } => run_comparisons(strategy, runs).await,
        }
    }
}

fn strategy_parser() -> impl TypedValueParser<Value = ComparisonStrategy> {
    PossibleValuesParser::new(["range", "delay"])
        .try_map(|name| name.parse::<ComparisonStrategy>().map_err(|e| e.to_string()))
}

async fn print_balances(config: &Config, mode: FetchMode) -> folio_tui::Result<()> {
    let account = config.get_current_account()?;
    let fetcher = BalanceFetcher::new(
        Arc::new(RpcBalanceOracle::new(config.rpc_url.clone())),
        Arc::new(ConfigContracts::new(config.contracts.clone())),
        config.contract_name.clone(),
    );

    let tokens = match fetcher.fetch(Some(account), mode).await? {
        FetchOutcome::Fetched(tokens) => tokens,
        FetchOutcome::Skipped(reason) => {
            eprintln!("{} {reason}", style("skipped:").yellow());
            return Ok(());
        }
    };

    if let Some(contract) = fetcher.contract() {
        println!(
            "{} {}  {} {} ({})  {} {mode}",
            style("account").dim(),
            shorten_address(&account),
            style("contract").dim(),
            contract.name,
            shorten_address(&contract.address),
            style("mode").dim(),
        );
    }

    println!(
        "{}",
        style(format!(
            "{:<6} {:>20} {:>12} {:>10}",
            "Token", "Balance", "Price", "Value"
        ))
        .bold()
    );
    for token in &tokens {
        println!(
            "{:<6} {:>20} {:>12} {:>10}",
            token.symbol,
            format_balance_str(&token.balance, &token.symbol),
            format_price(token.price),
            format_usd(token.usd_value),
        );
    }
    println!(
        "{}",
        style(format!("{:<6} {:>44}", "Total", format_usd(total_value(&tokens)))).bold()
    );

    Ok(())
}

async fn run_comparisons(strategy: ComparisonStrategy, runs: u32) -> folio_tui::Result<()> {
    let provider = strategy.provider();
    let mut history = ComparisonHistory::default();

    println!(
        "{}",
        style(format!(
            "{:>6} {:>10} {:>11} {:>11} {:>12}",
            "Test #", "Batched", "Individual", "Time Saved", "Improvement"
        ))
        .bold()
    );
    for run in 1..=runs {
        let result = provider.run_comparison().await?;
        print_result(&run.to_string(), &result);
        history.push(result);
    }

    if let Some(average) = history.average() {
        println!(
            "{} {} {} {} {}",
            style(format!("Average over the last {} runs:", history.len())).bold(),
            style(format_duration_ms(average.batched_time)).green(),
            style(format_duration_ms(average.individual_time)).yellow(),
            style(format_duration_ms(average.time_saved)).blue(),
            style(format_percent(average.percent_improvement, 1)).magenta(),
        );
    }

    Ok(())
}

fn print_result(label: &str, result: &ComparisonResult) {
    println!(
        "{:>6} {:>10} {:>11} {:>11} {:>12}",
        label,
        format_duration_ms(result.batched_time),
        format_duration_ms(result.individual_time),
        format_duration_ms(result.time_saved),
        format_percent(result.percent_improvement, 1),
    );
}
