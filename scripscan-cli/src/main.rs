//! ScripScan CLI — scan, allocate, and universe commands.
//!
//! Commands:
//! - `scan` — score a ticker universe and print the ranked table
//! - `allocate` — scan, then spread a budget across the top-ranked names
//! - `universe` — show which symbols a scan mode would cover

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scripscan_core::allocator::{allocate, AllocationError};
use scripscan_core::config::ScreenConfig;
use scripscan_core::data::{
    resolve_universe, NseEquityList, ScanMode, Universe, YahooProvider,
};
use scripscan_core::domain::{Allocation, ScoredStock};
use scripscan_core::screener::{scan, ScanError, StdoutProgress};

#[derive(Parser)]
#[command(
    name = "scripscan",
    about = "ScripScan CLI — NSE stock screener and budget allocator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a ticker universe and print the ranked table.
    Scan {
        /// Universe: curated (Nifty 50, fast) or full (exchange list, slow).
        #[arg(long, default_value = "curated")]
        mode: String,

        /// Show only the top N rows (0 shows all).
        #[arg(long, default_value_t = 0)]
        top: usize,
    },
    /// Scan, then spread a budget across the top-ranked affordable names.
    Allocate {
        /// Universe: curated (Nifty 50, fast) or full (exchange list, slow).
        #[arg(long)]
        mode: Option<String>,

        /// Total budget in rupees.
        #[arg(long)]
        budget: Option<f64>,

        /// Number of names to aim for (1-20).
        #[arg(long)]
        stocks: Option<usize>,

        /// TOML config file; flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show the symbols a scan mode would cover.
    Universe {
        /// Universe: curated (Nifty 50, fast) or full (exchange list, slow).
        #[arg(long, default_value = "curated")]
        mode: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { mode, top } => run_scan(&mode, top),
        Commands::Allocate {
            mode,
            budget,
            stocks,
            config,
        } => run_allocate(mode, budget, stocks, config),
        Commands::Universe { mode } => run_universe(&mode),
    }
}

fn parse_mode(name: &str) -> Result<ScanMode> {
    match name {
        "curated" => Ok(ScanMode::Curated),
        "full" => Ok(ScanMode::Full),
        _ => bail!("unknown mode '{name}'. Valid: curated, full"),
    }
}

fn load_universe(mode: ScanMode) -> Universe {
    let universe = resolve_universe(mode, &NseEquityList::new());
    if let Some(original) = universe.truncated_from {
        println!(
            "WARNING: full list has {original} symbols; scanning the first {} only",
            universe.len()
        );
    }
    universe
}

fn run_scan(mode: &str, top: usize) -> Result<()> {
    let mode = parse_mode(mode)?;
    let universe = load_universe(mode);

    let provider = YahooProvider::new();
    let ranked = match scan(&universe.symbols, &provider, &StdoutProgress) {
        Ok(ranked) => ranked,
        Err(ScanError::NoData) => {
            eprintln!("No data found.");
            std::process::exit(1);
        }
    };

    let shown: &[ScoredStock] = if top > 0 && top < ranked.len() {
        &ranked[..top]
    } else {
        &ranked
    };
    print_scan_table(shown);
    Ok(())
}

fn run_allocate(
    mode: Option<String>,
    budget: Option<f64>,
    stocks: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ScreenConfig::from_file(&path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ScreenConfig::default(),
    };
    if let Some(name) = mode {
        config.mode = parse_mode(&name)?;
    }
    if let Some(budget) = budget {
        config.budget = budget;
    }
    if let Some(stocks) = stocks {
        config.target_stocks = stocks;
    }
    config.validate()?;

    let universe = load_universe(config.mode);

    let provider = YahooProvider::new();
    let ranked = match scan(&universe.symbols, &provider, &StdoutProgress) {
        Ok(ranked) => ranked,
        Err(ScanError::NoData) => {
            eprintln!("No data found.");
            std::process::exit(1);
        }
    };

    let allocation = match allocate(&ranked, config.budget, config.target_stocks) {
        Ok(allocation) => allocation,
        Err(AllocationError::NoAffordableStocks { cap }) => {
            eprintln!(
                "No stocks found under {}. Increase the budget or reduce the stock count.",
                format_money(cap)
            );
            std::process::exit(1);
        }
    };

    print_allocation(&allocation, config.budget, config.target_stocks);
    Ok(())
}

fn run_universe(mode: &str) -> Result<()> {
    let mode = parse_mode(mode)?;
    let universe = load_universe(mode);

    if universe.is_empty() {
        eprintln!("No data found.");
        std::process::exit(1);
    }

    println!("Universe ({mode}): {} symbols", universe.len());
    for row in universe.symbols.chunks(6) {
        let line: Vec<String> = row.iter().map(|s| format!("{s:<14}")).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn print_scan_table(results: &[ScoredStock]) {
    println!();
    println!("=== Scan Results ===");
    println!(
        "{:<12} {:>12} {:>6} {:>6}  {:<8}",
        "Symbol", "Price", "Score", "RSI", "Trend"
    );
    println!("{}", "-".repeat(50));
    for stock in results {
        println!(
            "{:<12} {:>12} {:>6} {:>6.1}  {:<8}",
            stock.symbol,
            format_money(stock.price),
            stock.score,
            stock.rsi,
            stock.trend
        );
    }
}

fn print_allocation(allocation: &Allocation, budget: f64, target_stocks: usize) {
    println!();
    println!("=== Suggested Portfolio ===");
    println!(
        "{:<12} {:>12} {:>5} {:>14} {:>6}  {:<8}",
        "Symbol", "Price", "Qty", "Cost", "Score", "Trend"
    );
    println!("{}", "-".repeat(64));
    for line in &allocation.lines {
        println!(
            "{:<12} {:>12} {:>5} {:>14} {:>6}  {:<8}",
            line.symbol,
            format_money(line.price),
            line.quantity,
            format_money(line.cost),
            line.score,
            line.trend
        );
    }
    println!();
    println!("Budget:          {}", format_money(budget));
    println!("Target stocks:   {target_stocks}");
    println!("Positions:       {}", allocation.summary.positions);
    println!(
        "Total invested:  {}",
        format_money(allocation.summary.total_invested)
    );
    println!("Savings:         {}", format_money(allocation.summary.savings));
}

/// Format a rupee amount with thousands separators, e.g. `₹50,000.00`.
fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}\u{20B9}{grouped}.{frac_part}")
}
