use anyhow::{bail, Context, Result};
use avl_index::driver::{self, DriverConfig, RoundReport};
use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "avl-check", about = "Builds AVL trees from seeded key streams and checks their invariants")]
struct Cli {
    /// Seed of the pseudo-random key stream.
    #[arg(long, default_value_t = 123_456)]
    seed: u64,
    /// Keys drawn per tree, duplicates included.
    #[arg(long, default_value_t = 500)]
    size: usize,
    /// Number of random trees to build.
    #[arg(long, default_value_t = 10)]
    rounds: usize,
    /// Keys are drawn from 0..KEY_RANGE.
    #[arg(long, default_value_t = 1_000)]
    key_range: i32,
    /// Dump the sequential demo tree before and after removals.
    #[arg(long)]
    print: bool,
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")?;

    let mut failures = run_sequential(cli.print);

    let config = DriverConfig {
        seed: cli.seed,
        tree_size: cli.size,
        rounds: cli.rounds,
        key_range: cli.key_range,
    };
    let reports = driver::run(&config).context("invalid driver configuration")?;
    for report in &reports {
        println!(
            "Created tree with {} elements, ok: {}",
            config.tree_size, report.all_found
        );
        print_report(report);
        if !report.passed() {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} tree(s) failed their checks");
    }
    info!("all checks passed");
    Ok(())
}

fn run_sequential(print: bool) -> usize {
    let mut failures = 0;
    let mut tree = driver::sequential_tree(10);
    if print {
        tree.print();
    }
    let report = RoundReport::check(&tree, true);
    print_report(&report);
    failures += usize::from(!report.passed());

    let removed = [5, 7];
    for key in &removed {
        tree.remove(key);
    }
    if print {
        tree.print();
    }
    let membership_ok = (0..10).all(|key| tree.contains(&key) != removed.contains(&key));
    let report = RoundReport::check(&tree, membership_ok);
    print_report(&report);
    failures += usize::from(!report.passed());
    failures
}

fn print_report(report: &RoundReport) {
    println!(
        "Height:{} {} {}",
        report.height, report.balanced, report.ordered
    );
}
