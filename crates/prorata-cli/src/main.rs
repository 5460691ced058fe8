// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PRORATA CLI - Offline transaction layer for the profit-sharing ledger
//
// Drives a prorata-core ledger persisted as a JSON snapshot. Every command
// loads the snapshot, applies one operation, and rewrites the file only on
// success — a failed operation leaves the snapshot untouched.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use prorata_core::{Ledger, UNITS_PER_COIN};

#[derive(Parser)]
#[command(name = "prorata")]
#[command(about = "Prorata - profit-sharing ledger management", long_about = None)]
#[command(version)]
struct Cli {
    /// Ledger snapshot path (reads PRORATA_STATE env var,
    /// or defaults to ~/.prorata/ledger.json)
    #[arg(short, long, env = "PRORATA_STATE")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh ledger snapshot
    Init {
        /// Administrator identity (the only identity allowed to mint/fund)
        #[arg(long)]
        admin: String,

        /// Treasury identity (the ledger's own pool account)
        #[arg(long, default_value = "treasury")]
        treasury: String,

        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },

    /// Mint new units to an account (administrator only)
    Mint {
        /// Caller identity
        #[arg(long)]
        caller: String,
        /// Recipient account
        to: String,
        /// Amount in atomic units
        amount: u128,
    },

    /// Transfer units from the caller to another account
    Transfer {
        /// Caller identity (the debited side)
        #[arg(long)]
        caller: String,
        /// Recipient account
        to: String,
        /// Amount in atomic units
        amount: u128,
    },

    /// Permanently burn units from the caller's balance
    Burn {
        /// Caller identity
        #[arg(long)]
        caller: String,
        /// Amount in atomic units
        amount: u128,
    },

    /// Mint to the treasury and distribute across holders (administrator only)
    Fund {
        /// Caller identity
        #[arg(long)]
        caller: String,
        /// Amount in atomic units
        amount: u128,
    },

    /// Withdraw everything currently owed to the caller
    Withdraw {
        /// Caller identity
        #[arg(long)]
        caller: String,
    },

    /// Show an account's balance and accrued claim
    Balance { account: String },

    /// Show the amount an account could withdraw right now
    Owed { account: String },

    /// Show ledger-wide state: supply, treasury, state root
    Info,

    /// Verify the supply conservation invariant
    Audit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let state_path = resolve_state_path(cli.state)?;

    match cli.command {
        Commands::Init {
            admin,
            treasury,
            force,
        } => {
            if state_path.exists() && !force {
                print_error(&format!(
                    "Snapshot {} already exists (use --force to overwrite)",
                    state_path.display()
                ));
                std::process::exit(1);
            }
            let ledger = Ledger::new(&admin, &treasury);
            save_ledger(&ledger, &state_path)?;
            print_success(&format!(
                "Initialized ledger at {} (admin: {}, treasury: {})",
                state_path.display(),
                admin.bold(),
                treasury.bold()
            ));
        }

        Commands::Mint { caller, to, amount } => {
            let mut ledger = load_ledger(&state_path)?;
            run_op(ledger.mint(&caller, &to, amount));
            save_ledger(&ledger, &state_path)?;
            print_success(&format!(
                "Minted {} to {} (supply now {})",
                format_amount(amount),
                to.bold(),
                format_amount(ledger.total_supply())
            ));
        }

        Commands::Transfer { caller, to, amount } => {
            let mut ledger = load_ledger(&state_path)?;
            run_op(ledger.transfer(&caller, &to, amount));
            save_ledger(&ledger, &state_path)?;
            print_success(&format!(
                "Transferred {} from {} to {}",
                format_amount(amount),
                caller.bold(),
                to.bold()
            ));
        }

        Commands::Burn { caller, amount } => {
            let mut ledger = load_ledger(&state_path)?;
            run_op(ledger.burn(&caller, amount));
            save_ledger(&ledger, &state_path)?;
            print_success(&format!(
                "Burned {} from {} (supply now {})",
                format_amount(amount),
                caller.bold(),
                format_amount(ledger.total_supply())
            ));
        }

        Commands::Fund { caller, amount } => {
            let mut ledger = load_ledger(&state_path)?;
            run_op(ledger.fund_treasury(&caller, amount));
            save_ledger(&ledger, &state_path)?;
            print_success(&format!(
                "Funded treasury with {} across {} circulating units",
                format_amount(amount),
                ledger.circulating_supply().to_string().cyan()
            ));
        }

        Commands::Withdraw { caller } => {
            let mut ledger = load_ledger(&state_path)?;
            let paid = run_op(ledger.withdraw(&caller));
            save_ledger(&ledger, &state_path)?;
            print_success(&format!(
                "Paid {} to {} (balance now {})",
                format_amount(paid),
                caller.bold(),
                format_amount(ledger.balance_of(&caller))
            ));
        }

        Commands::Balance { account } => {
            let ledger = load_ledger(&state_path)?;
            let owed = run_op(ledger.owed_to(&account));
            println!("{}", account.bold());
            println!(
                "  {}: {}",
                "Balance".dimmed(),
                format_amount(ledger.balance_of(&account)).cyan()
            );
            println!("  {}: {}", "Claimable".dimmed(), format_amount(owed).cyan());
        }

        Commands::Owed { account } => {
            let ledger = load_ledger(&state_path)?;
            let owed = run_op(ledger.owed_to(&account));
            println!("{}", owed);
        }

        Commands::Info => {
            let ledger = load_ledger(&state_path)?;
            println!("{}", "Ledger".bold());
            println!("  {}: {}", "Admin".dimmed(), ledger.admin().green());
            println!(
                "  {}: {}",
                "Treasury".dimmed(),
                ledger.treasury_account().green()
            );
            println!(
                "  {}: {}",
                "Total supply".dimmed(),
                format_amount(ledger.total_supply()).cyan()
            );
            println!(
                "  {}: {}",
                "Circulating".dimmed(),
                format_amount(ledger.circulating_supply()).cyan()
            );
            println!(
                "  {}: {}",
                "Pool".dimmed(),
                format_amount(ledger.balance_of(ledger.treasury_account())).cyan()
            );
            println!(
                "  {}: {}",
                "State root".dimmed(),
                ledger.compute_state_root().dimmed()
            );
        }

        Commands::Audit => {
            let ledger = load_ledger(&state_path)?;
            match ledger.audit_supply() {
                Ok(()) => print_success(&format!(
                    "Supply audit passed: {} across {} accounts",
                    format_amount(ledger.total_supply()),
                    ledger.balances.len()
                )),
                Err(report) => {
                    print_error(&report);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

fn resolve_state_path(flag: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = flag {
        return Ok(path);
    }
    let home = dirs::home_dir().ok_or("Cannot determine home directory; pass --state")?;
    Ok(home.join(".prorata").join("ledger.json"))
}

fn load_ledger(path: &PathBuf) -> Result<Ledger, Box<dyn std::error::Error>> {
    let snapshot = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read snapshot {}: {}", path.display(), e))?;
    Ok(Ledger::from_json(&snapshot)?)
}

fn save_ledger(ledger: &Ledger, path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, ledger.to_json()?)?;
    Ok(())
}

/// Surface a ledger rejection as a CLI failure. The snapshot is only
/// rewritten after this returns, so rejected operations change nothing.
fn run_op<T>(result: Result<T, prorata_core::LedgerError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Render an atomic amount with its coin value alongside.
fn format_amount(amount: u128) -> String {
    let whole = amount / UNITS_PER_COIN;
    let frac = amount % UNITS_PER_COIN;
    format!("{} ({}.{:09} coins)", amount, whole, frac)
}

fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
