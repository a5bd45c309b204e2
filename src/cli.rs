use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Report {
    /// One summary row per open account.
    Accounts,
    /// Movement rows of the account logged in at the end.
    Movements,
    /// Totals across every open account.
    Bank,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Report::Accounts => "accounts",
            Report::Movements => "movements",
            Report::Bank => "bank",
        };
        write!(f, "{}", name)
    }
}

/// Replays login, transfer, loan, close and sort actions against an
/// in-memory ledger and prints a CSV report.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// CSV file of actions with columns `action,user,pin,amount`.
    pub actions: PathBuf,

    /// CSV file of seed accounts with columns
    /// `owner,pin,interest_rate,movements`. Defaults to the demo accounts.
    #[clap(short, long)]
    pub accounts: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value_t = Report::Accounts)]
    pub report: Report,

    /// Log out automatically this many seconds after each login.
    #[clap(long)]
    pub session_ttl: Option<u64>,
}
