mod account;
mod action;
mod cli;
mod error;
mod ledger;
mod report;
mod session;

use std::{
    error::Error,
    fs::File,
    io,
    path::Path,
    time::{Duration, Instant},
};

use clap::Parser;
use log::{debug, info, warn};

use crate::{
    account::{demo_accounts, Account},
    action::Action,
    cli::{Args, Report},
    ledger::Ledger,
    report::{movement_rows, AccountSummary, BankStats},
    session::Session,
};

fn read_accounts(path: &Path) -> Result<Vec<Account>, Box<dyn Error>> {
    let file = File::open(path)?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let accounts = rdr.deserialize::<Account>().collect::<Result<Vec<_>, _>>()?;
    Ok(accounts)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let seed = match &args.accounts {
        Some(path) => read_accounts(path)?,
        None => demo_accounts(),
    };
    let mut ledger = Ledger::new(seed)?;
    info!("ledger opened with {} accounts", ledger.accounts().len());

    let mut session = match args.session_ttl {
        Some(secs) => Session::with_ttl(Duration::from_secs(secs)),
        None => Session::default(),
    };

    let file = File::open(&args.actions)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    for action in rdr.deserialize::<Action>() {
        let action = action?;
        debug!("applying {:?}", action);

        match action.apply_to(&mut session, &mut ledger, Instant::now()) {
            Ok(outcome) => info!("{}: {}", action.action_type, outcome),
            Err(err) => warn!("{} rejected: {}", action.action_type, err),
        }
    }

    if session.is_authenticated() {
        debug!("input ended with a session still open");
    }

    let mut wtr = csv::WriterBuilder::new().from_writer(io::stdout());

    match args.report {
        Report::Accounts => {
            for account in ledger.accounts() {
                wtr.serialize(AccountSummary::from(account))?;
            }
        }
        Report::Movements => {
            let sorted = session.sorted;

            match session.current(Instant::now()) {
                Ok(user) => {
                    for row in movement_rows(ledger.get(user)?, sorted) {
                        wtr.serialize(row)?;
                    }
                }
                Err(err) => warn!("no movements to report: {}", err),
            }
        }
        Report::Bank => wtr.serialize(BankStats::from(&ledger))?,
    }

    wtr.flush()?;

    Ok(())
}
