use serde::Serialize;

use crate::{
    account::{Account, SortOrder},
    ledger::Ledger,
};

/// Movements at or above this count as large in `BankStats`.
const LARGE_MOVEMENT: f64 = 1000.0;

#[derive(Debug, Serialize, PartialEq)]
pub struct AccountSummary {
    pub user: String,
    pub owner: String,
    pub balance: f64,

    #[serde(rename = "in")]
    pub deposits: f64,

    #[serde(rename = "out")]
    pub withdrawals: f64,

    pub interest: f64,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        AccountSummary {
            user: account.login_key(),
            owner: account.owner.clone(),
            balance: account.balance(),
            deposits: account.total_deposits(),
            withdrawals: account.total_withdrawals(),
            interest: account.total_interest(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MovementRow {
    /// 1-based position in the list being shown.
    pub index: usize,
    pub kind: MovementKind,
    pub value: f64,
}

/// Display rows for `account`, newest first.
///
/// With `sorted` the rows follow the descending copy instead, so the
/// largest movement is on top. Indexes count from the bottom row.
pub fn movement_rows(account: &Account, sorted: bool) -> Vec<MovementRow> {
    let shown = if sorted {
        account.sorted_movements(SortOrder::Descending)
    } else {
        account.movements().iter().rev().copied().collect()
    };
    let count = shown.len();

    shown
        .into_iter()
        .enumerate()
        .map(|(i, value)| MovementRow {
            index: count - i,
            kind: if value > 0.0 {
                MovementKind::Deposit
            } else {
                MovementKind::Withdrawal
            },
            value,
        })
        .collect()
}

#[derive(Debug, Serialize, PartialEq)]
pub struct BankStats {
    pub accounts: usize,
    pub overall_balance: f64,
    pub deposits: f64,
    pub withdrawals: f64,
    pub large_movements: usize,
}

impl From<&Ledger> for BankStats {
    fn from(ledger: &Ledger) -> Self {
        BankStats {
            accounts: ledger.accounts().len(),
            overall_balance: ledger.overall_balance(),
            deposits: ledger.total_bank_deposits(),
            withdrawals: ledger.total_bank_withdrawals(),
            large_movements: ledger.movements_at_least(LARGE_MOVEMENT),
        }
    }
}
