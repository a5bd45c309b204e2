use log::debug;

use crate::{account::Account, error::LedgerError};

/// Ordered set of open accounts.
///
/// Accounts are only ever inserted or removed as a whole, and
/// their movements are only ever appended to.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    /// Builds a ledger from seed accounts, rejecting login key collisions.
    pub fn new(accounts: Vec<Account>) -> Result<Self, LedgerError> {
        let mut ledger = Ledger::default();

        for account in accounts {
            ledger.open_account(account)?;
        }

        Ok(ledger)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn open_account(&mut self, account: Account) -> Result<(), LedgerError> {
        let key = account.login_key();

        if self.find(&key).is_some() {
            return Err(LedgerError::DuplicateLoginKey(key));
        }

        debug!("opened account `{}` for {}", key, account.owner);
        self.accounts.push(account);

        Ok(())
    }

    pub fn find(&self, login_key: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.login_key() == login_key)
    }

    fn position(&self, login_key: &str) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.login_key() == login_key)
            .ok_or_else(|| LedgerError::AccountNotFound(login_key.to_string()))
    }

    pub fn get(&self, login_key: &str) -> Result<&Account, LedgerError> {
        self.position(login_key).map(|index| &self.accounts[index])
    }

    pub fn authenticate(&self, login_key: &str, pin: u32) -> Result<&Account, LedgerError> {
        self.find(login_key)
            .filter(|account| account.pin == pin)
            .ok_or(LedgerError::InvalidCredentials)
    }

    /// Moves `amount` from `from` to `to`. Both movements are appended
    /// or neither is.
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<(), LedgerError> {
        check_amount(amount)?;

        let source = self.position(from)?;
        let destination = self.position(to)?;

        if source == destination {
            return Err(LedgerError::SelfTransfer);
        }

        let available = self.accounts[source].balance();
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        self.accounts[source].push_movement(-amount);
        self.accounts[destination].push_movement(amount);

        Ok(())
    }

    pub fn request_loan(&mut self, login_key: &str, amount: f64) -> Result<(), LedgerError> {
        check_amount(amount)?;

        let index = self.position(login_key)?;
        let account = &mut self.accounts[index];

        if !account.qualifies_for_loan(amount) {
            return Err(LedgerError::LoanDenied(amount));
        }

        account.push_movement(amount);

        Ok(())
    }

    /// Removes `current` for good, provided `login_key` and `pin` both
    /// match it.
    pub fn close_account(
        &mut self,
        current: &str,
        login_key: &str,
        pin: u32,
    ) -> Result<Account, LedgerError> {
        let index = self.position(current)?;
        let account = &self.accounts[index];

        if login_key != current || account.pin != pin {
            return Err(LedgerError::InvalidCredentials);
        }

        Ok(self.accounts.remove(index))
    }

    fn all_movements(&self) -> impl Iterator<Item = f64> + '_ {
        self.accounts
            .iter()
            .flat_map(|account| account.movements().iter().copied())
    }

    /// Sum of every movement of every open account.
    pub fn overall_balance(&self) -> f64 {
        self.all_movements().sum()
    }

    pub fn total_bank_deposits(&self) -> f64 {
        self.all_movements().filter(|mov| *mov > 0.0).sum()
    }

    pub fn total_bank_withdrawals(&self) -> f64 {
        self.all_movements()
            .filter(|mov| *mov < 0.0)
            .sum::<f64>()
            .abs()
    }

    /// Number of movements of at least `threshold`.
    pub fn movements_at_least(&self, threshold: f64) -> usize {
        self.all_movements().filter(|mov| *mov >= threshold).count()
    }
}

fn check_amount(amount: f64) -> Result<(), LedgerError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}
