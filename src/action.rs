use std::{fmt::Display, time::Instant};

use serde::Deserialize;

use crate::{error::LedgerError, ledger::Ledger, session::Session};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ActionType {
    /// Starts a session for the account whose login key is `user`,
    /// provided `pin` matches. A failed login keeps whatever session
    /// was already open.
    ///
    /// |action |user |pin  |amount |
    /// |-------|-----|-----|-------|
    /// |login  |js   |1111 |       |
    Login,

    /// Ends the current session, if any.
    ///
    /// |action |user |pin  |amount |
    /// |-------|-----|-----|-------|
    /// |logout |     |     |       |
    Logout,

    /// Moves `amount` from the logged in account to `user`.
    /// The amount must be positive, the destination must exist and
    /// differ from the source, and the source balance must cover it.
    ///
    /// |action   |user |pin  |amount |
    /// |---------|-----|-----|-------|
    /// |transfer |jd   |     |100    |
    Transfer,

    /// Credits `amount` to the logged in account if any past
    /// movement is at least a tenth of it.
    ///
    /// |action |user |pin  |amount |
    /// |-------|-----|-----|-------|
    /// |loan   |     |     |1000   |
    Loan,

    /// Closes the logged in account. `user` and `pin` must repeat the
    /// credentials of that same account. Ends the session.
    ///
    /// |action |user |pin  |amount |
    /// |-------|-----|-----|-------|
    /// |close  |js   |1111 |       |
    Close,

    /// Flips between stored order and ascending order for display.
    /// Never touches the stored movements.
    ///
    /// |action |user |pin  |amount |
    /// |-------|-----|-----|-------|
    /// |sort   |     |     |       |
    Sort,
}

impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionType::Login => "login",
            ActionType::Logout => "logout",
            ActionType::Transfer => "transfer",
            ActionType::Loan => "loan",
            ActionType::Close => "close",
            ActionType::Sort => "sort",
        };
        write!(f, "{}", name)
    }
}

/// What a successful action did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Carries the greeting, e.g. "Welcome back, Jonas".
    LoggedIn(String),
    LoggedOut,
    Transferred { to: String, amount: f64 },
    LoanGranted(f64),
    Closed(String),
    Sorted(bool),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::LoggedIn(welcome) => write!(f, "{}", welcome),
            Outcome::LoggedOut => write!(f, "logged out"),
            Outcome::Transferred { to, amount } => write!(f, "transferred {} to `{}`", amount, to),
            Outcome::LoanGranted(amount) => write!(f, "loan of {} granted", amount),
            Outcome::Closed(owner) => write!(f, "closed account of {}", owner),
            Outcome::Sorted(true) => write!(f, "movements sorted"),
            Outcome::Sorted(false) => write!(f, "movements in stored order"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Action {
    /// Type of action. See `ActionType` for more information.
    #[serde(rename = "action")]
    pub action_type: ActionType,

    /// Login key, either of the account to log into or close, or of
    /// the transfer destination.
    pub user: Option<String>,

    pub pin: Option<u32>,

    pub amount: Option<f64>,
}

impl Action {
    fn get_user(&self) -> Result<&str, LedgerError> {
        self.user
            .as_deref()
            .filter(|user| !user.is_empty())
            .ok_or(LedgerError::Malformed("user"))
    }

    fn get_pin(&self) -> Result<u32, LedgerError> {
        self.pin.ok_or(LedgerError::Malformed("pin"))
    }

    fn get_amount(&self) -> Result<f64, LedgerError> {
        self.amount.ok_or(LedgerError::Malformed("amount"))
    }

    /// Applies the action to the ledger on behalf of `session`.
    /// On error neither the ledger nor the session has changed, except
    /// that an expired session is cleared.
    pub fn apply_to(
        &self,
        session: &mut Session,
        ledger: &mut Ledger,
        now: Instant,
    ) -> Result<Outcome, LedgerError> {
        match self.action_type {
            ActionType::Login => {
                let user = self.get_user()?;
                let pin = self.get_pin()?;
                let account = ledger.authenticate(user, pin)?;
                let welcome = format!("Welcome back, {}", account.first_name());

                session.login(user, now);

                Ok(Outcome::LoggedIn(welcome))
            }
            ActionType::Logout => {
                session.logout();

                Ok(Outcome::LoggedOut)
            }
            ActionType::Transfer => {
                let to = self.get_user()?;
                let amount = self.get_amount()?;
                let from = session.current(now)?;

                ledger.transfer(from, to, amount)?;

                Ok(Outcome::Transferred {
                    to: to.to_string(),
                    amount,
                })
            }
            ActionType::Loan => {
                let amount = self.get_amount()?;
                let current = session.current(now)?;

                ledger.request_loan(current, amount)?;

                Ok(Outcome::LoanGranted(amount))
            }
            ActionType::Close => {
                let user = self.get_user()?;
                let pin = self.get_pin()?;
                let current = session.current(now)?;

                let closed = ledger.close_account(current, user, pin)?;
                session.logout();

                Ok(Outcome::Closed(closed.owner))
            }
            ActionType::Sort => {
                session.current(now)?;

                Ok(Outcome::Sorted(session.toggle_sort()))
            }
        }
    }
}
