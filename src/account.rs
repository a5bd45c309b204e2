use serde::{Deserialize, Deserializer};

/// Per-deposit interest below this is dropped before summing.
const MIN_INTEREST: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Full owner name, e.g. "Jonas Schmedtmann".
    pub owner: String,

    pub pin: u32,

    /// Annual rate in percent, so `1.2` means 1.2%.
    pub interest_rate: f64,

    /// Signed amounts in insertion order. Positive is a deposit,
    /// negative a withdrawal. Only ever appended to.
    ///
    /// In CSV the column holds space separated amounts:
    ///
    /// |owner              |pin  |interest_rate |movements          |
    /// |-------------------|-----|--------------|------------------|
    /// |Sarah Smith        |4444 |1             |430 1000 700 50 90|
    #[serde(deserialize_with = "deserialize_movements")]
    movements: Vec<f64>,
}

fn deserialize_movements<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    raw.split_whitespace()
        .map(|amount| amount.parse::<f64>().map_err(serde::de::Error::custom))
        .collect()
}

/// Lowercased initial of every word in `owner`.
///
/// "Steven Thomas Williams" becomes "stw".
pub fn login_key_for(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Account {
    pub fn new(owner: impl Into<String>, pin: u32, interest_rate: f64, movements: Vec<f64>) -> Self {
        Account {
            owner: owner.into(),
            pin,
            interest_rate,
            movements,
        }
    }

    pub fn login_key(&self) -> String {
        login_key_for(&self.owner)
    }

    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }

    pub fn movements(&self) -> &[f64] {
        &self.movements
    }

    pub(crate) fn push_movement(&mut self, amount: f64) {
        self.movements.push(amount);
    }

    /// Recomputed on every call, never cached.
    pub fn balance(&self) -> f64 {
        self.movements.iter().sum()
    }

    pub fn total_deposits(&self) -> f64 {
        self.movements.iter().filter(|mov| **mov > 0.0).sum()
    }

    pub fn total_withdrawals(&self) -> f64 {
        self.movements
            .iter()
            .filter(|mov| **mov < 0.0)
            .sum::<f64>()
            .abs()
    }

    /// Interest is computed per deposit. A deposit whose own interest
    /// is below `MIN_INTEREST` contributes nothing.
    pub fn total_interest(&self) -> f64 {
        self.movements
            .iter()
            .filter(|mov| **mov > 0.0)
            .map(|deposit| deposit * self.interest_rate / 100.0)
            .filter(|interest| *interest >= MIN_INTEREST)
            .sum()
    }

    /// Sorted copy of the movements. Stored order is left alone.
    pub fn sorted_movements(&self, order: SortOrder) -> Vec<f64> {
        let mut sorted = self.movements.clone();

        match order {
            SortOrder::Ascending => sorted.sort_by(|a, b| a.total_cmp(b)),
            SortOrder::Descending => sorted.sort_by(|a, b| b.total_cmp(a)),
        }

        sorted
    }

    /// True if any past movement is at least a tenth of `amount`.
    /// `1001.0 * 0.1` rounds above `100.1`, so the tenth is taken by
    /// division to keep the boundary exact.
    pub fn qualifies_for_loan(&self, amount: f64) -> bool {
        let threshold = amount / 10.0;
        self.movements.iter().any(|mov| *mov >= threshold)
    }
}

/// Accounts the demo starts with.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            1111,
            1.2,
            vec![200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0],
        ),
        Account::new(
            "Jessica Davis",
            2222,
            1.5,
            vec![5000.0, 3400.0, -150.0, -790.0, -3210.0, -1000.0, 8500.0, -30.0],
        ),
        Account::new(
            "Steven Thomas Williams",
            3333,
            0.7,
            vec![200.0, -200.0, 340.0, -300.0, -20.0, 50.0, 400.0, -460.0],
        ),
        Account::new(
            "Sarah Smith",
            4444,
            1.0,
            vec![430.0, 1000.0, 700.0, 50.0, 90.0],
        ),
    ]
}
