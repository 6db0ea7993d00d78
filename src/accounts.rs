use serde::{Deserialize, Serialize};

/// Standard names the scenario runner gives to the node's unlocked accounts.
const ACCOUNT_NAMES: &[(&str, usize)] = &[
    ("default", 0),
    ("root", 0),
    ("admin", 0),
    ("first", 0),
    ("bank", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub address: String,
}

impl Account {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Names the given node accounts using the standard name map. Names whose
    /// index has no account are skipped.
    pub fn load<S: AsRef<str>>(addresses: &[S]) -> Self {
        let accounts = ACCOUNT_NAMES
            .iter()
            .filter_map(|(name, index)| {
                addresses
                    .get(*index)
                    .map(|address| Account::new(*name, address.as_ref()))
            })
            .collect();
        Self { accounts }
    }

    pub fn push(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// First account whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Account> {
        let wanted = name.to_lowercase();
        self.accounts
            .iter()
            .find(|account| account.name.to_lowercase() == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
