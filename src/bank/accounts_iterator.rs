use crate::models::Account;

/// Single-pass cursor over a fixed list of accounts, yielding a printable
/// snapshot of each one.
///
/// The cursor moves forward on every `next` call, exhausted or not. Build a new
/// iterator to walk the accounts again.
#[derive(Debug)]
pub struct AccountsIterator<'a> {
    accounts: Vec<&'a Account>,
    index: usize,
}

impl<'a> AccountsIterator<'a> {
    pub fn new(accounts: Vec<&'a Account>) -> Self {
        return Self { accounts, index: 0 };
    }

    pub fn has_next(&self) -> bool {
        self.index < self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> Iterator for AccountsIterator<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.accounts.get(self.index).map(|account| describe(account));

        self.index = self.index.saturating_add(1);

        snapshot
    }
}

fn describe(account: &Account) -> String {
    format!(
        "Branch:\t\t{}\nNumber:\t\t{}\nHolder:\t\t{}\nBalance:\tR$ {}",
        account.branch(),
        account.number(),
        account.holder().name,
        account.balance(),
    )
}
