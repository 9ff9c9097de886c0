use std::str::FromStr;

use thiserror::Error;

pub const MENU: &str = "
========= MENU =========
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid option \"{0}\", please try again.")]
    InvalidOption(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

impl MenuOption {
    /// Operation name used in the audit log
    pub fn name(&self) -> &'static str {
        return match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::Statement => "statement",
            Self::NewAccount => "new_account",
            Self::ListAccounts => "list_accounts",
            Self::NewClient => "new_client",
            Self::Quit => "quit",
        };
    }
}

impl FromStr for MenuOption {
    type Err = MenuError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let option = match input.trim() {
            "d" => Self::Deposit,
            "s" => Self::Withdraw,
            "e" => Self::Statement,
            "nc" => Self::NewAccount,
            "lc" => Self::ListAccounts,
            "nu" => Self::NewClient,
            "q" => Self::Quit,
            other => return Err(MenuError::InvalidOption(other.to_string())),
        };

        Ok(option)
    }
}
