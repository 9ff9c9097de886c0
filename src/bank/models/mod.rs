mod account;
mod client;

pub use account::{Account, AccountError, AccountKind, CurrentAccountLimits, Holder};
pub use client::{Client, ClientError};
