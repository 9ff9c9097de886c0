use crate::ids::AccountNumber;
use crate::models::CurrentAccountLimits;
use crate::Money;

/// Rules the bank opens accounts and registers clients with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub branch: String,
    pub first_account_number: AccountNumber,
    pub withdrawal_limit: Money,
    pub withdrawal_count_limit: usize,
    pub daily_transaction_cap: usize,
}

impl BankConfig {
    pub fn current_account_limits(&self) -> CurrentAccountLimits {
        return CurrentAccountLimits {
            withdrawal_limit: self.withdrawal_limit,
            withdrawal_count_limit: self.withdrawal_count_limit,
        };
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        return Self {
            branch: "0001".to_string(),
            first_account_number: AccountNumber(1001),
            withdrawal_limit: Money::from_whole(500),
            withdrawal_count_limit: 3,
            daily_transaction_cap: 2,
        };
    }
}
