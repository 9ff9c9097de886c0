mod bank_service;

pub use bank_service::{Bank, BankError, NewClient, BIRTH_DATE_FORMAT};
