// TRANSACTION LEDGER //////////////////////////////////////////////////////////////
// This module contains a thread-safe account type and the process-wide ledger
// recording operations on accounts. The ledger is a singleton, every thread
// talks to the same instance.

use chrono::{DateTime, Local};
use log::info;
use std::collections::HashMap;
use std::sync::Mutex;
use strum_macros::Display;
use tabled::{builder::Builder, settings::Style};

/// Kind of a recorded operation.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

/// One ledger record: what was done, on which account, how much and when.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub account_id: String,
    pub amount: f64,
    pub stamp: DateTime<Local>,
}

/// Account with a mutex-guarded balance.
pub struct Account {
    id: String,
    balance: Mutex<f64>,
}

impl Account {
    pub fn new(id: &str, balance: f64) -> Account {
        Account {
            id: id.to_string(),
            balance: Mutex::new(balance),
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_balance(&self) -> f64 {
        *self.balance.lock().unwrap()
    }

    fn deposit(&self, amount: f64) {
        let mut balance = self.balance.lock().unwrap();
        *balance += amount;
    }

    fn withdraw(&self, amount: f64) -> bool {
        let mut balance = self.balance.lock().unwrap();
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        true
    }
}

// the single process-wide ledger, const-initialized so no lazy wrapper is needed
static LEDGER: TransactionLedger = TransactionLedger {
    log: Mutex::new(Vec::new()),
};

/// Process-wide log of account operations.
///
/// Deposits are always recorded, withdrawals only when they succeed.
pub struct TransactionLedger {
    log: Mutex<Vec<Transaction>>,
}

impl TransactionLedger {
    /// Access point to the single instance.
    pub fn instance() -> &'static TransactionLedger {
        &LEDGER
    }

    /// Deposits into the account and records the operation.
    pub fn deposit(&self, acc: &Account, amount: f64) {
        acc.deposit(amount);
        let mut log = self.log.lock().unwrap();
        log.push(Transaction {
            kind: TransactionKind::Deposit,
            account_id: acc.get_id().to_string(),
            amount,
            stamp: Local::now(),
        });
    }

    /// Withdraws from the account. Failed withdrawals leave no record.
    pub fn withdraw(&self, acc: &Account, amount: f64) -> bool {
        let ok = acc.withdraw(amount);
        if ok {
            let mut log = self.log.lock().unwrap();
            log.push(Transaction {
                kind: TransactionKind::Withdraw,
                account_id: acc.get_id().to_string(),
                amount,
                stamp: Local::now(),
            });
        }
        ok
    }

    /// Number of records in the ledger.
    pub fn log_len(&self) -> usize {
        self.log.lock().unwrap().len()
    }

    /// Copy of the current ledger content.
    pub fn log_snapshot(&self) -> Vec<Transaction> {
        self.log.lock().unwrap().clone()
    }

    /// Logs per-kind counters of the recorded operations as a table.
    pub fn calc_statistics(&self) {
        let log = self.log.lock().unwrap();
        let mut stats: HashMap<String, usize> = HashMap::new();
        for transaction in log.iter() {
            *stats.entry(transaction.kind.to_string()).or_insert(0) += 1;
        }
        stats.insert("total".to_string(), log.len());
        let mut table = Builder::from(stats).build();
        table.with(Style::modern_rounded());
        info!("\n \n LEDGER STATISTICS \n \n {}", table.to_string());
    }
}

//___________________________________TESTS____________________________________
