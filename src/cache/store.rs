//! Bank Store Module
//!
//! Read-only bank cache keyed by BIC that iterates in insertion order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{BankError, Result};
use crate::models::{BankList, BankRecord};

// == Bank Store ==
/// Bounded bank cache keyed by BIC.
///
/// Populated once at startup and shared immutably afterwards. Iteration
/// follows the order in which BICs were first inserted.
#[derive(Debug, Clone)]
pub struct BankStore {
    /// Records in insertion order
    banks: Vec<BankRecord>,
    /// BIC -> position in `banks`
    index: HashMap<String, usize>,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl BankStore {
    // == Constructor ==
    /// Creates an empty store holding at most `max_entries` banks.
    pub fn new(max_entries: usize) -> Self {
        Self {
            banks: Vec::new(),
            index: HashMap::new(),
            max_entries,
        }
    }

    // == Load ==
    /// Reads a `{"banks": [...]}` dataset from disk.
    pub fn load(path: impl AsRef<Path>, max_entries: usize) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::from_json_str(&json, max_entries)?;
        info!("Loaded {} banks from {}", store.len(), path.display());
        Ok(store)
    }

    /// Builds a store from an in-memory `{"banks": [...]}` document.
    pub fn from_json_str(json: &str, max_entries: usize) -> Result<Self> {
        let list: BankList = serde_json::from_str(json)?;
        let mut store = Self::new(max_entries);
        for bank in list.banks {
            store.put(bank)?;
        }
        Ok(store)
    }

    // == Put ==
    /// Stores a bank under its BIC.
    ///
    /// A BIC that is already present is replaced in place and keeps its
    /// original position.
    pub fn put(&mut self, bank: BankRecord) -> Result<()> {
        if let Some(&position) = self.index.get(&bank.bic) {
            debug!("Replacing cached bank {}", bank.bic);
            self.banks[position] = bank;
            return Ok(());
        }

        if self.banks.len() >= self.max_entries {
            return Err(BankError::CacheFull(format!(
                "cannot store {}: capacity of {} banks reached",
                bank.bic, self.max_entries
            )));
        }

        self.index.insert(bank.bic.clone(), self.banks.len());
        self.banks.push(bank);
        Ok(())
    }

    // == Get ==
    /// Looks up a bank by BIC.
    pub fn get(&self, bic: &str) -> Option<&BankRecord> {
        self.index.get(bic).map(|&position| &self.banks[position])
    }

    // == Iter ==
    /// Iterates over all banks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BankRecord> {
        self.banks.iter()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}
