// SPDX-License-Identifier: MPL-2.0
//! The subscriber record and its on-disk representation.
//!
//! The profile screen never loads or stores this record itself; the
//! application root owns it and persists it to an `account.toml` next to
//! the preferences file. With no account backend wired up, a freshly
//! installed app starts from the seeded demo subscriber.

use crate::config::APP_NAME;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ACCOUNT_FILE: &str = "account.toml";

/// A fiber subscriber as the account system hands it to the UI.
///
/// `name` and `email` are the only fields the profile screen can change;
/// `phone`, `active_package`, and `expiry_date` are display-only. The
/// expiry date is a label, not a parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub active_package: String,
    pub expiry_date: String,
}

impl Default for UserAccount {
    fn default() -> Self {
        Self {
            name: "Ayesha Rahman".to_string(),
            email: "ayesha.rahman@example.com".to_string(),
            phone: "+880 1712-445566".to_string(),
            active_package: "Turbo 40 Mbps".to_string(),
            expiry_date: "2026-12-31".to_string(),
        }
    }
}

impl UserAccount {
    /// Returns a copy of the record with the contact fields replaced.
    ///
    /// This is the whole-record merge the profile screen commits on save:
    /// both contact fields at once, everything else untouched.
    pub fn with_contact(&self, name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            ..self.clone()
        }
    }
}

fn get_default_account_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(ACCOUNT_FILE);
        path
    })
}

pub fn load() -> Result<UserAccount> {
    if let Some(path) = get_default_account_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(UserAccount::default())
}

pub fn save(account: &UserAccount) -> Result<()> {
    if let Some(path) = get_default_account_path() {
        return save_to_path(account, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<UserAccount> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(account: &UserAccount, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(account)?;
    fs::write(path, content)?;
    Ok(())
}
