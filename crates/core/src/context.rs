//! Per-run shared state: shop settings and the system event log.
//!
//! One [`AppContext`] is constructed at process start and handed by reference
//! to every component that needs it (pricing, notification listeners, the
//! product factory). There is no global instance and no lazy initialization;
//! "one shared instance per run" is enforced by ownership, not by a
//! singleton.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shop-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display label put in front of prices. Not a locale-aware currency.
    pub currency_label: String,
    /// VAT fraction applied by tax-inclusive pricing policies.
    pub tax_rate: f64,
    /// Shop-wide discount fraction applied by standard pricing.
    pub base_discount: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_label: "EUR".to_string(),
            tax_rate: 0.22,
            base_discount: 0.0,
        }
    }
}

/// Partial settings change; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub currency_label: Option<String>,
    pub tax_rate: Option<f64>,
    pub base_discount: Option<f64>,
}

/// A single timestamped line in the system log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Append-only system log. Grows for the lifetime of the process; entries are
/// never pruned or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Utc::now(),
            message: message.into(),
        });
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared per-run state, passed explicitly to components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppContext {
    settings: Settings,
    log: EventLog,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a partial settings change; unset fields are left untouched.
    /// Records the change in the system log.
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if let Some(currency_label) = update.currency_label {
            self.settings.currency_label = currency_label;
        }
        if let Some(tax_rate) = update.tax_rate {
            self.settings.tax_rate = tax_rate;
        }
        if let Some(base_discount) = update.base_discount {
            self.settings.base_discount = base_discount;
        }
        tracing::debug!(
            tax_rate = self.settings.tax_rate,
            base_discount = self.settings.base_discount,
            currency = %self.settings.currency_label,
            "settings updated"
        );
        self.log.append("System configuration updated");
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn append_log(&mut self, message: impl Into<String>) {
        self.log.append(message);
    }
}
