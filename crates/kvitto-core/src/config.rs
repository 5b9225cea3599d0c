// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{PaperWidth, PrinterTransport};

/// Persistent bridge settings, stored as JSON next to the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// How the receipt printer is attached.
    pub transport: PrinterTransport,
    /// Printer address — IP for LAN, device address for Bluetooth, unused
    /// for USB spooler printing.
    pub address: Option<String>,
    /// Thermal roll width, decides the wrap column count.
    pub paper_width: PaperWidth,
    /// Raw-job connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            transport: PrinterTransport::Lan,
            address: Some("192.168.1.50".to_string()),
            paper_width: PaperWidth::Mm80,
            connect_timeout_secs: 10,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write configuration to a JSON file, pretty-printed for hand editing.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_fallbacks() {
        let cfg = BridgeConfig::default();
        assert_eq!(cfg.transport, PrinterTransport::Lan);
        assert_eq!(cfg.address.as_deref(), Some("192.168.1.50"));
        assert_eq!(cfg.paper_width, PaperWidth::Mm80);
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut cfg = BridgeConfig::default();
        cfg.transport = PrinterTransport::Bluetooth;
        cfg.paper_width = PaperWidth::Mm58;
        cfg.save(&path).unwrap();

        let loaded = BridgeConfig::load(&path).unwrap();
        assert_eq!(loaded.transport, PrinterTransport::Bluetooth);
        assert_eq!(loaded.paper_width, PaperWidth::Mm58);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = BridgeConfig::load(Path::new("/nonexistent/config.json"));
        assert!(matches!(err, Err(crate::error::KvittoError::Io(_))));
    }
}
