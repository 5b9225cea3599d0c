// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Kvitto receipt bridge.

use serde::{Deserialize, Serialize};

/// Which host integration is active, decided by marker-object presence.
///
/// Detection is re-evaluated on every query rather than cached, so a host
/// that injects its bridge object late is picked up on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    /// Android-style POS device (Sunmi class) with a native bridge object.
    NativeDevice,
    /// Desktop app hosting the page in a webview with an injected api object.
    DesktopWebview,
    /// Plain browser — no bridge at all.
    Web,
}

impl DeviceType {
    /// Stable string identifier, as reported to the embedding page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NativeDevice => "native-device",
            Self::DesktopWebview => "desktop-webview",
            Self::Web => "web",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three capability methods a host bridge may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Print,
    PlayAlert,
    StopAlert,
}

impl Capability {
    /// Method name on the host bridge object.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::PlayAlert => "playAlert",
            Self::StopAlert => "stopAlert",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Thermal paper roll width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperWidth {
    /// 58 mm roll — 32 printable columns.
    Mm58,
    /// 80 mm roll — 48 printable columns.
    Mm80,
}

impl PaperWidth {
    /// Printable character columns at font A.
    pub fn columns(&self) -> usize {
        match self {
            Self::Mm58 => 32,
            Self::Mm80 => 48,
        }
    }
}

/// How the receipt printer is attached to the desktop host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterTransport {
    /// Network printer, raw jobs to TCP port 9100.
    Lan,
    /// USB-attached printer via the OS spooler.
    Usb,
    /// Classic Bluetooth SPP printer.
    Bluetooth,
}

impl PrinterTransport {
    /// Config-file keyword for this transport.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lan => "lan",
            Self::Usb => "usb",
            Self::Bluetooth => "bluetooth",
        }
    }
}

impl std::fmt::Display for PrinterTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
