// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Kvitto.

use thiserror::Error;

use crate::types::{Capability, PrinterTransport};

/// Top-level error type for all Kvitto operations.
///
/// The bridge dispatcher never surfaces these to its callers — its public
/// operations collapse them to booleans after logging.  They exist for the
/// adapter layer and for the receipt/discovery/config infrastructure, where
/// callers do want to know what went wrong.
#[derive(Debug, Error)]
pub enum KvittoError {
    // -- Bridge errors --
    /// The active host exposes no callable for this capability.  A detected
    /// condition, not a fault.
    #[error("host capability absent: {0}")]
    CapabilityAbsent(Capability),

    /// A host-injected callable was invoked and failed.
    #[error("host call {capability} failed: {message}")]
    HostCall {
        capability: Capability,
        message: String,
    },

    // -- Receipt / printer errors --
    #[error("printer discovery failed: {0}")]
    Discovery(String),

    #[error("raw print job failed: {0}")]
    RawJob(String),

    /// USB and Bluetooth receipts go through the host OS spooler, which the
    /// embedding application owns — direct delivery only speaks LAN.
    #[error("transport not supported for direct delivery: {0}")]
    UnsupportedTransport(PrinterTransport),

    // -- Config / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KvittoError>;
