// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Configured receipt delivery.
//
// Ties the persistent printer configuration to the ESC/POS renderer and the
// raw-job transport: the one call a desktop host makes when a receipt has to
// come out of the configured printer.  Only the LAN transport is delivered
// directly — USB and Bluetooth printers sit behind the host OS spooler,
// which the embedding application owns, so those transports are reported as
// unsupported here instead of half-guessed.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tracing::info;

use kvitto_core::config::BridgeConfig;
use kvitto_core::error::{KvittoError, Result};
use kvitto_core::types::PrinterTransport;

use crate::discovery::{send_raw_job, RAW_PRINT_PORT};
use crate::escpos::render_raw_job;

/// Print receipt text on the configured printer.
///
/// Wraps the text for the configured paper width, renders the raw ESC/POS
/// job, and delivers it to the configured LAN address within the configured
/// connect timeout.
pub async fn print_receipt(cfg: &BridgeConfig, text: &str) -> Result<()> {
    match cfg.transport {
        PrinterTransport::Lan => {
            let addr = printer_addr(cfg)?;
            let job = render_raw_job(text, cfg.paper_width);
            info!(%addr, paper = ?cfg.paper_width, bytes = job.len(), "printing receipt over LAN");
            send_raw_job(addr, &job, Duration::from_secs(cfg.connect_timeout_secs)).await
        }
        other => Err(KvittoError::UnsupportedTransport(other)),
    }
}

/// Resolve the configured printer address.
///
/// Accepts a bare IP (the config-file norm, raw print port assumed) or an
/// explicit `ip:port` pair.
fn printer_addr(cfg: &BridgeConfig) -> Result<SocketAddr> {
    let address = cfg
        .address
        .as_deref()
        .ok_or_else(|| KvittoError::RawJob("no printer address configured".to_string()))?;

    if let Ok(addr) = address.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let ip: IpAddr = address
        .parse()
        .map_err(|e| KvittoError::RawJob(format!("bad printer address {address:?}: {e}")))?;
    Ok(SocketAddr::new(ip, RAW_PRINT_PORT))
}
