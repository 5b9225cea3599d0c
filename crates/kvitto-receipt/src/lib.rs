// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Kvitto Receipt — thermal-paper formatting, ESC/POS raw job rendering, and
// LAN printer discovery.  This crate is the desktop host's printing
// infrastructure; the bridge dispatcher itself stays network-free.

pub mod deliver;
pub mod discovery;
pub mod escpos;
pub mod format;

pub use deliver::print_receipt;
pub use discovery::{discover_lan_printers, local_subnet, send_raw_job, RAW_PRINT_PORT};
pub use escpos::render_raw_job;
pub use format::wrap_receipt;
