// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Visible fallback for the print path.
//
// Printing has a human-visible correctness consequence, so when no bridge is
// found the receipt text is surfaced to the operator instead of vanishing.
// The alert paths degrade silently; this asymmetry is deliberate.

/// Last-resort surface for receipt text when no print bridge exists.
///
/// Embedders with a UI should supply a blocking dialog; the default writes
/// to stderr so the text is at least recoverable from the terminal.
pub trait FallbackPrompt {
    fn show_print_fallback(&self, text: &str);
}

/// Default prompt: dumps the receipt to stderr.
#[derive(Debug, Default)]
pub struct StderrPrompt;

impl FallbackPrompt for StderrPrompt {
    fn show_print_fallback(&self, text: &str) {
        eprintln!("=== PRINT FALLBACK (no bridge available) ===");
        eprintln!("{text}");
        eprintln!("============================================");
    }
}
