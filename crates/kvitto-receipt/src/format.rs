// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Receipt line wrapping for thermal paper.
//
// Thermal printers have a hard column limit at font A: 32 columns on a
// 58 mm roll, 48 on an 80 mm roll.  Overlong lines are hard-wrapped rather
// than truncated so no order detail is lost on paper.

use kvitto_core::types::PaperWidth;

/// Hard-wrap receipt text to the paper's column count.
///
/// Blank lines are preserved (they are deliberate vertical spacing on a
/// receipt) and the result always ends with a newline so the last line
/// actually feeds out of the printer.
pub fn wrap_receipt(text: &str, width: PaperWidth) -> String {
    let cols = width.columns();
    let mut lines = Vec::new();

    for line in text.split('\n') {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(cols) {
            lines.push(chunk.iter().collect());
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        let out = wrap_receipt("Order #42\nTOTAL 57.00", PaperWidth::Mm80);
        assert_eq!(out, "Order #42\nTOTAL 57.00\n");
    }

    #[test]
    fn long_line_wraps_at_58mm_columns() {
        let line = "x".repeat(70);
        let out = wrap_receipt(&line, PaperWidth::Mm58);
        let wrapped: Vec<&str> = out.trim_end().split('\n').collect();
        assert_eq!(wrapped.len(), 3);
        assert_eq!(wrapped[0].len(), 32);
        assert_eq!(wrapped[1].len(), 32);
        assert_eq!(wrapped[2].len(), 6);
    }

    #[test]
    fn exact_width_line_does_not_split() {
        let line = "y".repeat(48);
        let out = wrap_receipt(&line, PaperWidth::Mm80);
        assert_eq!(out, format!("{line}\n"));
    }

    #[test]
    fn blank_lines_are_preserved() {
        let out = wrap_receipt("HEADER\n\nBODY", PaperWidth::Mm80);
        assert_eq!(out, "HEADER\n\nBODY\n");
    }

    #[test]
    fn wraps_by_characters_not_bytes() {
        // 40 multi-byte characters fit on one 48-column line.
        let line = "ö".repeat(40);
        let out = wrap_receipt(&line, PaperWidth::Mm80);
        assert_eq!(out.trim_end().split('\n').count(), 1);
    }
}
