// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ESC/POS raw job rendering.
//
// Builds the byte stream sent verbatim to a network receipt printer on
// port 9100: initialise, select the Nordic international set and code page
// 850 (so åäö print correctly on Swedish receipts), the wrapped text in
// CP850, paper feed, full cut.

use kvitto_core::types::PaperWidth;

use crate::format::wrap_receipt;

const ESC: u8 = 0x1b;
const GS: u8 = 0x1d;

/// ESC R n — international character set, n = 7 selects Nordic.
const NORDIC_CHARSET: [u8; 3] = [ESC, b'R', 0x07];

/// ESC t n — character code table, n = 5 selects PC850 multilingual.
const CODEPAGE_850: [u8; 3] = [ESC, b't', 0x05];

/// Feed clear of the cutter before cutting.
const FEED_LINES: &[u8] = b"\n\n\n\n\n\n";

/// Render a complete raw ESC/POS job for the given receipt text.
pub fn render_raw_job(text: &str, width: PaperWidth) -> Vec<u8> {
    let wrapped = wrap_receipt(text, width);
    // wrap_receipt guarantees a trailing newline; the feed block below is
    // the job's vertical spacing, so the body carries none of its own.
    let body = wrapped.strip_suffix('\n').unwrap_or(&wrapped);
    let cleaned = scrub_symbols(body);

    let mut job = Vec::with_capacity(cleaned.len() + 32);
    job.extend_from_slice(&[ESC, b'@']); // reset printer state
    job.extend_from_slice(&NORDIC_CHARSET);
    job.extend_from_slice(&CODEPAGE_850);
    job.extend_from_slice(&encode_cp850(&cleaned));
    job.extend_from_slice(FEED_LINES);
    job.extend_from_slice(&[GS, b'V', 0x00]); // full cut
    job
}

/// Replace decorative symbols that order tickets tend to carry with
/// printable equivalents.  Thermal printers render none of them.
pub fn scrub_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '🚚' | '🧾' | '🎊' | '\u{fe0f}' => {} // dropped outright
            '✔' => out.push_str("OK"),
            '🎯' => out.push('*'),
            '━' => out.push('-'),
            '¨' => out.push('~'),
            _ => out.push(c),
        }
    }
    out
}

/// Lossy CP850 encoding.
///
/// ASCII passes through, the Latin letters a Nordic receipt can contain map
/// to their CP850 bytes, anything else becomes `?` rather than garbage.
pub fn encode_cp850(text: &str) -> Vec<u8> {
    text.chars().map(cp850_byte).collect()
}

fn cp850_byte(c: char) -> u8 {
    match c {
        '\n' | '\r' | '\t' => c as u8,
        ' '..='~' => c as u8,
        'Ç' => 0x80,
        'ü' => 0x81,
        'é' => 0x82,
        'â' => 0x83,
        'ä' => 0x84,
        'à' => 0x85,
        'å' => 0x86,
        'ç' => 0x87,
        'ê' => 0x88,
        'ë' => 0x89,
        'è' => 0x8a,
        'ï' => 0x8b,
        'î' => 0x8c,
        'ì' => 0x8d,
        'Ä' => 0x8e,
        'Å' => 0x8f,
        'É' => 0x90,
        'æ' => 0x91,
        'Æ' => 0x92,
        'ô' => 0x93,
        'ö' => 0x94,
        'ò' => 0x95,
        'û' => 0x96,
        'ù' => 0x97,
        'ÿ' => 0x98,
        'Ö' => 0x99,
        'Ü' => 0x9a,
        'ø' => 0x9b,
        '£' => 0x9c,
        'Ø' => 0x9d,
        'á' => 0xa0,
        'í' => 0xa1,
        'ó' => 0xa2,
        'ú' => 0xa3,
        'ñ' => 0xa4,
        'Ñ' => 0xa5,
        'ß' => 0xe1,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_starts_with_init_and_charset_preamble() {
        let job = render_raw_job("Order #42", PaperWidth::Mm80);
        assert_eq!(&job[..8], &[ESC, b'@', ESC, b'R', 0x07, ESC, b't', 0x05]);
    }

    #[test]
    fn job_ends_with_feed_and_full_cut() {
        let job = render_raw_job("Order #42", PaperWidth::Mm80);
        let tail = &job[job.len() - 9..];
        assert_eq!(&tail[..6], b"\n\n\n\n\n\n");
        assert_eq!(&tail[6..], &[GS, b'V', 0x00]);
    }

    #[test]
    fn feed_block_is_exactly_six_newlines() {
        let job = render_raw_job("Order #42", PaperWidth::Mm80);
        // Single-line receipt: the byte before the feed block is receipt
        // text, not a seventh newline.
        let before_feed = job[job.len() - 10];
        assert_ne!(before_feed, b'\n');
        assert_eq!(before_feed, b'2');
    }

    #[test]
    fn nordic_letters_use_cp850_bytes() {
        assert_eq!(encode_cp850("åäö"), vec![0x86, 0x84, 0x94]);
        assert_eq!(encode_cp850("ÅÄÖ"), vec![0x8f, 0x8e, 0x99]);
    }

    #[test]
    fn unmapped_characters_degrade_to_question_mark() {
        assert_eq!(encode_cp850("日"), vec![b'?']);
    }

    #[test]
    fn decorative_symbols_are_scrubbed() {
        assert_eq!(scrub_symbols("🧾 Order ✔️"), " Order OK");
        assert_eq!(scrub_symbols("━━━"), "---");
    }

    #[test]
    fn receipt_text_survives_into_job_body() {
        let job = render_raw_job("Kaffe 32.00", PaperWidth::Mm80);
        let body_start = 8;
        let body_end = job.len() - 9;
        let body = &job[body_start..body_end];
        assert!(body.windows(11).any(|w| w == b"Kaffe 32.00"));
    }
}
