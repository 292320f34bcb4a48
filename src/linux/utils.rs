// Take a look at the license at the top of the repository in the LICENSE file.

use std::io::{self, BufRead};

/// Calls `f` on every line of `reader` (line terminator included). Invalid UTF-8 sequences are
/// replaced. Stops at the first read error, after `f` was called on every line read before it.
pub(crate) fn for_each_line<R: BufRead, F: FnMut(&str)>(mut reader: R, mut f: F) -> io::Result<()> {
    let mut buf = Vec::with_capacity(128);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        f(&String::from_utf8_lossy(&buf));
    }
}

/// Parses a base-16 number the way `strtol(s, NULL, 16)` does: leading whitespace, an optional
/// `+` and `0x` prefix are skipped and parsing stops at the first non hexadecimal digit. Returns
/// `0` if nothing could be parsed and saturates on overflow.
pub(crate) fn parse_hex(s: &str) -> u32 {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    s.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, digit| acc.saturating_mul(16).saturating_add(digit))
}

/// Parses the leading floating point number of `s` the way `atof` does. Returns `0.` if nothing
/// could be parsed.
pub(crate) fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if has_digits || frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0.;
    }
    // The exponent is only kept if it is complete.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().unwrap_or(0.)
}
