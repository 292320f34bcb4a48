// Take a look at the license at the top of the repository in the LICENSE file.

/// Returns the longest prefix of `s` which is at most `max_len` bytes long and doesn't split a
/// character.
pub(crate) fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Copies `s` into `dst`, truncated so the trailing NUL always fits. Does nothing if `dst` is
/// empty.
#[cfg(feature = "c-interface")]
pub(crate) fn copy_to_c_buffer(s: &str, dst: &mut [libc::c_char]) {
    let Some(max_len) = dst.len().checked_sub(1) else {
        return;
    };
    let s = truncate_str(s, max_len);
    for (d, b) in dst.iter_mut().zip(s.bytes()) {
        *d = b as libc::c_char;
    }
    dst[s.len()] = 0;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_truncate_str() {
        assert_eq!(truncate_str("Cortex-A53", 64), "Cortex-A53");
        assert_eq!(truncate_str("Cortex-A53", 10), "Cortex-A53");
        assert_eq!(truncate_str("Cortex-A53", 6), "Cortex");
        assert_eq!(truncate_str("Cortex-A53", 0), "");
        assert_eq!(truncate_str("", 3), "");
        // `é` is two bytes long.
        assert_eq!(truncate_str("aéb", 2), "a");
        assert_eq!(truncate_str("aéb", 3), "aé");
    }

    #[cfg(feature = "c-interface")]
    #[test]
    fn check_copy_to_c_buffer() {
        let mut buf = [1 as libc::c_char; 4];
        copy_to_c_buffer("ARM", &mut buf);
        let expected: [libc::c_char; 4] = [b'A' as _, b'R' as _, b'M' as _, 0];
        assert_eq!(buf, expected);

        let mut buf = [1 as libc::c_char; 4];
        copy_to_c_buffer("Qualcomm", &mut buf);
        let expected: [libc::c_char; 4] = [b'Q' as _, b'u' as _, b'a' as _, 0];
        assert_eq!(buf, expected);

        let mut buf: [libc::c_char; 0] = [];
        copy_to_c_buffer("ARM", &mut buf);
    }
}
