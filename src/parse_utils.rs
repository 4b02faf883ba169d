/// ASCII whitespace, plus the vertical tab and the `\x1c`..=`\x1f` separators.
pub fn is_field_space(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0b || (0x1c..=0x1f).contains(&c)
}

/// Split on runs of [`is_field_space`] bytes, never yielding empty fields.
pub fn fields(b: &[u8]) -> impl Iterator<Item = &[u8]> {
    b.split(|&c| is_field_space(c)).filter(|f| !f.is_empty())
}

/// Remove a trailing `\n` or `\r\n`.
pub fn strip_line_ending(b: &[u8]) -> &[u8] {
    let b = b.strip_suffix(b"\n").unwrap_or(b);
    b.strip_suffix(b"\r").unwrap_or(b)
}
