const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Escape a string for use inside a URL the way HTML form/query values are
/// escaped: unreserved characters pass through, space becomes `+` and every
/// other byte is written as `%XX`.
pub fn query_escape<B: AsRef<[u8]> + ?Sized>(input: &B) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len());
    for &byte in input {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX_UPPER[(byte >> 4) as usize] as char);
                out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}
