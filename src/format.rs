/// Render one chunk of bytes as a single dump line.
///
/// Layout, left to right: an 8-digit zero-padded lowercase hex offset and
/// `": "`, then `width` hex columns (three blank spaces for columns past the
/// end of the chunk, with an extra space after the first half of the grid),
/// one separating space, and the printable view of the chunk (`.` for
/// anything outside 0x20..=0x7e).
///
/// `chunk.len()` must not exceed `width`; a short chunk is the normal case
/// for the last line of a dump.
pub fn format_line(chunk: &[u8], offset: u64, width: usize) -> String {
    debug_assert!(chunk.len() <= width);

    let mut line = String::with_capacity(12 + 3 * width + chunk.len() + 2);
    line.push_str(&format!("{:08x}: ", offset));

    for i in 0..width {
        match chunk.get(i) {
            Some(b) => line.push_str(&format!("{:02x} ", b)),
            None => line.push_str("   "),
        }
        // extra space splits the grid into two halves
        if i + 1 == width / 2 {
            line.push(' ');
        }
    }

    line.push(' ');
    for &b in chunk {
        line.push(if (32..=126).contains(&b) { b as char } else { '.' });
    }
    line.push('\n');
    line
}

/// Render an in-memory slice as consecutive dump lines, chunked by `width`,
/// with the first line labeled `start_offset`. Requires `width > 0`.
pub fn dump_slice(bytes: &[u8], start_offset: u64, width: usize) -> String {
    let mut out = String::new();
    for (i, chunk) in bytes.chunks(width).enumerate() {
        let offs = start_offset + (i * width) as u64;
        out.push_str(&format_line(chunk, offs, width));
    }
    out
}
