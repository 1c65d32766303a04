use crate::format::format_line;
use std::collections::TryReserveError;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum DumpError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("cannot seek to byte {offset}: {source}")]
    Seek { offset: u64, source: io::Error },
    #[error("cannot allocate a {width}-byte line buffer: {source}")]
    Alloc {
        width: usize,
        source: TryReserveError,
    },
    #[error("width must be at least 1 byte per line")]
    InvalidWidth,
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;

/// Options controlling a single dump pass.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Maximum number of bytes to display (None = to end of input)
    pub limit: Option<u64>,
    /// Bytes to skip from the start of the input
    pub skip: u64,
    /// Bytes per displayed line
    pub width: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            limit: None,
            skip: 0,
            width: 16,
        }
    }
}

/// Stream a formatted dump of `r` to `out`.
///
/// Seeks to `opts.skip`, then reads chunks of `opts.width` bytes and writes
/// one formatted line per chunk until end of input or the configured limit.
///
/// The limit is checked against the bytes displayed before the upcoming
/// chunk, so the final line may run past the limit by up to one full width.
///
/// # Example
/// ```
/// use hexcat::{DumpOptions, dump};
/// use std::io::Cursor;
///
/// let mut data = Cursor::new(b"Hello".to_vec());
/// let mut out = Vec::new();
/// dump(&mut data, &mut out, &DumpOptions::default())?;
/// assert!(out.starts_with(b"00000000: 48 65 6c 6c 6f"));
/// # Ok::<(), hexcat::DumpError>(())
/// ```
pub fn dump<R: Read + Seek, W: Write>(r: &mut R, out: &mut W, opts: &DumpOptions) -> Result<()> {
    if opts.width == 0 {
        return Err(DumpError::InvalidWidth);
    }

    r.seek(SeekFrom::Start(opts.skip))
        .map_err(|source| DumpError::Seek {
            offset: opts.skip,
            source,
        })?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(opts.width)
        .map_err(|source| DumpError::Alloc {
            width: opts.width,
            source,
        })?;
    buf.resize(opts.width, 0);

    let mut offset = opts.skip;
    while opts.limit.is_none_or(|limit| offset - opts.skip < limit) {
        let n = read_full(r, &mut buf)?;
        if n == 0 {
            break;
        }
        out.write_all(format_line(&buf[..n], offset, opts.width).as_bytes())?;
        offset += n as u64;
    }

    Ok(())
}

/// Open `path` read-only and dump it to `out`, as [`dump`] does.
///
/// Open failures carry the path and the underlying OS error.
pub fn dump_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W, opts: &DumpOptions) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::open(path).map_err(|source| DumpError::Open {
        path: path.display().to_string(),
        source,
    })?;
    dump(&mut f, out, opts)
}

// Fill `buf` as far as the reader allows, so mid-stream short reads do not
// produce ragged lines. 0 means end of input.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
