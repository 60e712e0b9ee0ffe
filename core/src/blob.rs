//! Constant-filled binary images, e.g. erased flash dumps.

use alloc::string::String;

use log::info;

pub const DEFAULT_FILL: u8 = 0xFF;

const CHUNK_SIZE: usize = 4096;

pub fn blob_file_name(size_kb: usize) -> String {
    alloc::format!("{size_kb}k_ff.bin")
}

/// Length in bytes, `None` if it does not fit in `usize`.
pub fn blob_len(size_kb: usize) -> Option<usize> {
    size_kb.checked_mul(1024)
}

/// Streams `len` bytes of `fill` into `out`.
pub fn write_filled<W: embedded_io::Write>(out: &mut W, len: usize, fill: u8) -> Result<(), W::Error> {
    let chunk = [fill; CHUNK_SIZE];
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(CHUNK_SIZE);
        out.write_all(&chunk[..n])?;
        remaining -= n;
    }
    out.flush()?;
    info!("Wrote {} bytes of 0x{:02X}", len, fill);
    Ok(())
}
