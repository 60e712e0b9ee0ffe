use std::path::PathBuf;

use argh::FromArgs;
use log::info;
use pixconv_core::blob;
use pixconv_desktop::{Result, ToolError, exit_on_error, init_logging, std_fs};

#[derive(FromArgs)]
/// Generate a binary file filled with one byte value
struct Args {
    /// file size in KiB
    #[argh(option, short = 's', default = "8 * 1024")]
    size_kb: usize,

    /// fill byte, decimal or 0x-prefixed hex
    #[argh(option, default = "blob::DEFAULT_FILL", from_str_fn(parse_byte))]
    fill: u8,

    /// output path, defaults to <size>k_ff.bin
    #[argh(option, short = 'o')]
    output: Option<String>,
}

fn parse_byte(value: &str) -> std::result::Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|err| format!("invalid byte '{}': {}", value, err))
}

fn main() {
    init_logging();
    let args: Args = argh::from_env();
    exit_on_error(run(&args));
}

fn run(args: &Args) -> Result<()> {
    let len = blob::blob_len(args.size_kb).ok_or_else(|| {
        ToolError::InvalidArgument(format!("{} KiB does not fit in memory", args.size_kb))
    })?;
    let path = match &args.output {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(blob::blob_file_name(args.size_kb)),
    };

    std_fs::write_file_with(&path, |out| blob::write_filled(out, len, args.fill))?;
    info!("Generated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_byte;

    #[test]
    fn parses_hex_and_decimal() {
        assert_eq!(parse_byte("0xFF"), Ok(0xFF));
        assert_eq!(parse_byte("0x0a"), Ok(10));
        assert_eq!(parse_byte("255"), Ok(255));
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0xGG").is_err());
    }
}
