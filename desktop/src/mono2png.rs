use std::path::Path;

use argh::FromArgs;
use log::info;
use pixconv_core::{
    bitmap::{self, BitOrder, PackedBitmap},
    literal,
    res::logo,
};
use pixconv_desktop::{Result, exit_on_error, image_io, init_logging, preview, std_fs};

#[derive(FromArgs)]
/// Expand a page-addressed monochrome bitmap into an RGB image
struct Args {
    /// raw packed table, defaults to the built-in 128x32 logo
    #[argh(option, short = 'i')]
    input: Option<String>,

    /// number of 8-pixel byte rows in the table
    #[argh(option, default = "logo::BYTE_ROWS")]
    byte_rows: usize,

    /// number of columns (bytes per byte row)
    #[argh(option, default = "logo::COLUMNS")]
    columns: usize,

    /// bit 7 is the top row of each band instead of bit 0
    #[argh(switch)]
    msb_top: bool,

    /// output image path
    #[argh(option, short = 'o', default = "String::from(\"output.png\")")]
    output: String,

    /// print the packed table and the expanded pixels as hex
    #[argh(switch)]
    dump: bool,

    /// open a preview window after saving
    #[argh(switch)]
    show: bool,
}

fn main() {
    init_logging();
    let args: Args = argh::from_env();
    exit_on_error(run(&args));
}

fn run(args: &Args) -> Result<()> {
    let data = match &args.input {
        Some(path) => std_fs::read_input(Path::new(path))?,
        None => logo::LOGO.to_vec(),
    };
    let bit_order = if args.msb_top {
        BitOrder::MsbTop
    } else {
        BitOrder::LsbTop
    };
    let packed = PackedBitmap::new(args.byte_rows, args.columns, &data)?.with_bit_order(bit_order);
    info!(
        "Packed bitmap: {} byte rows x {} columns, {:?}",
        packed.byte_rows(),
        packed.columns(),
        packed.bit_order()
    );

    let image = bitmap::to_rgb(&bitmap::expand(&packed));
    if args.dump {
        print!("{}", literal::hex_rows(&packed));
        println!();
        print!("{}", literal::rgb_hex_rows(&image));
    }

    image_io::save_rgb(&image, Path::new(&args.output))?;
    if args.show {
        preview::show("mono2png", &image)?;
    }
    Ok(())
}
