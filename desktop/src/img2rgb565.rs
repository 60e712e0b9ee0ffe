use std::path::Path;

use argh::FromArgs;
use log::info;
use pixconv_core::{literal, rgb565};
use pixconv_desktop::{Result, exit_on_error, image_io, init_logging, preview, std_fs};

#[derive(FromArgs)]
/// Convert an image into a C array of RGB565 values
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input: String,

    /// output text file path
    #[argh(option, short = 'o', default = "String::from(\"rgb565_array.txt\")")]
    output: String,

    /// name of the generated array
    #[argh(option, default = "String::from(literal::DEFAULT_ARRAY_NAME)")]
    name: String,

    /// also save the decoded RGB565 image to this path
    #[argh(option)]
    preview: Option<String>,

    /// show the decoded RGB565 image in a window
    #[argh(switch)]
    show: bool,
}

fn main() {
    init_logging();
    let args: Args = argh::from_env();
    exit_on_error(run(&args));
}

fn run(args: &Args) -> Result<()> {
    let image = image_io::load_rgb(Path::new(&args.input))?;
    let packed = rgb565::encode_image(&image);
    info!("Converted {} pixels", packed.as_slice().len());

    let text = literal::serialize_as_array_literal(&packed, &args.name);
    std_fs::write_text(Path::new(&args.output), &text)?;

    if args.preview.is_some() || args.show {
        let decoded = rgb565::decode_image(&packed);
        if let Some(path) = &args.preview {
            image_io::save_rgb(&decoded, Path::new(path))?;
        }
        if args.show {
            preview::show("img2rgb565", &decoded)?;
        }
    }
    Ok(())
}
