//! Desktop side of the pixconv tools: file and image I/O, previews and the
//! shared error type used by the binaries.

pub mod error;
pub mod image_io;
pub mod preview;
pub mod std_fs;

pub use error::{Result, ToolError};

/// Logger setup shared by every binary, `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Runs a tool body and turns an error into a logged message and exit status 1.
pub fn exit_on_error(result: Result<()>) {
    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
