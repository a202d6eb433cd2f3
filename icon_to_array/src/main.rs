/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use log::debug;

mod error;
mod header;
mod payload;
mod render;

use error::{Error, Result};
use render::IconArray;

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Convert a 1-bit BMP image to a C byte array for PROGMEM storage.
        cmd icon-to-array {
            /// 1-bit BMP image to convert
            required input_path: PathBuf
            /// Name of the generated C array
            required array_name: String
        }
    }
}

const USAGE: &str = "\
Usage: icon_to_array <input.bmp> <array_name>

Example:
  icon_to_array wifi_error_64x64.bmp ICON_WIFI_ERROR

Generates C code for a PROGMEM icon array from a 1-bit BMP file.";

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args_os().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage) => {
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<OsString>) -> Result<()> {
    if args.len() != 2 {
        return Err(Error::Usage);
    }
    // Both entries are positionals, even when they start with a dash.
    let args = std::iter::once(OsString::from("--")).chain(args).collect();
    let args = flags::IconToArray::from_vec(args).map_err(|err| {
        debug!("Rejected arguments: {err}");
        Error::Usage
    })?;

    let data = std::fs::read(&args.input_path)
        .map_err(|err| Error::from_open(args.input_path.clone(), err))?;
    let info = header::parse(&data)?;
    debug!("Parsed {}: {info:?}", args.input_path.display());

    let inverted = payload::invert(payload::extract(&data, info.data_offset));
    let icon = IconArray {
        name: &args.array_name,
        info: &info,
        source: &args.input_path,
        file_len: data.len(),
        bytes: &inverted,
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{icon}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn wrong_argument_counts_are_usage_errors() {
        assert!(matches!(run(args(&[])), Err(Error::Usage)));
        assert!(matches!(run(args(&["icon.bmp"])), Err(Error::Usage)));
        assert!(matches!(
            run(args(&["icon.bmp", "ICON", "extra"])),
            Err(Error::Usage)
        ));
        assert!(matches!(run(args(&["--help"])), Err(Error::Usage)));
    }

    #[test]
    fn dashed_arguments_are_positionals() {
        assert!(matches!(
            run(args(&["no/such/icon.bmp", "--help"])),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            run(args(&["no/such/icon.bmp", "-ICON"])),
            Err(Error::NotFound { .. })
        ));
        let err = run(args(&["-no-such-icon.bmp", "ICON"])).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "File '-no-such-icon.bmp' not found");
    }

    #[test]
    fn positionals_are_parsed_in_order() {
        let flags =
            flags::IconToArray::from_vec(args(&["--", "wifi.bmp", "ICON_WIFI"])).unwrap();
        assert_eq!(flags.input_path, std::path::Path::new("wifi.bmp"));
        assert_eq!(flags.array_name, "ICON_WIFI");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = run(args(&["definitely/not/here.bmp", "ICON"])).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "File 'definitely/not/here.bmp' not found");
    }
}
