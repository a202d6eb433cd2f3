/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt::{self, Display},
    path::Path,
};

use crate::header::HeaderInfo;

const VALUES_PER_LINE: usize = 12;
const INDENT: &str = "  ";

/// The full text printed for one converted icon: info comments, the PROGMEM array, and size notes.
#[derive(Debug, Clone, Copy)]
pub struct IconArray<'a> {
    pub name: &'a str,
    pub info: &'a HeaderInfo,
    pub source: &'a Path,
    /// Length of the whole input file, header included.
    pub file_len: usize,
    pub bytes: &'a [u8],
}

impl Display for IconArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        writeln!(
            f,
            "// Image info: {}x{}, bottom-up: {}",
            info.width,
            info.height,
            TitleCaseBool(info.is_bottom_up)
        )?;
        writeln!(f, "// File: {}", self.source.display())?;
        let pixel_len = self.file_len as i64 - i64::from(info.data_offset);
        writeln!(
            f,
            "// Size: {} bytes total, {pixel_len} bytes pixel data",
            self.file_len
        )?;
        writeln!(f)?;

        writeln!(f, "const uint8_t {}[] PROGMEM = {{", self.name)?;
        let nb_lines = self.bytes.len().div_ceil(VALUES_PER_LINE);
        for (i, chunk) in self.bytes.chunks(VALUES_PER_LINE).enumerate() {
            f.write_str(INDENT)?;
            for (j, byte) in chunk.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{byte:#04x}")?;
            }
            if i + 1 != nb_lines {
                f.write_str(",")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}};")?;
        writeln!(f)?;

        writeln!(f, "// Array size: {} bytes", self.bytes.len())?;
        writeln!(
            f,
            "// Memory usage: {} bytes in flash (PROGMEM)",
            self.bytes.len()
        )
    }
}

/// `True`/`False`.
#[derive(Debug, Clone, Copy)]
struct TitleCaseBool(bool);
impl Display for TitleCaseBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "True" } else { "False" })
    }
}
