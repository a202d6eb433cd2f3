/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The handful of BMP header fields needed to find and describe the pixel data.
//!
//! All multi-byte fields are little-endian. Only these offsets are read:
//!
//! | Offset | Size | Field             |
//! |--------|------|-------------------|
//! | 0      | 2    | `BM` signature    |
//! | 10     | 4    | pixel data offset |
//! | 14     | 4    | DIB header size   |
//! | 18     | 4    | width (signed)    |
//! | 22     | 4    | height (signed)   |
//! | 28     | 2    | bits per pixel    |

use log::debug;
use slicedisplay::SliceDisplay;

use crate::error::{Error, Result};

const SIGNATURE: &[u8; 2] = b"BM";
/// Everything up to and including the bits-per-pixel field.
const MIN_HEADER_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub width: u32,
    pub height: u32,
    pub data_offset: u32,
    /// A positive height means the last row of the image is stored first.
    pub is_bottom_up: bool,
}

pub fn parse(data: &[u8]) -> Result<HeaderInfo> {
    let signature = data.get(..SIGNATURE.len()).unwrap_or(data);
    if signature != SIGNATURE {
        debug!("Bad signature bytes: {}", signature.display());
        return Err(Error::InvalidFormat);
    }
    if data.len() < MIN_HEADER_LEN {
        return Err(Error::Unexpected(
            format!(
                "bitmap header truncated: need {MIN_HEADER_LEN} bytes, got {}",
                data.len()
            )
            .into(),
        ));
    }

    let data_offset = u32_le(data, 10);
    let dib_header_size = u32_le(data, 14);
    let width = i32_le(data, 18);
    let height = i32_le(data, 22);
    let bpp = u16_le(data, 28);
    debug!(
        "Header: data offset {data_offset}, DIB header size {dib_header_size}, {width}x{height}, {bpp} bpp"
    );

    if bpp != 1 {
        return Err(Error::UnsupportedFormat { bpp });
    }

    Ok(HeaderInfo {
        width: width.unsigned_abs(),
        height: height.unsigned_abs(),
        data_offset,
        is_bottom_up: height > 0,
    })
}

// Callers have already checked that `data` is at least `MIN_HEADER_LEN` long.
fn u16_le(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn u32_le(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn i32_le(data: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
