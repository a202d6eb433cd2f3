/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use log::warn;

/// The pixel data following the header, as stored (no row reordering).
///
/// An offset past the end of the file yields an empty payload rather than an error.
pub fn extract(data: &[u8], data_offset: u32) -> &[u8] {
    match usize::try_from(data_offset)
        .ok()
        .and_then(|offset| data.get(offset..))
    {
        Some(pixels) => pixels,
        None => {
            warn!(
                "Pixel data offset {data_offset} lies past the end of the file ({} bytes)",
                data.len()
            );
            &[]
        }
    }
}

/// The display expects the opposite pixel polarity from BMP, so every byte is complemented.
pub fn invert(pixels: &[u8]) -> Vec<u8> {
    pixels.iter().map(|byte| !byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slices_from_offset() {
        let data = [0xaa, 0xbb, 0xcc, 0xdd];
        assert_eq!(extract(&data, 1), &[0xbb, 0xcc, 0xdd]);
        assert_eq!(extract(&data, 4), &[] as &[u8]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        assert!(extract(&[1, 2, 3], 62).is_empty());
        assert!(extract(&[1, 2, 3], u32::MAX).is_empty());
    }

    #[test]
    fn complements_each_byte() {
        assert_eq!(invert(&[0x00, 0xff, 0x0f, 0xa5]), vec![0xff, 0x00, 0xf0, 0x5a]);
        assert!(invert(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn inversion_is_an_involution(pixels in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(invert(&invert(&pixels)), pixels);
        }

        #[test]
        fn inverted_byte_is_255_minus_source(byte in any::<u8>()) {
            prop_assert_eq!(invert(&[byte])[0], 255 - byte);
        }
    }
}
