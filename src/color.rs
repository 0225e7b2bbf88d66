use crate::config::TOKEN_LEN;
use crate::error::AppError;

/// The six intensity levels of the 6x6x6 color cube (palette indices
/// 16-231), paired with their cube coordinate.
pub const CUBE_LEVELS: [(u8, u8); 6] = [
    (0, 0x00),
    (1, 0x5f),
    (2, 0x87),
    (3, 0xaf),
    (4, 0xd7),
    (5, 0xff),
];

/// The 24 intensity levels of the grayscale ramp (palette indices
/// 232-255), paired with their ramp coordinate.
pub const GRAY_LEVELS: [(u8, u8); 24] = [
    (0, 0x08),
    (1, 0x12),
    (2, 0x1c),
    (3, 0x26),
    (4, 0x30),
    (5, 0x3a),
    (6, 0x44),
    (7, 0x4e),
    (8, 0x58),
    (9, 0x62),
    (10, 0x6c),
    (11, 0x76),
    (12, 0x80),
    (13, 0x8a),
    (14, 0x94),
    (15, 0x9e),
    (16, 0xa8),
    (17, 0xb2),
    (18, 0xbc),
    (19, 0xc6),
    (20, 0xd0),
    (21, 0xda),
    (22, 0xe4),
    (23, 0xee),
];

/// Outcome of matching an RGB triplet against one region of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub index: u8,
    pub error: u32,
}

/// A validated 6-digit hex color, decomposed into its RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    channels: [u8; 3],
}

impl HexColor {
    /// Parses a candidate token. Accepts exactly six hex digits, either
    /// case; anything else is `InvalidHexDigit`.
    pub fn parse(token: &str) -> Result<Self, AppError> {
        let bytes = token.as_bytes();
        if bytes.len() != TOKEN_LEN || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(AppError::InvalidHexDigit(token.to_string()));
        }

        let mut channels = [0u8; 3];
        for (c, pair) in bytes.chunks_exact(2).enumerate() {
            channels[c] = 16 * hex_val(pair[0]) + hex_val(pair[1]);
        }

        Ok(HexColor { channels })
    }

    pub fn channels(&self) -> [u8; 3] {
        self.channels
    }
}

// Assumes a validated ASCII hex digit.
fn hex_val(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => 10 + (digit.to_ascii_uppercase() - b'A'),
    }
}

/// Finds the nearest entry in the color cube by matching each channel
/// against the six cube levels independently.
pub fn nearest_cube(color: HexColor) -> Match {
    let mut coords = [0u8; 3];
    let mut total_error = 0u32;

    for (c, &value) in color.channels().iter().enumerate() {
        let mut lowest = u32::MAX;

        // Strict less-than, so equidistant values keep the lower level
        for &(coord, level) in CUBE_LEVELS.iter() {
            let error = u32::from(value.abs_diff(level));
            if error < lowest {
                coords[c] = coord;
                lowest = error;
            }
        }

        total_error += lowest;
    }

    Match {
        index: 16 + 36 * coords[0] + 6 * coords[1] + coords[2],
        error: total_error,
    }
}

/// Finds the nearest entry in the grayscale ramp. Each ramp level is
/// compared against all three channels at once, so the error measures
/// how far the color is from that shade of gray.
pub fn nearest_gray(color: HexColor) -> Match {
    let mut best_coord = 0u8;
    let mut lowest = u32::MAX;

    for &(coord, level) in GRAY_LEVELS.iter() {
        let error: u32 = color
            .channels()
            .iter()
            .map(|&value| u32::from(value.abs_diff(level)))
            .sum();

        if error < lowest {
            best_coord = coord;
            lowest = error;
        }
    }

    Match {
        index: 232 + best_coord,
        error: lowest,
    }
}

/// Maps a candidate hex token to the nearest 256-color palette index.
///
/// The color cube wins only when its error is strictly lower than the
/// grayscale error; exact ties resolve to the grayscale ramp.
pub fn classify(token: &str) -> Result<u8, AppError> {
    let color = HexColor::parse(token)?;

    let cube = nearest_cube(color);
    let gray = nearest_gray(color);

    if cube.error < gray.error {
        Ok(cube.index)
    } else {
        Ok(gray.index)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("000000", 16; "black hits the cube origin")]
    #[test_case("FFFFFF", 231; "white hits the cube ceiling")]
    #[test_case("FF0000", 196; "pure red")]
    #[test_case("808080", 244; "mid gray lands on the ramp")]
    #[test_case("1C1C1C", 234; "dark gray lands on the ramp")]
    #[test_case("A1B2C3", 249; "desaturated blue is nearer the ramp")]
    #[test_case("73FF00", 82; "saturated green stays in the cube")]
    fn classify_known_colors(token: &str, index: u8) {
        assert_eq!(classify(token).unwrap(), index);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("a1b2c3").unwrap(), classify("A1B2C3").unwrap());
        assert_eq!(classify("a1B2c3").unwrap(), classify("A1B2C3").unwrap());
        assert_eq!(classify("ffffff").unwrap(), 231);
    }

    #[test]
    fn exact_tie_resolves_to_grayscale() {
        // 0x04 is 4 away from cube level 0x00 and 4 away from ramp
        // level 0x08, so both matchers report a total error of 12.
        let color = HexColor::parse("040404").unwrap();
        assert_eq!(nearest_cube(color).error, nearest_gray(color).error);
        assert_eq!(classify("040404").unwrap(), 232);
    }

    #[test]
    fn cube_channel_tie_keeps_the_lower_level() {
        // 0x73 sits exactly between cube levels 0x5f and 0x87.
        let color = HexColor::parse("73FF00").unwrap();
        let cube = nearest_cube(color);
        assert_eq!(cube.index, 82);
        assert_eq!(cube.error, 20);
    }

    #[test]
    fn gray_ramp_tie_keeps_the_lower_entry() {
        // 0x0d sits exactly between ramp levels 0x08 and 0x12.
        let color = HexColor::parse("0D0D0D").unwrap();
        let gray = nearest_gray(color);
        assert_eq!(gray.index, 232);
        assert_eq!(gray.error, 15);
    }

    #[test_case("GGGGGG"; "non hex digits")]
    #[test_case("1A2B3"; "five digits")]
    #[test_case("1A2B3C4"; "seven digits")]
    #[test_case("12345G"; "one bad digit")]
    #[test_case("#1A2B3C"; "leading hash")]
    #[test_case(""; "empty token")]
    fn classify_rejects_invalid_tokens(token: &str) {
        assert!(matches!(
            classify(token),
            Err(AppError::InvalidHexDigit(_))
        ));
    }

    #[test]
    fn every_valid_token_maps_into_the_palette() {
        for value in (0u32..=0xff_ff_ff).step_by(0x01_03_07) {
            let token = format!("{:06X}", value);
            let index = classify(&token).unwrap();
            assert!(index >= 16, "{} mapped below the cube: {}", token, index);
        }
    }

    #[test]
    fn classify_is_deterministic() {
        assert_eq!(classify("5FAFD7").unwrap(), classify("5FAFD7").unwrap());
    }

    #[test]
    fn parse_decomposes_channels() {
        assert_eq!(HexColor::parse("1A2B3C").unwrap().channels(), [
            0x1a, 0x2b, 0x3c
        ]);
        assert_eq!(HexColor::parse("FF0080").unwrap().channels(), [
            0xff, 0x00, 0x80
        ]);
    }

    #[test]
    fn reference_tables_increase_monotonically() {
        assert!(CUBE_LEVELS.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(GRAY_LEVELS.windows(2).all(|w| w[0].1 < w[1].1));
    }
}
