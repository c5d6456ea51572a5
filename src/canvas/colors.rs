use crate::error::PlotError;

/// Default line color cycle (C0..C9), the usual tab10 palette.
const CYCLE: [[u8; 3]; 10] = [
    [31, 119, 180],  // C0 blue
    [255, 127, 14],  // C1 orange
    [44, 160, 44],   // C2 green
    [214, 39, 40],   // C3 red
    [148, 103, 189], // C4 purple
    [140, 86, 75],   // C5 brown
    [227, 119, 194], // C6 pink
    [127, 127, 127], // C7 grey
    [188, 189, 34],  // C8 olive
    [23, 190, 207],  // C9 cyan
];

/// Color of the `index`-th entry of the default cycle, wrapping around.
pub fn cycle_color(index: usize) -> [u8; 3] {
    CYCLE[index % CYCLE.len()]
}

/// Resolve a symbolic color to RGB.
///
/// Accepts single-letter codes (`b g r c m y k w`), common names, `#rrggbb`
/// and cycle references `C0`..`C9`.
pub fn parse_color(name: &str) -> Result<[u8; 3], PlotError> {
    let name = name.trim();
    let rgb = match name.to_ascii_lowercase().as_str() {
        "b" | "blue" => [0, 0, 255],
        "g" | "green" => [0, 128, 0],
        "r" | "red" => [255, 0, 0],
        "c" | "cyan" => [0, 191, 191],
        "m" | "magenta" => [191, 0, 191],
        "y" | "yellow" => [191, 191, 0],
        "k" | "black" => [0, 0, 0],
        "w" | "white" => [255, 255, 255],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "grey" | "gray" => [128, 128, 128],
        lower => {
            if let Some(hex) = lower.strip_prefix('#') {
                return parse_hex(hex).ok_or_else(|| bad_color(name));
            }
            if let Some(idx) = lower.strip_prefix('c') {
                return match idx.parse::<usize>() {
                    Ok(i) if i < CYCLE.len() => Ok(CYCLE[i]),
                    _ => Err(bad_color(name)),
                };
            }
            return Err(bad_color(name));
        }
    };
    Ok(rgb)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn bad_color(name: &str) -> PlotError {
    PlotError::invalid(format!("unknown color `{name}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_names_agree() {
        for (short, long) in [("b", "blue"), ("g", "green"), ("r", "red"), ("k", "black")] {
            assert_eq!(parse_color(short).unwrap(), parse_color(long).unwrap());
        }
    }

    #[test]
    fn test_hex_and_cycle() {
        assert_eq!(parse_color("#1f77b4").unwrap(), [31, 119, 180]);
        assert_eq!(parse_color("C0").unwrap(), cycle_color(0));
        assert_eq!(parse_color("C9").unwrap(), [23, 190, 207]);
        assert_eq!(cycle_color(12), cycle_color(2));
    }

    #[test]
    fn test_unknown_colors_rejected() {
        for bad in ["", "#12345", "#zzzzzz", "C10", "teal-ish"] {
            assert!(parse_color(bad).is_err(), "{bad} should be rejected");
        }
    }
}
