//! Canonical axis descriptions and units.

pub const LEFT_TO_RIGHT: &str = "left->right";
pub const POSTERIOR_TO_ANTERIOR: &str = "posterior->anterior";
pub const INFERIOR_TO_SUPERIOR: &str = "inferior->superior";
pub const TIME: &str = "time";
pub const REAL_IMAG: &str = "real-imaginary";

pub const MILLIMETERS: &str = "mm";
pub const MILLISECONDS: &str = "ms";

/// Description of canonical axis `axis`: three spatial axes, then time.
pub fn default_description(axis: usize) -> &'static str {
    match axis {
        0 => LEFT_TO_RIGHT,
        1 => POSTERIOR_TO_ANTERIOR,
        2 => INFERIOR_TO_SUPERIOR,
        3 => TIME,
        _ => "",
    }
}

pub fn default_units(axis: usize) -> &'static str {
    match axis {
        0..=2 => MILLIMETERS,
        3 => MILLISECONDS,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(default_description(1), "posterior->anterior");
        assert_eq!(default_units(2), "mm");
        assert_eq!(default_description(3), "time");
        assert_eq!(default_units(3), "ms");
        assert_eq!(default_description(7), "");
        assert_eq!(default_units(7), "");
    }
}
