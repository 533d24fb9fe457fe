//! ANSI palette for the dump rendering.

/// Standard 16-color ANSI codes, or empty strings when disabled, so call
/// sites can interpolate unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Section tags.
    pub blue: &'static str,
    /// Resolved names and symbol text.
    pub green: &'static str,
    /// Secondary detail (attribute rows).
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}
