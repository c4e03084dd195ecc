pub const MAX_MARGIN_LINES: u8 = 10;

/// Search options handed to each controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub case_sensitive: bool,
    margin_lines: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            margin_lines: 2,
        }
    }
}

impl SearchConfig {
    pub fn new(case_sensitive: bool, margin_lines: i64) -> Self {
        let mut config = Self {
            case_sensitive,
            ..Self::default()
        };
        config.set_margin_lines(margin_lines);
        config
    }

    /// Context lines kept visible around each match, always within `0..=10`.
    pub fn margin_lines(&self) -> u8 {
        self.margin_lines
    }

    pub fn set_margin_lines(&mut self, margin_lines: i64) {
        let clamped = margin_lines.clamp(0, MAX_MARGIN_LINES as i64) as u8;
        if clamped as i64 != margin_lines {
            tracing::warn!(requested = margin_lines, clamped, "margin lines clamped");
        }
        self.margin_lines = clamped;
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}
