/// Fill colors keyed by country name, with a fallback for anything unlisted.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

const COUNTRY_FILLS: &[(&str, &str)] = &[
    ("Mexico", "#90EE90"),
    ("Guatemala", "#FFB6C1"),
    ("Belize", "#87CEEB"),
];

impl Palette {
    /// Look up the fill color for a country name.
    pub fn fill_for(&self, country: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, fill)| *fill)
            .unwrap_or(self.fallback)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { entries: COUNTRY_FILLS, fallback: "#cccccc" }
    }
}
