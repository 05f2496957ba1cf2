//! Column counts chosen from the container width.

/// A named width threshold and the grid shape used above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub name: String,
    /// Widths strictly greater than this select the breakpoint
    pub min_width: f64,
    pub cols: u32,
    /// Padding override; the grid margin is used when unset
    pub container_padding: Option<[f64; 2]>,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: f64, cols: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
            cols,
            container_padding: None,
        }
    }

    pub fn with_container_padding(mut self, padding: [f64; 2]) -> Self {
        self.container_padding = Some(padding);
        self
    }
}

/// Breakpoint table, kept sorted by ascending `min_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new([
            Breakpoint::new("lg", 1200.0, 12),
            Breakpoint::new("md", 996.0, 10),
            Breakpoint::new("sm", 768.0, 6),
            Breakpoint::new("xs", 480.0, 4),
            Breakpoint::new("xxs", 0.0, 2),
        ])
    }
}

impl Breakpoints {
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut entries: Vec<Breakpoint> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));
        Self { entries }
    }

    /// Breakpoint for a container width.
    ///
    /// Picks the widest threshold the width strictly exceeds, falling back to
    /// the narrowest breakpoint. `None` only for an empty table.
    pub fn for_width(&self, width: f64) -> Option<&Breakpoint> {
        let (first, rest) = self.entries.split_first()?;
        Some(
            rest.iter()
                .rev()
                .find(|bp| width > bp.min_width)
                .unwrap_or(first),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.iter().find(|bp| bp.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(breakpoints: &Breakpoints, width: f64) -> &str {
        breakpoints.for_width(width).map(|bp| bp.name.as_str()).unwrap()
    }

    #[test]
    fn test_default_table() {
        let bps = Breakpoints::default();
        assert_eq!(name(&bps, 1600.0), "lg");
        assert_eq!(name(&bps, 1000.0), "md");
        assert_eq!(name(&bps, 800.0), "sm");
        assert_eq!(name(&bps, 500.0), "xs");
        assert_eq!(name(&bps, 100.0), "xxs");
        assert_eq!(bps.get("sm").map(|bp| bp.cols), Some(6));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let bps = Breakpoints::default();
        assert_eq!(name(&bps, 1200.0), "md");
        assert_eq!(name(&bps, 1200.5), "lg");
        assert_eq!(name(&bps, 0.0), "xxs");
    }

    #[test]
    fn test_unsorted_input() {
        let bps = Breakpoints::new([
            Breakpoint::new("wide", 900.0, 8),
            Breakpoint::new("narrow", 0.0, 1),
        ]);
        assert_eq!(bps.iter().next().map(|bp| bp.name.as_str()), Some("narrow"));
        assert_eq!(name(&bps, 1000.0), "wide");
        assert_eq!(name(&bps, 300.0), "narrow");
    }

    #[test]
    fn test_empty_table() {
        let bps = Breakpoints::new(Vec::new());
        assert!(bps.is_empty());
        assert!(bps.for_width(500.0).is_none());
    }
}
