/// Default event colours, handed out in order to events created without one.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#10b981", // green
    "#f59e0b", // yellow
    "#8b5cf6", // purple
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#84cc16", // lime
];

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Meeting",
    "Personal",
    "Work",
    "Travel",
    "Health",
    "Education",
    "Social",
    "Other",
];

/// Round-robin colour picker.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<String>,
    next: usize,
}

impl ColorCycle {
    /// Falls back to the default palette when `colors` is empty.
    pub fn new(colors: Vec<String>) -> Self {
        let colors = if colors.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            colors
        };
        Self { colors, next: 0 }
    }

    pub fn next_color(&mut self) -> String {
        let color = self.colors[self.next % self.colors.len()].clone();
        self.next = (self.next + 1) % self.colors.len();
        color
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
