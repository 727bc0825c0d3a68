//! Visual theme and styling.

use console::Style;

/// The gallery's visual theme.
#[derive(Debug, Clone)]
pub struct GalleryTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for example indices (dim).
    pub index: Style,
    /// Style for the template language tag (cyan).
    pub language: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for GalleryTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            index: Style::new().dim(),
            language: Style::new().cyan(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            index: Style::new(),
            language: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("› {}", msg)))
    }

    /// Format a header.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▦"),
            self.highlight.apply_to(title)
        )
    }

    /// Format one gallery row: index, name, language.
    pub fn format_example(&self, index: usize, name: &str, language: Option<&str>) -> String {
        let language = language
            .map(|l| format!(" {}", self.language.apply_to(format!("[{}]", l))))
            .unwrap_or_default();
        format!(
            "{} {}{}",
            self.index.apply_to(format!("{:>3}", index)),
            self.highlight.apply_to(name),
            language
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_success() {
        let theme = GalleryTheme::plain();
        assert_eq!(theme.format_success("Loaded"), "✓ Loaded");
    }

    #[test]
    fn plain_theme_formats_error() {
        let theme = GalleryTheme::plain();
        assert_eq!(theme.format_error("Unknown example"), "✗ Unknown example");
    }

    #[test]
    fn plain_theme_formats_example_row() {
        let theme = GalleryTheme::plain();
        assert_eq!(
            theme.format_example(2, "EmojiFun", Some("svelte")),
            "  2 EmojiFun [svelte]"
        );
    }

    #[test]
    fn example_row_without_language() {
        let theme = GalleryTheme::plain();
        assert_eq!(theme.format_example(10, "Cards", None), " 10 Cards");
    }

    #[test]
    fn header_contains_title() {
        let theme = GalleryTheme::new();
        assert!(theme.format_header("Examples").contains("Examples"));
    }
}
