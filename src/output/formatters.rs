//! Layout helpers for terminal output

/// Horizontal rule with a centered title, `width` columns wide
///
/// The title is padded with one space on each side; the rule never gets
/// shorter than the title.
#[must_use]
pub fn ruler(title: &str, width: usize) -> String {
    let title_width = title.chars().count() + 2;
    let side = width.saturating_sub(title_width);
    let left = side / 2;
    let right = side - left;

    format!("{} {title} {}", "─".repeat(left), "─".repeat(right))
}

/// Spaces that center `visible_width` columns of content in `width`
#[must_use]
pub fn centering_pad(visible_width: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(visible_width) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruler_fills_width() {
        let rule = ruler("Guess 1", 40);
        assert_eq!(rule.chars().count(), 40);
        assert!(rule.contains(" Guess 1 "));
        assert!(rule.starts_with('─'));
        assert!(rule.ends_with('─'));
    }

    #[test]
    fn ruler_odd_remainder_goes_right() {
        assert_eq!(ruler("ab", 9), "── ab ───");
    }

    #[test]
    fn ruler_wider_title_has_no_rule() {
        assert_eq!(ruler("Game Over", 4), " Game Over ");
    }

    #[test]
    fn centering_pad_halves_remaining_space() {
        assert_eq!(centering_pad(5, 40).len(), 17);
        assert_eq!(centering_pad(26, 40).len(), 7);
        assert_eq!(centering_pad(50, 40), "");
    }
}
