//! Text measurement and truncation.

/// Heuristic: estimate pixel width of text (the SVG path has no font metrics).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Widest line of a possibly multi-line label.
pub fn widest_line_px(text: &str, font_px: u32) -> u32 {
    text.lines()
        .map(|l| estimate_text_width_px(l, font_px))
        .max()
        .unwrap_or(0)
}

/// Line height used for stacked label lines.
pub fn line_height_px(font_px: u32) -> i32 {
    (font_px as f32 * 1.2).ceil() as i32
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&format!("{out}…"), font_px) > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Amber", 10, 200), "Amber");
    }

    #[test]
    fn long_text_gets_single_ellipsis() {
        let t = truncate_to_width("Moderate Fever(102.2)", 10, 60);
        assert!(t.ends_with('…'));
        assert_eq!(t.matches('…').count(), 1);
        assert!(estimate_text_width_px(&t, 10) <= 60);
    }

    #[test]
    fn multi_line_width_uses_longest_line() {
        assert_eq!(
            widest_line_px("01-05\n12:00\n", 10),
            estimate_text_width_px("12:00", 10)
        );
    }
}
