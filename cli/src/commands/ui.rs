use console::Style;

pub fn print_header(title: &str) {
    println!("\n{}", Style::new().bold().cyan().apply_to(title));
    println!("{}", Style::new().dim().apply_to("─".repeat(title.len())));
}

pub fn print_key_value(key: &str, value: &str) {
    println!(
        "{}: {}",
        Style::new().dim().apply_to(key),
        Style::new().bold().apply_to(value)
    );
}

/// Right-pad to a display width, ignoring ANSI escapes
pub fn pad(text: &str, width: usize) -> String {
    let visible = console::measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(visible)))
}

/// Color a 0-10 score by band
pub fn score_style(score: f64) -> Style {
    if score >= 7.0 {
        Style::new().green().bold()
    } else if score >= 4.0 {
        Style::new().yellow()
    } else {
        Style::new().dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_uses_visible_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        let styled = Style::new().red().force_styling(true).apply_to("ab").to_string();
        assert_eq!(console::measure_text_width(&pad(&styled, 4)), 4);
    }
}
