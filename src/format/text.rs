use std::collections::HashSet;
use std::str::FromStr;

/// Horizontal placement of text inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Center
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            "center" | "centre" => Ok(Alignment::Center),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    if width > 3 {
        let mut short: String = text.chars().take(width - 3).collect();
        short.push_str("...");
        short
    } else {
        text.chars().take(width).collect()
    }
}

/// Draws `lines` inside a box with `width` characters of interior space.
///
/// Each line gets `padding` blanks at both sides; lines not fitting in the
/// remaining space are truncated with an ellipsis.  Every row of the box is
/// prefixed with `indent` blanks.  The returned string has no trailing
/// newline.
pub fn box_text(
    lines: &[&str],
    width: usize,
    padding: usize,
    alignment: Alignment,
    indent: usize,
) -> String {
    let inner = width.saturating_sub(2 * padding);
    let margin = " ".repeat(indent);
    let border = format!("{}+{}+", margin, "-".repeat(width));
    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(border.clone());
    for line in lines {
        let text = truncate(line, inner);
        let aligned = match alignment {
            Alignment::Left => format!("{:<inner$}", text, inner = inner),
            Alignment::Right => format!("{:>inner$}", text, inner = inner),
            Alignment::Center => format!("{:^inner$}", text, inner = inner),
        };
        let pad = " ".repeat(width.min(padding));
        rows.push(format!("{}|{}{}{}|", margin, pad, aligned, pad));
    }
    rows.push(border);
    rows.join("\n")
}

/// Shortens labels to the smallest common length keeping them distinct.
///
/// All returned labels have the same number of chars (shorter ones are
/// padded with blanks).  If no prefix length keeps them distinct, the full
/// labels are returned padded to the longest one.
pub fn abbreviate(labels: &[String]) -> Vec<String> {
    let max_len = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let cut = |len: usize| -> Vec<String> {
        labels
            .iter()
            .map(|l| {
                let prefix: String = l.chars().take(len).collect();
                format!("{:<len$}", prefix, len = len)
            })
            .collect()
    };
    for len in 1..max_len {
        let abbrev = cut(len);
        let distinct: HashSet<&String> = abbrev.iter().collect();
        if distinct.len() == abbrev.len() {
            return abbrev;
        }
    }
    cut(max_len)
}
