use std::str::FromStr;

use yansi::Color;

/// Colours accepted for the plotted characters.
///
/// `Default` leaves text untouched; the rest are painted with the bright
/// variant of the terminal palette (grey and black excepted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Default,
    White,
    Aqua,
    Pink,
    Blue,
    Yellow,
    Green,
    Red,
    Grey,
    Black,
}

impl Default for Colour {
    fn default() -> Self {
        Colour::Default
    }
}

impl Colour {
    pub const NAMES: &'static [&'static str] = &[
        "default", "white", "aqua", "pink", "blue", "yellow", "green", "red", "grey", "black",
    ];

    /// Resolves a colour name, falling back to `Colour::Default` (with a
    /// warning) for unknown names.
    pub fn from_name(name: &str) -> Colour {
        match name.parse() {
            Ok(colour) => colour,
            Err(_) => {
                warn!("Unknown colour '{}', using default", name);
                Colour::Default
            }
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Colour::Default => None,
            Colour::White => Some(Color::Fixed(15)),
            Colour::Aqua => Some(Color::Fixed(14)),
            Colour::Pink => Some(Color::Fixed(13)),
            Colour::Blue => Some(Color::Fixed(12)),
            Colour::Yellow => Some(Color::Fixed(11)),
            Colour::Green => Some(Color::Fixed(10)),
            Colour::Red => Some(Color::Fixed(9)),
            Colour::Grey => Some(Color::Fixed(8)),
            Colour::Black => Some(Color::Black),
        }
    }

    /// Wraps `text` in the escape codes for this colour.
    pub fn paint(self, text: &str) -> String {
        match self.color() {
            Some(color) => color.paint(text).to_string(),
            None => text.to_owned(),
        }
    }
}

impl FromStr for Colour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(Colour::Default),
            "white" => Ok(Colour::White),
            "aqua" => Ok(Colour::Aqua),
            "pink" => Ok(Colour::Pink),
            "blue" => Ok(Colour::Blue),
            "yellow" => Ok(Colour::Yellow),
            "green" => Ok(Colour::Green),
            "red" => Ok(Colour::Red),
            "grey" | "gray" => Ok(Colour::Grey),
            "black" => Ok(Colour::Black),
            other => Err(format!("unknown colour '{}'", other)),
        }
    }
}
