use folio_ratatui_extra::thematize::Thematize;
use folio_utils::tokens::TokenColor;
use ratatui::prelude::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::BorderType;
use std::fmt::Formatter;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ThemeName {
    #[default]
    Monochrome,
    MonochromeModern,
    Dark,
    DarkModern,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::str::FromStr for ThemeName {
    type Err = crate::Error;

    fn from_str(theme_name: &str) -> crate::Result<Self> {
        Self::iter()
            .find(|theme| theme.to_string() == theme_name)
            .ok_or_else(|| crate::Error::UnknownTheme(theme_name.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub text: Option<Color>,
    pub bg: Option<Color>,
    /// Monochrome themes keep every role in the terminal's own colors.
    pub colored: bool,
    pub border_type: BorderType,
}

impl Theme {
    pub fn new(theme_name: ThemeName) -> Theme {
        match theme_name {
            ThemeName::Monochrome => Theme {
                text: None,
                bg: None,
                colored: false,
                border_type: BorderType::Plain,
            },
            ThemeName::MonochromeModern => Theme {
                text: None,
                bg: None,
                colored: false,
                border_type: BorderType::Rounded,
            },
            ThemeName::Dark => Theme {
                text: Some(Color::White),
                bg: Some(Color::Black),
                colored: true,
                border_type: BorderType::Plain,
            },
            ThemeName::DarkModern => Theme {
                text: Some(Color::White),
                bg: Some(Color::Black),
                colored: true,
                border_type: BorderType::Rounded,
            },
        }
    }

    fn role(&self, color: Color, fallback: Modifier) -> Style {
        if self.colored {
            self.style().fg(color)
        } else {
            self.style().add_modifier(fallback)
        }
    }

    /// Allocation bar and legend color of a token.
    pub fn token_color(&self, color: TokenColor) -> Color {
        match color {
            TokenColor::Blue => Color::Blue,
            TokenColor::Green => Color::Green,
            TokenColor::Orange => Color::Rgb(0xf9, 0x73, 0x16),
            TokenColor::Purple => Color::Magenta,
        }
    }

    /// Red in colored themes, reversed otherwise.
    pub fn error(&self) -> Style {
        if self.colored {
            self.style().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            self.style().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn tab_active(&self) -> Style {
        self.style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

impl Thematize for Theme {
    fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(text_color) = self.text {
            style = style.fg(text_color);
        }
        if let Some(bg_color) = self.bg {
            style = style.bg(bg_color);
        }
        style
    }

    fn style_dim(&self) -> Style {
        if self.colored {
            self.style().fg(Color::Gray)
        } else {
            self.style().add_modifier(Modifier::DIM)
        }
    }

    fn border_type(&self) -> BorderType {
        self.border_type
    }

    fn boxed(&self) -> bool {
        true
    }

    fn success(&self) -> Style {
        self.role(Color::Green, Modifier::BOLD)
    }

    fn warning(&self) -> Style {
        self.role(Color::Yellow, Modifier::ITALIC)
    }

    fn primary(&self) -> Style {
        self.role(Color::Blue, Modifier::BOLD)
    }

    fn accent(&self) -> Style {
        self.role(Color::Magenta, Modifier::BOLD)
    }

    fn zebra(&self) -> Style {
        if self.colored {
            self.style().bg(Color::DarkGray)
        } else {
            self.style().add_modifier(Modifier::DIM)
        }
    }

    fn skeleton(&self) -> Style {
        if self.colored {
            self.style().fg(Color::DarkGray)
        } else {
            self.style().add_modifier(Modifier::DIM)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn theme_names_round_trip() {
        for theme in ThemeName::iter() {
            assert_eq!(ThemeName::from_str(&theme.to_string()).unwrap(), theme);
        }
    }

    #[test]
    fn unknown_theme_name() {
        assert!(matches!(
            ThemeName::from_str("Solarized"),
            Err(crate::Error::UnknownTheme(name)) if name == "Solarized"
        ));
    }
}
