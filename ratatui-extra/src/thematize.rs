use ratatui::{style::Style, widgets::BorderType};

pub trait Thematize {
    fn style(&self) -> Style;

    fn style_dim(&self) -> Style;

    fn border_type(&self) -> BorderType;

    fn boxed(&self) -> bool;

    /// Batched timings, "on" badges.
    fn success(&self) -> Style;

    /// Individual timings, "busy" badges.
    fn warning(&self) -> Style;

    /// Headline values such as the total and time saved.
    fn primary(&self) -> Style;

    /// Improvement percentages.
    fn accent(&self) -> Style;

    /// Every other row of a table.
    fn zebra(&self) -> Style;

    /// Placeholder blocks shown while loading.
    fn skeleton(&self) -> Style;

    fn block(&self) -> Style {
        self.style()
    }

    fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => self.style(),
            Tone::Dim => self.style_dim(),
            Tone::Primary => self.primary(),
            Tone::Success => self.success(),
            Tone::Warning => self.warning(),
            Tone::Accent => self.accent(),
        }
    }
}

/// Semantic color role of a widget, resolved against the active theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Plain,
    Dim,
    Primary,
    Success,
    Warning,
    Accent,
}
