use super::{Border, Color, TextStyle};

/// Visual overrides for one surface. Unset fields fall through to whatever
/// the style is merged onto.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `over` on top of `self`: fields set in `over` win, text
    /// attributes accumulate.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            background: over.background.clone().or_else(|| self.background.clone()),
            foreground: over.foreground.clone().or_else(|| self.foreground.clone()),
            border: over.border.or(self.border),
            border_color: over
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            text_style: self.text_style.union(over.text_style),
        }
    }
}
