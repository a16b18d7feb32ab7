use palette::{IntoColor, LinSrgb, Mix, Oklch, Srgb};

/// A color as written in styles. `Var` names a theme entry and is resolved
/// at draw time.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Blend toward `other` in linear light. `factor` 0.0 keeps `self`,
    /// 1.0 yields `other`.
    pub fn mix(self, other: Rgb, factor: f32) -> Rgb {
        let from: LinSrgb = Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_linear();
        let to: LinSrgb = Srgb::new(other.r, other.g, other.b)
            .into_format::<f32>()
            .into_linear();
        let mixed = from.mix(to, factor.clamp(0.0, 1.0));
        let srgb: Srgb<f32> = Srgb::from_linear(mixed);
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn hex(value: u32) -> Self {
        let Rgb { r, g, b } = Rgb::hex(value);
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Concrete value of a non-variable color. Variables need a theme and
    /// return `None` here.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Var(_) => None,
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
