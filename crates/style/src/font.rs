use crate::parsers::{deserialize_length, parse_font_shorthand};
use cardtext_types::Color;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Point size used when a font spec leaves it out.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Effectively "never shrink below the nominal size".
pub const NO_SCALE_DOWN: f32 = 100_000.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    ///
    /// Standard CSS font-weight values:
    /// - Thin: 100
    /// - Light: 300
    /// - Regular: 400
    /// - Medium: 500
    /// - Bold: 700
    /// - Black: 900
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Parse a font weight from a string (e.g., "bold", "400")
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "thin" => Ok(FontWeight::Thin),
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "bold" => Ok(FontWeight::Bold),
            "black" => Ok(FontWeight::Black),
            _ => {
                s.parse::<u16>()
                    .map(FontWeight::Numeric)
                    .map_err(|_| format!("Invalid font weight: '{}'", s))
            }
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::Numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_scale_down_to() -> f32 {
    NO_SCALE_DOWN
}

fn default_separator_color() -> Color {
    Color::rgba(0, 0, 0, 0.5)
}

/// A font as configured in a text style, before any markup is applied.
///
/// Deserializes either from a map or from a shorthand string such as
/// `"bold italic 10pt MPlantin"`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    /// Smallest point size the text may be shrunk to when fitting a box.
    pub scale_down_to: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color,
    /// Color for placeholder text (soft separators, keyword parameters).
    pub separator_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic_family: Option<String>,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            size: DEFAULT_FONT_SIZE,
            scale_down_to: NO_SCALE_DOWN,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            color: Color::default(),
            separator_color: default_separator_color(),
            bold_family: None,
            italic_family: None,
        }
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            ..Default::default()
        }
    }

    /// Resolve the spec into a concrete font for one run of text.
    ///
    /// `placeholder` recolors the font with the separator color; an explicit
    /// `color` wins over both the base and the separator color.
    pub fn make(&self, bold: bool, italic: bool, placeholder: bool, color: Option<Color>) -> Font {
        let mut family = self.family.clone();
        let mut weight = self.weight;
        let mut style = self.style;
        if bold {
            weight = FontWeight::Bold;
            if let Some(name) = &self.bold_family {
                family = name.clone();
            }
        }
        if italic {
            style = FontStyle::Italic;
            if let Some(name) = &self.italic_family {
                family = name.clone();
            }
        }
        let color = match color {
            Some(c) => c,
            None if placeholder => self.separator_color,
            None => self.color,
        };
        Font {
            family,
            size: self.size,
            scale_down_to: self.scale_down_to,
            weight,
            style,
            color,
        }
    }
}

impl<'de> Deserialize<'de> for FontSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct FontSpecFields {
            family: String,
            #[serde(default = "default_font_size", deserialize_with = "deserialize_length")]
            size: f32,
            #[serde(default = "default_scale_down_to", deserialize_with = "deserialize_length")]
            scale_down_to: f32,
            #[serde(default)]
            weight: FontWeight,
            #[serde(default)]
            style: FontStyle,
            #[serde(default)]
            color: Color,
            #[serde(default = "default_separator_color")]
            separator_color: Color,
            #[serde(default)]
            bold_family: Option<String>,
            #[serde(default)]
            italic_family: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontSpecDef {
            Shorthand(String),
            Full(FontSpecFields),
        }

        match FontSpecDef::deserialize(deserializer)? {
            FontSpecDef::Shorthand(s) => parse_font_shorthand(&s).map_err(de::Error::custom),
            FontSpecDef::Full(f) => Ok(FontSpec {
                family: f.family,
                size: f.size,
                scale_down_to: f.scale_down_to,
                weight: f.weight,
                style: f.style,
                color: f.color,
                separator_color: f.separator_color,
                bold_family: f.bold_family,
                italic_family: f.italic_family,
            }),
        }
    }
}

/// A fully resolved font: what a render context needs to measure and draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub scale_down_to: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color,
}

impl Font {
    pub fn is_bold(&self) -> bool {
        self.weight.numeric_value() >= FontWeight::Bold.numeric_value()
    }

    pub fn is_italic(&self) -> bool {
        self.style != FontStyle::Normal
    }

    /// How far text in this font may be scaled down, as a fraction of its size.
    pub fn min_scale(&self) -> f32 {
        self.size.min(self.scale_down_to) / self.size.max(0.01)
    }

    /// Granularity of scale steps: one point at the nominal size.
    pub fn scale_step(&self) -> f32 {
        1.0 / self.size.max(1.0)
    }
}
