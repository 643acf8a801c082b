//! Colors in the `rgb` color model.

use std::fmt;

use super::ValueError;

/// A color value.
///
/// Channel colors are stored in the unit interval and written as an inline
/// `rgb` color expression, braced so the commas and semicolons inside do not
/// split the surrounding option list:
///
/// ```
/// # use tikzplot::value::Color;
/// let color = Color::rgb(1.0, 0.5, 0.0).unwrap();
/// assert_eq!(color.to_string(), "{rgb,1:red,1;green,0.5;blue,0}");
///
/// let named = Color::named("blue!50!black");
/// assert_eq!(named.to_string(), "blue!50!black");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// Three channels in `[0, 1]`
    Rgb { red: f64, green: f64, blue: f64 },
    /// A precomputed color spec, written verbatim
    Spec(String),
}

impl Color {
    /// Create a color from three unit-interval channels.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Result<Self, ValueError> {
        for (channel, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValueError::InvalidColorChannel { channel, value });
            }
        }
        Ok(Color::Rgb { red, green, blue })
    }

    /// Create a color from 8-bit channels.
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }

    /// Create a color from a channel slice, which must hold exactly three entries.
    pub fn from_channels(channels: &[f64]) -> Result<Self, ValueError> {
        match channels {
            [red, green, blue] => Color::rgb(*red, *green, *blue),
            _ => Err(ValueError::InvalidColorArity {
                got: channels.len(),
            }),
        }
    }

    /// Create a color from a named color or mixing expression such as `red!30`.
    pub fn named(spec: impl Into<String>) -> Self {
        Color::Spec(spec.into())
    }

    pub fn write(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Color::Rgb { red, green, blue } => write!(
                sink,
                "{{rgb,1:red,{};green,{};blue,{}}}",
                channel(*red),
                channel(*green),
                channel(*blue)
            ),
            Color::Spec(spec) => sink.write_str(spec),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

/// Four decimal places with trailing zeros dropped.
fn channel(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
