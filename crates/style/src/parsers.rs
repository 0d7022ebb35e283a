//! Low-level nom parser functions for style values.
//!
//! This module provides composable parser functions for lengths and the
//! font shorthand accepted in text style files.

use crate::font::{FontSpec, FontStyle, FontWeight};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, map, opt, rest, value};
use nom::multi::many0;
use nom::number::complete::float;
use nom::sequence::{delimited, terminated};
use nom::{IResult, Parser};
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    map((float, opt(parse_unit)), |(v, unit): (f32, Option<f32>)| {
        v * unit.unwrap_or(1.0)
    })
    .parse(input)
}

/// Parses a complete length string, allowing surrounding whitespace.
pub fn parse_length_value(s: &str) -> Result<f32, StyleParseError> {
    all_consuming(delimited(space0, parse_length, space0))
        .parse(s)
        .map(|(_, v)| v)
        .map_err(|e| StyleParseError::Parse(e.to_string()))
}

/// Serde helper: a length given either as a number or as a string with a unit.
pub fn deserialize_length<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LengthDef {
        Num(f32),
        Str(String),
    }

    match LengthDef::deserialize(deserializer)? {
        LengthDef::Num(n) => Ok(n),
        LengthDef::Str(s) => parse_length_value(&s).map_err(de::Error::custom),
    }
}

// --- Font Shorthand ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FontFlag {
    Bold,
    Italic,
}

fn font_flag(input: &str) -> IResult<&str, FontFlag> {
    terminated(
        alt((
            value(FontFlag::Bold, tag_no_case("bold")),
            value(FontFlag::Italic, tag_no_case("italic")),
        )),
        space1,
    )
    .parse(input)
}

fn font_shorthand(input: &str) -> IResult<&str, (Vec<FontFlag>, f32, &str)> {
    (
        delimited(space0, many0(font_flag), space0),
        terminated(parse_length, space1),
        rest,
    )
        .parse(input)
}

/// Parses `"[bold] [italic] <size> <family>"`, e.g. `"bold 10pt MPlantin"`.
pub fn parse_font_shorthand(input: &str) -> Result<FontSpec, StyleParseError> {
    let (_, (flags, size, family)) =
        font_shorthand(input).map_err(|e| StyleParseError::Parse(e.to_string()))?;
    let family = family.trim();
    if family.is_empty() {
        return Err(StyleParseError::InvalidValue {
            property: "font".to_string(),
            value: input.to_string(),
        });
    }
    let mut spec = FontSpec::new(family, size);
    for flag in flags {
        match flag {
            FontFlag::Bold => spec.weight = FontWeight::Bold,
            FontFlag::Italic => spec.style = FontStyle::Italic,
        }
    }
    Ok(spec)
}
