use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

static NAMED_COLORS: phf::Map<&'static str, Rgb> = phf::phf_map! {
    "black" => Rgb::new(0x00, 0x00, 0x00),
    "white" => Rgb::new(0xff, 0xff, 0xff),
    "red" => Rgb::new(0xff, 0x00, 0x00),
    "green" => Rgb::new(0x00, 0x80, 0x00),
    "blue" => Rgb::new(0x00, 0x00, 0xff),
    "cyan" => Rgb::new(0x00, 0xff, 0xff),
    "magenta" => Rgb::new(0xff, 0x00, 0xff),
    "yellow" => Rgb::new(0xff, 0xff, 0x00),
    "orange" => Rgb::new(0xff, 0xa5, 0x00),
    "purple" => Rgb::new(0x80, 0x00, 0x80),
    "violet" => Rgb::new(0xee, 0x82, 0xee),
    "brown" => Rgb::new(0xa5, 0x2a, 0x2a),
    "gray" => Rgb::new(0x80, 0x80, 0x80),
    "grey" => Rgb::new(0x80, 0x80, 0x80),
    "lightgray" => Rgb::new(0xd3, 0xd3, 0xd3),
    "darkgray" => Rgb::new(0xa9, 0xa9, 0xa9),
    "pink" => Rgb::new(0xff, 0xc0, 0xcb),
    "lime" => Rgb::new(0x00, 0xff, 0x00),
    "olive" => Rgb::new(0x80, 0x80, 0x00),
    "teal" => Rgb::new(0x00, 0x80, 0x80),
    "navy" => Rgb::new(0x00, 0x00, 0x80),
    "maroon" => Rgb::new(0x80, 0x00, 0x00),
    "gold" => Rgb::new(0xff, 0xd7, 0x00),
};

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse a color name or a hex specification (`#rgb`, `#rrggbb`, or the same without `#`).
    pub fn parse(spec: &str) -> Option<Rgb> {
        let spec = spec.trim();
        if let Some(color) = NAMED_COLORS.get(spec) {
            return Some(*color);
        }
        let hex = spec.strip_prefix('#').unwrap_or(spec);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut digits = hex.bytes().map(hex_value);
                let (r, g, b) = (digits.next()?, digits.next()?, digits.next()?);
                Some(Rgb::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    pub fn append_as_hex(&self, output: &mut String) {
        let _ = write!(output, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
    }
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}
