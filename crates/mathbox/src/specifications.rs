//! Functions for parsing specifications in commands and environments.

/// A unit of length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    Em,
    Ex,
    Mu,
    Pt,
    Mm,
    Cm,
    In,
    Bp,
    Pc,
    Dd,
    Cc,
    Px,
}

impl Unit {
    fn from_str(s: &str) -> Option<Unit> {
        Some(match s {
            "em" => Unit::Em,
            "ex" => Unit::Ex,
            "mu" => Unit::Mu,
            "pt" => Unit::Pt,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            "bp" => Unit::Bp,
            "pc" => Unit::Pc,
            "dd" => Unit::Dd,
            "cc" => Unit::Cc,
            "px" => Unit::Px,
            _ => return None,
        })
    }

    /// TeX points per unit, for the absolute units.
    pub fn pt_per_unit(self) -> Option<f64> {
        match self {
            Unit::Pt => Some(1.0),
            Unit::Mm => Some(7227.0 / 2540.0),
            Unit::Cm => Some(7227.0 / 254.0),
            Unit::In => Some(72.27),
            Unit::Bp | Unit::Px => Some(803.0 / 800.0),
            Unit::Pc => Some(12.0),
            Unit::Dd => Some(1238.0 / 1157.0),
            Unit::Cc => Some(14856.0 / 1157.0),
            Unit::Em | Unit::Ex | Unit::Mu => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

/// Parse a length like `1.5em`, `-3mu` or `.5 pt`.
pub(crate) fn parse_length_specification(s: &str) -> Result<Length, ()> {
    let s = s.trim();
    let len = s.len();
    // We need at least 2 characters to have a unit.
    let Some(unit_offset) = len.checked_sub(2) else {
        return Err(());
    };
    // This can fail if `unit_offset` is not a valid UTF-8 boundary.
    let Some((digits, unit)) = s.split_at_checked(unit_offset) else {
        return Err(());
    };
    let unit = Unit::from_str(unit).ok_or(())?;
    let digits = digits.trim_end();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    let value = digits.parse::<f64>().map_err(|_| ())?;
    if !value.is_finite() {
        return Err(());
    }
    Ok(Length { value, unit })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSpec {
    Align(ColumnAlign),
    /// A vertical rule, `|`.
    Separator,
}

/// Parse the column specification of an `array`, e.g. `c|ll`.
pub(crate) fn parse_column_specification(s: &str) -> Result<Vec<ColumnSpec>, ()> {
    let mut columns = Vec::with_capacity(s.len());
    for ch in s.chars() {
        columns.push(match ch {
            'l' => ColumnSpec::Align(ColumnAlign::Left),
            'c' => ColumnSpec::Align(ColumnAlign::Center),
            'r' => ColumnSpec::Align(ColumnAlign::Right),
            '|' => ColumnSpec::Separator,
            ch if ch.is_whitespace() => continue,
            _ => return Err(()),
        });
    }
    if !columns
        .iter()
        .any(|col| matches!(col, ColumnSpec::Align(_)))
    {
        return Err(());
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(
            parse_length_specification("1.5em"),
            Ok(Length {
                value: 1.5,
                unit: Unit::Em
            })
        );
        assert_eq!(
            parse_length_specification(" -3 mu"),
            Ok(Length {
                value: -3.0,
                unit: Unit::Mu
            })
        );
        assert_eq!(
            parse_length_specification(".5pt"),
            Ok(Length {
                value: 0.5,
                unit: Unit::Pt
            })
        );
        assert_eq!(parse_length_specification("+2cm").unwrap().unit, Unit::Cm);
    }

    #[test]
    fn invalid_lengths() {
        assert!(parse_length_specification("").is_err());
        assert!(parse_length_specification("em").is_err());
        assert!(parse_length_specification("em3").is_err());
        assert!(parse_length_specification("3furlongs").is_err());
        assert!(parse_length_specification("1.2.3em").is_err());
        assert!(parse_length_specification("3é").is_err());
    }

    #[test]
    fn absolute_units() {
        assert_eq!(Unit::Pt.pt_per_unit(), Some(1.0));
        assert_eq!(Unit::Pc.pt_per_unit(), Some(12.0));
        assert_eq!(Unit::Em.pt_per_unit(), None);
    }

    #[test]
    fn column_specs() {
        use ColumnAlign::*;
        assert_eq!(
            parse_column_specification("c|l r"),
            Ok(vec![
                ColumnSpec::Align(Center),
                ColumnSpec::Separator,
                ColumnSpec::Align(Left),
                ColumnSpec::Align(Right),
            ])
        );
        assert!(parse_column_specification("cx").is_err());
        assert!(parse_column_specification("||").is_err());
    }
}
