static ENVIRONMENTS: phf::Map<&'static str, Env> = phf::phf_map! {
    "array" => Env::Array,
    "matrix" => Env::Matrix,
    "pmatrix" => Env::PMatrix,
    "bmatrix" => Env::BMatrix,
    "Bmatrix" => Env::Bmatrix,
    "vmatrix" => Env::VMatrix,
    "Vmatrix" => Env::Vmatrix,
    "cases" => Env::Cases,
    "aligned" => Env::Aligned,
    "smallmatrix" => Env::SmallMatrix,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Array,
    Matrix,
    PMatrix,
    BMatrix,
    Bmatrix,
    VMatrix,
    Vmatrix,
    Cases,
    Aligned,
    SmallMatrix,
}

impl Env {
    pub(crate) fn from_str(s: &str) -> Option<Self> {
        ENVIRONMENTS.get(s).copied()
    }

    pub fn as_str(&self) -> &'static str {
        ENVIRONMENTS
            .entries()
            .find_map(|(k, v)| if v == self { Some(*k) } else { None })
            .unwrap_or("unknown")
    }

    /// Whether the environment takes a column specification like `{c|l}`.
    #[inline]
    pub(crate) fn needs_column_spec(&self) -> bool {
        matches!(self, Env::Array)
    }

    /// The delimiters that surround the whole environment.
    pub(crate) fn delimiters(&self) -> (Option<char>, Option<char>) {
        match self {
            Env::PMatrix => (Some('('), Some(')')),
            Env::BMatrix => (Some('['), Some(']')),
            Env::Bmatrix => (Some('{'), Some('}')),
            Env::VMatrix => (Some('∣'), Some('∣')),
            Env::Vmatrix => (Some('∥'), Some('∥')),
            Env::Cases => (Some('{'), None),
            Env::Array | Env::Matrix | Env::Aligned | Env::SmallMatrix => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Env;

    #[test]
    fn names_round_trip() {
        for name in ["array", "pmatrix", "Bmatrix", "Vmatrix", "smallmatrix"] {
            assert_eq!(Env::from_str(name).unwrap().as_str(), name);
        }
        assert!(Env::from_str("align").is_none());
    }

    #[test]
    fn delimiters() {
        assert_eq!(Env::Cases.delimiters(), (Some('{'), None));
        assert_eq!(Env::Matrix.delimiters(), (None, None));
    }
}
