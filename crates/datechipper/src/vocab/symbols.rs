//! # Reserved Markers and Decoded Symbols

use core::fmt;

/// Reserved vocabulary entries appended after the character range.
///
/// Marker tokens are always resolved to their final integer index before
/// they are embedded in an encoded sequence; they only surface in symbolic
/// form again after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Stand-in for any character outside the known vocabulary.
    Unknown,

    /// Right-fill for sequences shorter than the target length.
    Padding,
}

impl fmt::Display for Marker {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Marker::Unknown => write!(f, "<unk>"),
            Marker::Padding => write!(f, "<pad>"),
        }
    }
}

/// What a single vocabulary index decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A corpus character.
    Char(char),

    /// A reserved marker.
    Marker(Marker),
}

impl Symbol {
    /// The corpus character, if this symbol is one.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(*c),
            Symbol::Marker(_) => None,
        }
    }

    /// Returns true for the padding marker.
    pub fn is_padding(&self) -> bool {
        matches!(self, Symbol::Marker(Marker::Padding))
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl From<Marker> for Symbol {
    fn from(marker: Marker) -> Self {
        Symbol::Marker(marker)
    }
}

impl fmt::Display for Symbol {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Marker(marker) => write!(f, "{marker}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::Unknown.to_string(), "<unk>");
        assert_eq!(Marker::Padding.to_string(), "<pad>");
    }

    #[test]
    fn test_symbol_accessors() {
        assert_eq!(Symbol::Char('x').as_char(), Some('x'));
        assert_eq!(Symbol::Marker(Marker::Unknown).as_char(), None);

        assert!(Symbol::Marker(Marker::Padding).is_padding());
        assert!(!Symbol::Char('p').is_padding());

        assert_eq!(Symbol::from('7').to_string(), "7");
        assert_eq!(Symbol::from(Marker::Padding).to_string(), "<pad>");
    }

    #[test]
    fn test_marker_serde() {
        let json = serde_json::to_string(&[Marker::Unknown, Marker::Padding]).unwrap();
        assert_eq!(json, r#"["unknown","padding"]"#);

        let back: Vec<Marker> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Marker::Unknown, Marker::Padding]);
    }
}
