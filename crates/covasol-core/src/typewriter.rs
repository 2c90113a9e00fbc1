/// Reveals a string one character per tick.
#[derive(Debug, Clone)]
pub struct TypeWriter {
    text: String,
    end: usize,
}

impl TypeWriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end: 0,
        }
    }

    /// Extend the typed prefix by one character and return it, or `None` once
    /// the whole text is shown.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.end..].chars().next()?;
        self.end += next.len_utf8();
        Some(&self.text[..self.end])
    }

    pub fn is_done(&self) -> bool {
        self.end >= self.text.len()
    }
}

/// Tick interval from a `data-typewriter` attribute value.
pub fn parse_speed_ms(attr: Option<&str>, default_ms: u32) -> u32 {
    attr.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_each_prefix_once_then_stops() {
        let mut tw = TypeWriter::new("Sea");
        assert_eq!(tw.advance(), Some("S"));
        assert_eq!(tw.advance(), Some("Se"));
        assert_eq!(tw.advance(), Some("Sea"));
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn multibyte_characters() {
        let mut tw = TypeWriter::new("né🌊");
        assert_eq!(tw.advance(), Some("n"));
        assert_eq!(tw.advance(), Some("né"));
        assert_eq!(tw.advance(), Some("né🌊"));
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn empty_text_is_done() {
        let mut tw = TypeWriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn speed_attribute() {
        assert_eq!(parse_speed_ms(Some("80"), 50), 80);
        assert_eq!(parse_speed_ms(Some(" 30 "), 50), 30);
        assert_eq!(parse_speed_ms(Some(""), 50), 50);
        assert_eq!(parse_speed_ms(Some("fast"), 50), 50);
        assert_eq!(parse_speed_ms(Some("0"), 50), 50);
        assert_eq!(parse_speed_ms(None, 50), 50);
    }
}
