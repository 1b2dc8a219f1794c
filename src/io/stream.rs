//! Sequential record streams feeding segment collider definitions.

use crate::error::StreamError;
use crate::math::vec2::Vec2;
use std::str::SplitWhitespace;

/// A source of typed records read in file order.
pub trait RecordStream {
    /// Reads one integer record.
    fn read_int(&mut self) -> Result<i64, StreamError>;

    /// Reads one floating-point record.
    fn read_float(&mut self) -> Result<f64, StreamError>;

    /// Reads a 2-component point as two consecutive float records.
    fn read_vec2(&mut self) -> Result<Vec2, StreamError> {
        let x = self.read_float()?;
        let y = self.read_float()?;
        Ok(Vec2::new(x, y))
    }
}

/// Whitespace separated text tokens, e.g. the contents of a level data file.
///
/// ```text
/// 2
/// 0 0   10 0
/// 10 0  10 10
/// ```
pub struct TextStream<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> TextStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, StreamError> {
        self.tokens.next().ok_or(StreamError::UnexpectedEnd { expected })
    }
}

impl RecordStream for TextStream<'_> {
    fn read_int(&mut self) -> Result<i64, StreamError> {
        let token = self.next_token("integer")?;
        token.parse().map_err(|_| StreamError::InvalidToken {
            token: token.to_string(),
            expected: "integer",
        })
    }

    fn read_float(&mut self) -> Result<f64, StreamError> {
        let token = self.next_token("float")?;
        token.parse().map_err(|_| StreamError::InvalidToken {
            token: token.to_string(),
            expected: "float",
        })
    }
}
