/// A read cursor over an encoded byte slice.
///
/// This is the transient state shared by one decode call: the input slice
/// and the current read position. The running coordinate accumulators live
/// in the streaming decoder that owns the cursor, not here.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Consume and return the next byte, or `None` at end of input.
    pub fn next(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// True once every byte of the input has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current read position, in bytes from the start of the input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_order() {
        let mut cursor = ByteCursor::new(&[1, 2, 3]);
        assert!(!cursor.is_empty());
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.next(), Some(3));
        assert!(cursor.is_empty());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn empty_input_is_empty() {
        let mut cursor = ByteCursor::new(&[]);
        assert!(cursor.is_empty());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.offset(), 0);
    }
}
