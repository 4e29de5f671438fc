/// Byte-level reader over a URL path.
pub struct Cursor<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte position in the path.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advance one byte and return it.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.source.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn walks_bytes_and_tracks_position() {
        let mut cursor = Cursor::new("a/");
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.advance(), Some(b'/'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), 2);
    }
}
