#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

/// Line index over a JSON document, for mapping parser positions to byte
/// offsets and back.
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_offsets: Vec<usize>,
    len: usize,
}

impl SourceMap {
    pub fn from_source(source: &str) -> Self {
        let mut line_offsets = vec![0];
        for (idx, ch) in source.char_indices() {
            if ch == '\n' {
                line_offsets.push(idx + 1);
            }
        }
        Self {
            line_offsets,
            len: source.len(),
        }
    }

    pub fn byte_to_pos(&self, byte: usize) -> SourcePos {
        let line_idx = match self.line_offsets.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_offsets.get(line_idx).copied().unwrap_or(0);
        SourcePos {
            line: line_idx + 1,
            col: byte.saturating_sub(line_start) + 1,
        }
    }

    /// Inverse of [`SourceMap::byte_to_pos`], clamped to the source length.
    /// Line and column are 1-based; column 0 is treated as column 1.
    pub fn pos_to_byte(&self, pos: SourcePos) -> usize {
        let line_idx = pos.line.saturating_sub(1).min(self.line_offsets.len() - 1);
        let line_start = self.line_offsets[line_idx];
        (line_start + pos.col.saturating_sub(1)).min(self.len)
    }
}
