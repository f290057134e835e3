//! Line and column lookup for byte offsets.

/// Pre-computed line start offsets for O(log L) line/column lookup.
///
/// ```
/// use ye_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "ye x = 1;\nde x;";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 13), (2, 4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "sources are capped at u32::MAX bytes by Span"
    )]
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "line count cannot exceed the u32 byte count"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        match self.offsets.binary_search(&offset) {
            Ok(idx) => idx as u32 + 1,
            Err(idx) => idx as u32,
        }
    }

    /// 1-based `(line, column)`; columns count characters, not bytes.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "column cannot exceed the u32 byte count"
    )]
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets[(line - 1) as usize] as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(end - line_start, |s| s.chars().count());
        (line, col as u32 + 1)
    }

    /// Text of the 1-based `line`, without its trailing newline.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.offsets.get(idx)? as usize;
        let end = self
            .offsets
            .get(idx + 1)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(start..end)
            .map(|s| s.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
