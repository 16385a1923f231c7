use unicode_segmentation::UnicodeSegmentation;

/// Clamp a byte offset to `text` and move it back to a char boundary.
pub(crate) fn snap(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Byte offset of the grapheme boundary before `offset`.
pub(crate) fn prev_boundary(text: &str, offset: usize) -> usize {
    UnicodeSegmentation::grapheme_indices(&text[..offset], true)
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `offset`.
pub(crate) fn next_boundary(text: &str, offset: usize) -> usize {
    UnicodeSegmentation::graphemes(&text[offset..], true)
        .next()
        .map(|g| offset + g.len())
        .unwrap_or(text.len())
}

/// Byte offset where the line containing `offset` starts.
pub(crate) fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map(|idx| idx + 1).unwrap_or(0)
}

/// Byte offset where the line containing `offset` ends, before its `\n`.
pub(crate) fn line_end(text: &str, offset: usize) -> usize {
    text[offset..]
        .find('\n')
        .map(|idx| offset + idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_moves_into_char_boundary() {
        let text = "aé";
        assert_eq!(snap(text, 2), 1);
        assert_eq!(snap(text, 3), 3);
        assert_eq!(snap(text, 99), 3);
    }

    #[test]
    fn boundaries_step_over_clusters() {
        // "e" + combining acute accent is one cluster
        let text = "ae\u{301}b";
        assert_eq!(next_boundary(text, 1), 4);
        assert_eq!(prev_boundary(text, 4), 1);
        assert_eq!(prev_boundary(text, 0), 0);
        assert_eq!(next_boundary(text, text.len()), text.len());
    }

    #[test]
    fn lines() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_start(text, 5), 4);
        assert_eq!(line_end(text, 5), 7);
        assert_eq!(line_start(text, 2), 0);
        assert_eq!(line_end(text, 9), text.len());
    }
}
