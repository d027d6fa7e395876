use unicode_width::UnicodeWidthStr;

/// Greedy word-wrap at `width` display columns.
///
/// Text that already fits is returned untouched. Otherwise words are packed
/// onto lines separated by single spaces; a word is never split, so a word
/// wider than `width` sits alone on its own line.
pub fn wrap(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let w = word.width();
        if line.is_empty() {
            line.push_str(word);
            line_width = w;
        } else if line_width + 1 + w <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + w;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = w;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
