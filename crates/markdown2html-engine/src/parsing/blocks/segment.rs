use super::kinds::CodeFence;

/// Normalizes raw input before segmentation.
///
/// Line endings become `\n`, tabs expand to `tab_length` columns and
/// whitespace-only lines become empty. A `tab_length` of zero counts as one.
pub fn normalize(text: &str, tab_length: usize) -> String {
    let tab_length = tab_length.max(1);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.trim().is_empty() {
            continue;
        }
        expand_tabs_into(&mut out, line, tab_length);
    }
    out
}

fn expand_tabs_into(out: &mut String, line: &str, tab_length: usize) {
    let mut col = 0;
    for c in line.chars() {
        if c == '\t' {
            let n = tab_length - col % tab_length;
            out.extend(std::iter::repeat_n(' ', n));
            col += n;
        } else {
            out.push(c);
            col += 1;
        }
    }
}

/// Splits normalized text into blocks separated by blank lines.
///
/// With `fenced_blocks`, a fence opener starts a new block that runs to its
/// closing fence (or end of input), blank lines included.
pub fn split_blocks(text: &str, fenced_blocks: bool) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];
    let mut fence = None;

    for line in text.split('\n') {
        if let Some(open) = &fence {
            current.push(line);
            if CodeFence::closes(open, line) {
                fence = None;
                flush(&mut blocks, &mut current);
            }
            continue;
        }

        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
            continue;
        }

        if fenced_blocks && let Some(open) = CodeFence::open(line) {
            flush(&mut blocks, &mut current);
            current.push(line);
            fence = Some(open);
            continue;
        }

        current.push(line);
    }

    flush(&mut blocks, &mut current);
    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        blocks.push(current.join("\n"));
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_line_endings_and_blank_lines() {
        assert_eq!(normalize("a\r\nb\r   \nc", 4), "a\nb\n\nc");
    }

    #[test]
    fn expands_tabs_to_next_stop() {
        assert_eq!(normalize("\tx", 4), "    x");
        assert_eq!(normalize("ab\tx", 4), "ab  x");
    }

    #[test]
    fn zero_tab_length_expands_to_one_column() {
        assert_eq!(normalize("\tx\ta", 0), " x a");
    }

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(
            split_blocks("a\nb\n\n\nc\n", false),
            vec!["a\nb".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(split_blocks("", false).is_empty());
        assert!(split_blocks("\n\n", true).is_empty());
    }

    #[test]
    fn fence_keeps_blank_lines() {
        let blocks = split_blocks("intro\n```\na\n\nb\n```\nafter", true);
        assert_eq!(blocks, vec!["intro", "```\na\n\nb\n```", "after"]);
    }

    #[test]
    fn fences_split_normally_when_disabled() {
        let blocks = split_blocks("```\na\n\nb\n```", false);
        assert_eq!(blocks, vec!["```\na", "b\n```"]);
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let blocks = split_blocks("~~~\na\n\nb", true);
        assert_eq!(blocks, vec!["~~~\na\n\nb"]);
    }
}
