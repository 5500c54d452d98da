//! Escaping of session paths for command interpolation.
//!
//! A resolved path is kept unescaped; it is escaped only at the moment it is
//! interpolated into a command string handed to the session store.

/// Characters prefixed with a backslash by [`escape`].
pub const SPECIAL_CHARS: &[char] = &[
    ' ', '\t', '#', '%', '|', '"', '\'', '!', '*', '?', '[', '{', '$', '`', '<', '>', '&',
    ';', '(', ')',
];

/// Escape `path` so it survives interpolation into an editor or shell command.
pub fn escape(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);
    for c in path.chars() {
        if SPECIAL_CHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Undo [`escape`]: a backslash followed by a special character yields that
/// character. Other backslashes are kept, so Windows separators survive.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if SPECIAL_CHARS.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Split a command line into words on unescaped whitespace, unescaping each
/// word.
pub fn split_escaped(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                in_word = true;
                match chars.peek() {
                    Some(&next) if SPECIAL_CHARS.contains(&next) => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_hash_percent_and_whitespace() {
        assert_eq!(escape("/tmp/my session#1%"), "/tmp/my\\ session\\#1\\%");
        assert_eq!(escape("/tmp/a\tb"), "/tmp/a\\\tb");
    }

    #[test]
    fn line_breaks_are_not_escaped() {
        // `\<newline>` is a line continuation under `sh -c`; such paths are
        // rejected during resolution instead.
        assert!(!SPECIAL_CHARS.contains(&'\n'));
        assert_eq!(escape("a\nb"), "a\nb");
    }

    #[test]
    fn leaves_plain_paths_untouched() {
        assert_eq!(escape("/x/y/s1"), "/x/y/s1");
        assert_eq!(escape("C:\\work\\s1"), "C:\\work\\s1");
    }

    #[test]
    fn escapes_absolute_mode_file_names() {
        assert_eq!(
            escape("/tmp/sessions/%home%user%proj/session"),
            "/tmp/sessions/\\%home\\%user\\%proj/session"
        );
    }

    #[test]
    fn unescape_reverses_escape() {
        let path = "/tmp/it's a #weird% (path)";
        assert_eq!(unescape(&escape(path)), path);
    }

    #[test]
    fn unescape_keeps_windows_separators() {
        assert_eq!(unescape("C:\\work\\s1"), "C:\\work\\s1");
    }

    #[test]
    fn split_escaped_honors_escaped_spaces() {
        assert_eq!(
            split_escaped("save  /tmp/my\\ session --no-autosave"),
            vec!["save", "/tmp/my session", "--no-autosave"]
        );
    }

    #[test]
    fn split_escaped_empty_line() {
        assert!(split_escaped("   ").is_empty());
    }
}
