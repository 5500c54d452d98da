//! Platform path conventions.
//!
//! Path strings are handled textually so that both Unix and Windows
//! conventions can be exercised on any host without touching the
//! filesystem.

/// Path conventions of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPlatform {
    /// `/`-separated paths rooted at `/`.
    Unix,
    /// `\`-separated paths (also accepting `/`) rooted at a drive like `C:\`.
    Windows,
}

impl Default for PathPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl PathPlatform {
    /// The conventions of the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Canonical separator.
    pub fn separator(&self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates path components.
    pub fn is_separator(&self, c: char) -> bool {
        match self {
            Self::Unix => c == '/',
            Self::Windows => c == '\\' || c == '/',
        }
    }

    /// Split a leading drive letter (`C:`) off a path.
    ///
    /// Unix paths never carry a drive letter.
    pub fn split_drive_letter<'a>(&self, path: &'a str) -> (Option<char>, &'a str) {
        if *self == Self::Unix {
            return (None, path);
        }
        let mut chars = path.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => (Some(letter), &path[2..]),
            _ => (None, path),
        }
    }

    /// Whether `path` is absolute on this platform.
    pub fn is_absolute(&self, path: &str) -> bool {
        match self {
            Self::Unix => path.starts_with('/'),
            Self::Windows => {
                let (drive, rest) = self.split_drive_letter(path);
                drive.is_some() && rest.starts_with(|c| self.is_separator(c))
            }
        }
    }

    /// Whether `path` ends with two separators, e.g. `/tmp/sessions//`.
    pub fn has_double_trailing_separator(&self, path: &str) -> bool {
        let mut tail = path.chars().rev();
        matches!(
            (tail.next(), tail.next()),
            (Some(a), Some(b)) if self.is_separator(a) && self.is_separator(b)
        )
    }

    /// Make `path` absolute against `cwd` (itself absolute) and normalize it.
    pub fn absolutize(&self, path: &str, cwd: &str) -> String {
        if self.is_absolute(path) {
            return self.normalize(path);
        }
        if *self == Self::Windows {
            let (cwd_drive, _) = self.split_drive_letter(cwd);
            match self.split_drive_letter(path) {
                // Drive-relative (`C:tmp`): relative to the working directory
                // on the same drive, otherwise to that drive's root.
                (Some(letter), rest) => {
                    let anchor = match cwd_drive {
                        Some(d) if d.eq_ignore_ascii_case(&letter) => cwd.to_string(),
                        _ => format!("{}:", letter),
                    };
                    return self.normalize(&format!("{}{}{}", anchor, self.separator(), rest));
                }
                // Rooted without a drive: borrow the drive of the working directory.
                (None, _) if path.starts_with(|c| self.is_separator(c)) => {
                    if let Some(letter) = cwd_drive {
                        return self.normalize(&format!("{}:{}", letter, path));
                    }
                }
                (None, _) => {}
            }
        }
        self.normalize(&format!("{}{}{}", cwd, self.separator(), path))
    }

    /// Collapse `.`, `..` and redundant separators of an absolute path.
    ///
    /// `..` at the root stays at the root. Separators are rewritten to the
    /// canonical one and trailing separators are dropped.
    pub fn normalize(&self, path: &str) -> String {
        let (drive, rest) = self.split_drive_letter(path);
        let mut components: Vec<&str> = Vec::new();
        for part in rest.split(|c| self.is_separator(c)) {
            match part {
                "" | "." => {}
                ".." => {
                    components.pop();
                }
                other => components.push(other),
            }
        }

        let sep = self.separator();
        let mut out = String::with_capacity(path.len());
        if let Some(letter) = drive {
            out.push(letter);
            out.push(':');
        }
        out.push(sep);
        out.push_str(&components.join(&sep.to_string()));
        out
    }

    /// Join a file name onto a directory.
    pub fn join(&self, dir: &str, name: &str) -> String {
        if dir.ends_with(|c| self.is_separator(c)) {
            format!("{}{}", dir, name)
        } else {
            format!("{}{}{}", dir, self.separator(), name)
        }
    }

    /// Split a normalized absolute path into parent directory and basename.
    ///
    /// The root keeps its separator (`/`, `C:\`) and has an empty basename.
    pub fn split_parent<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        let root_len = match self.split_drive_letter(path) {
            (Some(_), _) => 3,
            (None, _) => 1,
        };
        match path.rfind(|c| self.is_separator(c)) {
            Some(idx) if idx < root_len => (&path[..root_len.min(path.len())], &path[idx + 1..]),
            Some(idx) => (&path[..idx], &path[idx + 1..]),
            None => ("", path),
        }
    }
}
