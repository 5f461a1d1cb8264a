//! Code fence tracking, so `:::` inside fenced code is left alone.

/// Tracks whether line-by-line processing is inside a fenced code block.
///
/// A fence opens with three or more backticks or tildes and closes with a
/// line of at least as many of the same character.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some(first) = trimmed.chars().next() else {
            return false;
        };
        if first != '`' && first != '~' {
            return false;
        }
        let run = trimmed.chars().take_while(|&c| c == first).count();

        match self.open {
            Some((ch, len)) => {
                let closes =
                    first == ch && run >= len && trimmed[run..].chars().all(char::is_whitespace);
                if closes {
                    self.open = None;
                }
                closes
            }
            None if run >= 3 => {
                self.open = Some((first, run));
                true
            }
            None => false,
        }
    }
}
