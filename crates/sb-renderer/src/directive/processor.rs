//! Line-based container directive preprocessing.

use super::ContainerDirective;
use super::fence::FenceTracker;
use super::parser::{ContainerLine, parse_container_line};

/// Expands container directives in markdown before it is parsed.
///
/// Directives inside fenced code blocks are left alone. Unknown directives
/// pass through unchanged. Unbalanced markers produce warnings rather than
/// errors.
#[derive(Default)]
pub struct DirectiveProcessor {
    handlers: Vec<Box<dyn ContainerDirective>>,
    /// Handler index of each open container, innermost last.
    open: Vec<usize>,
    warnings: Vec<String>,
}

impl DirectiveProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container directive handler.
    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Expand directives in `input`. Line endings are preserved.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() + 256);
        let mut fence = FenceTracker::new();

        for (idx, line) in input.split_inclusive('\n').enumerate() {
            let (text, newline) = match line.strip_suffix('\n') {
                Some(text) => (text, "\n"),
                None => (line, ""),
            };

            fence.update(text);
            if fence.in_fence() {
                output.push_str(line);
                continue;
            }

            match parse_container_line(text) {
                Some(marker) => output.push_str(&self.dispatch(marker, text, idx + 1)),
                None => output.push_str(text),
            }
            output.push_str(newline);
        }

        for idx in self.open.drain(..) {
            self.warnings.push(format!(
                "unclosed container directive :::{} (missing closing :::)",
                self.handlers[idx].name()
            ));
        }

        output
    }

    fn dispatch(&mut self, marker: ContainerLine, text: &str, line: usize) -> String {
        match marker {
            ContainerLine::Open { name, args } => {
                let Some(idx) = self.handlers.iter().position(|h| h.name() == name) else {
                    return text.to_owned();
                };
                match self.handlers[idx].open(args, line) {
                    Some(html) => {
                        self.open.push(idx);
                        html
                    }
                    None => text.to_owned(),
                }
            }
            ContainerLine::Close { .. } => match self.open.pop() {
                Some(idx) => self.handlers[idx].close(line),
                None => {
                    self.warnings
                        .push(format!("line {line}: stray ::: with no opening directive"));
                    text.to_owned()
                }
            },
        }
    }

    /// Warnings collected by [`process`](Self::process).
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
