//! Container directive trait.

use super::DirectiveArgs;

/// Handler for container directives: `:::name` ... `:::`.
///
/// `open` returns the markup replacing the opening line, or `None` to leave
/// the directive untouched. `close` is only called after a matching `open`
/// returned `Some`. Markup is raw HTML placed on its own lines, so markdown
/// between the two markers is still rendered as markdown.
pub trait ContainerDirective: Send {
    /// Directive name matched against `:::name`.
    fn name(&self) -> &str;

    /// Opening markup for `:::name[label]{attrs}` found on `line`.
    fn open(&mut self, args: DirectiveArgs, line: usize) -> Option<String>;

    /// Closing markup for the matching `:::`.
    fn close(&mut self, line: usize) -> String;
}
