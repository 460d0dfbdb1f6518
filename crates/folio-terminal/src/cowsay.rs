//! Cowsay ASCII art.

/// Message used when `cowsay` is given no text.
pub const DEFAULT_MESSAGE: &str = "Moo-ve along!";

const COW: &str = r"        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||";

/// Render `message` in a one-line speech bubble above the cow.
///
/// The bubble is `message` characters + 2 wide and never wraps.
pub fn render(message: &str) -> String {
    let width = message.chars().count() + 2;
    let mut out = String::with_capacity(4 * width + COW.len() + 16);
    out.push(' ');
    out.push_str(&"_".repeat(width));
    out.push_str(" \n");
    out.push_str(&format!("< {message} >\n"));
    out.push(' ');
    out.push_str(&"-".repeat(width));
    out.push_str(" \n");
    out.push_str(COW);
    out
}
