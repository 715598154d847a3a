//! Manifesto copy and text layout helpers
//!
//! The words live here once; the page, the `print` command, and the layout
//! math all read from these constants.

use unicode_width::UnicodeWidthStr;

pub const COMPANY: &str = "THE CHENNAI COMPUTE COMPANY";

pub const HERO_TAGLINE: &str = "A manifesto";

pub const GREETING: &str = "To the Future,";

/// One entry per reveal step
pub const MANIFESTO: [&str; 6] = [
    "We are The Chennai Compute Company.",
    "We believe compute is the fundamental force shaping tomorrow. Every breakthrough begins with computational power.",
    "From Chennai, we're building India's AI revolution. Intelligence amplified, not replaced.",
    "We pursue relentless optimization. Every algorithm improved. Every system more efficient.",
    "Ethics guide our design. Transparency drives our innovation. Open source accelerates our progress.",
    "The computational future is being written today.",
];

pub const FOOTER_HEADING: &str = "Power the Future with GPUs";

pub const FOOTER_QUOTE: &str = "\"Powering innovation through scalable GPU infrastructure. We provide the computational backbone for tomorrow's breakthroughs.\"";

pub const FOOTER_LOCATION: &str = "crafted at 13.0827° N, 80.2707° E";

pub const SIGNUP_PROMPT: &str = "Join the waitlist";

/// Greedy word wrap to `width` display columns.
///
/// Words wider than the line are placed on their own line rather than
/// split. A zero width yields one line per word.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Plain-text rendition of the whole page
pub fn plain_text(width: usize) -> String {
    let mut out = String::new();
    out.push_str(COMPANY);
    out.push('\n');
    out.push_str(HERO_TAGLINE);
    out.push_str("\n\n");
    out.push_str(GREETING);
    out.push_str("\n\n");
    for paragraph in MANIFESTO {
        for line in wrap(paragraph, width) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(FOOTER_HEADING);
    out.push_str("\n\n");
    for line in wrap(FOOTER_QUOTE, width) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(COMPANY);
    out.push_str("\n\n");
    out.push_str(FOOTER_LOCATION);
    out.push('\n');
    out
}
