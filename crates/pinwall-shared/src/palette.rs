//! Board colour palette.
//!
//! Colours are presentation tokens: the core never interprets them, it only
//! resolves a palette name to the background / text token pair that the
//! presentation layer understands, and passes anything else through.

/// A named background/text token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
}

pub const PALETTE: [Swatch; 6] = [
    Swatch { name: "sky", color: "bg-sky-100", text_color: "text-sky-800" },
    Swatch { name: "purple", color: "bg-purple-100", text_color: "text-purple-800" },
    Swatch { name: "pink", color: "bg-pink-100", text_color: "text-pink-800" },
    Swatch { name: "yellow", color: "bg-yellow-100", text_color: "text-yellow-800" },
    Swatch { name: "green", color: "bg-green-100", text_color: "text-green-800" },
    Swatch { name: "orange", color: "bg-orange-100", text_color: "text-orange-800" },
];

/// The swatch new boards get when the caller does not pick one.
pub fn default_swatch() -> Swatch {
    PALETTE[0]
}

/// Look up a swatch by name (case-insensitive) or by its background token.
pub fn lookup(token: &str) -> Option<Swatch> {
    let token = token.trim();
    PALETTE
        .iter()
        .copied()
        .find(|s| s.name.eq_ignore_ascii_case(token) || s.color == token)
}

/// Resolve a colour token into `(color, text_color)`.
///
/// Unknown tokens are opaque: they are kept verbatim as the background and
/// get no text colour.
pub fn resolve(token: &str) -> (String, String) {
    match lookup(token) {
        Some(s) => (s.color.to_string(), s.text_color.to_string()),
        None => (token.to_string(), String::new()),
    }
}
