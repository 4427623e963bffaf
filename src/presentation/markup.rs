use std::fmt;

/// HTML that templates insert without escaping.
///
/// Wrapping a string in `TrustedMarkup` asserts that it is safe; it does not
/// make it safe. Whoever calls [`TrustedMarkup::trust`] is responsible for the
/// contents not being attacker-controlled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Declare `html` trusted. No sanitization happens here.
    pub fn trust(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<a href="{href}">{label}</a>`, trusted as-is
pub fn anchor(href: &str, label: &str) -> TrustedMarkup {
    TrustedMarkup::trust(format!("<a href=\"{}\">{}</a>", href, label))
}
