use std::fmt;

use serde::{Deserialize, Serialize};

pub const WHATSAPP_BASE: &str = "https://wa.me";

/// Click-to-chat URL handed to the host environment to open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl DeepLink {
    /// Builds `<base>/<address>?text=<percent-encoded message>`.
    pub fn whatsapp(base: &str, address: &str, message: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self(format!("{base}/{address}?text={}", urlencoding::encode(message)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeepLink, WHATSAPP_BASE};

    #[test]
    fn encodes_message_into_text_parameter() {
        let link = DeepLink::whatsapp(WHATSAPP_BASE, "254759591200", "2x Bananas - Ksh 158.00\nTotal: Ksh 158.00");

        assert_eq!(
            link.as_str(),
            "https://wa.me/254759591200?text=2x%20Bananas%20-%20Ksh%20158.00%0ATotal%3A%20Ksh%20158.00"
        );
    }

    #[test]
    fn tolerates_trailing_slash_on_base() {
        let link = DeepLink::whatsapp("https://wa.me/", "254706828718", "hi");

        assert_eq!(link.to_string(), "https://wa.me/254706828718?text=hi");
    }

    #[test]
    fn encodes_reserved_and_non_ascii_characters() {
        let link = DeepLink::whatsapp(WHATSAPP_BASE, "1", "a&b=c 🛒");

        assert_eq!(link.as_str(), "https://wa.me/1?text=a%26b%3Dc%20%F0%9F%9B%92");
    }
}
