use std::fmt::Write;

// Unreserved set of the JS component encoder, which the site relied on.
const UNESCAPED: &str = "-_.!~*'()";

pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || UNESCAPED.contains(byte as char) {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

// wa.me expects the number with country code, no `+` or spaces
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", encode_component(message))
}

pub fn telegram_url(username: &str, message: &str) -> String {
    format!("https://t.me/{username}?text={}", encode_component(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_matches_component_rules() {
        assert_eq!(encode_component("abc123"), "abc123");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("hi!"), "hi!");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("ü"), "%C3%BC");
    }

    #[test]
    fn deep_links_carry_encoded_text() {
        assert_eq!(
            whatsapp_url("918709922877", "Hi Kaif!"),
            "https://wa.me/918709922877?text=Hi%20Kaif!"
        );
        assert_eq!(
            telegram_url("kaifxed", "a b"),
            "https://t.me/kaifxed?text=a%20b"
        );
    }
}
