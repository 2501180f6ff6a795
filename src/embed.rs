//! Iframe packaging: wraps generated markup in a minimal document, packs
//! it into a `data:` URI, and sizes the frame with a content-based height
//! heuristic (a `data:` frame cannot be measured from the host page).

use crate::config::{ProsConsConfig, WidgetConfig};
use crate::format;

/// Percent-encode with `encodeURIComponent`'s unreserved set, so the
/// browser decodes the `data:` URI back to the exact document. Notably
/// spaces become `%20`, never `+`.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                const HEX: &[u8; 16] = b"0123456789ABCDEF";
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

/// Minimal standalone document around a widget body. The reset keeps the
/// frame's own margins from shifting the heuristic height.
pub fn wrap_document(body: &str, language: crate::config::Language) -> String {
    let lang: String = language.into();
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>html, body {{ margin: 0; padding: 0; background: transparent; }}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Frame height for a product-card widget. Additive per enabled feature,
/// mirroring what each section actually renders (a testimonial flag with
/// no text adds nothing, matching the omitted fragment).
pub fn estimate_height(config: &WidgetConfig) -> u32 {
    let mut height: u32 = 350;
    height += 30 * config.usps.len() as u32;
    height += 20 * config.custom_usps.len() as u32;
    if config.show_shipping_countdown {
        height += 80;
    }
    if config.show_testimonial && !config.testimonial_text.trim().is_empty() {
        height += 100;
    }
    if config.has_payment_icons() {
        height += 40;
    }
    if config.stock_status != crate::config::StockStatus::None {
        height += 20;
    }
    if format::savings_amount(&config.original_price, &config.discounted_price).is_some() {
        height += 20;
    }
    height
}

/// Frame height for a pros/cons panel.
pub fn estimate_pros_cons_height(config: &ProsConsConfig) -> u32 {
    let mut height: u32 = 400;
    height += 30 * config.pros.len() as u32;
    height += 30 * config.cons.len() as u32;
    if !config.conclusion.trim().is_empty() {
        height += 100;
    }
    height
}

/// `<iframe>` snippet carrying the whole document in its `src`. The id is
/// stable and scoped by the widget id so the update bridge can find the
/// frame later.
pub fn generate_iframe(config: &WidgetConfig, document: &str, height: u32) -> String {
    iframe_tag(
        &format!("cta-frame-{}", config.id),
        document,
        height,
        420,
        &config.product_title,
    )
}

pub fn generate_pros_cons_iframe(config: &ProsConsConfig, document: &str, height: u32) -> String {
    iframe_tag(
        &format!("cta-frame-{}", config.id),
        document,
        height,
        520,
        &config.product_title,
    )
}

fn iframe_tag(id: &str, document: &str, height: u32, max_width: u32, title: &str) -> String {
    format!(
        r#"<iframe id="{id}" src="data:text/html;charset=utf-8,{src}" style="width: 100%; max-width: {max_width}px; height: {height}px; border: none; display: block;" scrolling="no" title="{title}" loading="lazy"></iframe>"#,
        src = encode_uri_component(document),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Language, StockStatus};

    #[test]
    fn encoding_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("<div>"), "%3Cdiv%3E");
        assert_eq!(encode_uri_component("50%"), "50%25");
        // UTF-8 bytes, not code points
        assert_eq!(encode_uri_component("æ"), "%C3%A6");
    }

    #[test]
    fn wrapped_document_carries_lang_and_body() {
        let doc = wrap_document("<p>hej</p>", Language::Da);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="da">"#));
        assert!(doc.contains("<p>hej</p>"));
    }

    #[test]
    fn height_grows_with_features() {
        let mut config = WidgetConfig::default();
        let base = estimate_height(&config);
        assert_eq!(base, 350);

        config.usps = vec!["a".into(), "b".into()];
        config.show_shipping_countdown = true;
        config.stock_status = StockStatus::InStock;
        let grown = estimate_height(&config);
        assert_eq!(grown, 350 + 60 + 80 + 20);
        assert!(grown > base);
    }

    #[test]
    fn testimonial_without_text_adds_nothing() {
        let mut config = WidgetConfig::default();
        config.show_testimonial = true;
        assert_eq!(estimate_height(&config), 350);
        config.testimonial_text = "Fantastisk".into();
        assert_eq!(estimate_height(&config), 450);
    }

    #[test]
    fn iframe_src_is_a_data_uri() {
        let config = WidgetConfig {
            id: "w1".into(),
            product_title: "Sko".into(),
            ..WidgetConfig::default()
        };
        let doc = wrap_document("<div>x</div>", Language::Da);
        let tag = generate_iframe(&config, &doc, 350);
        assert!(tag.contains(r#"id="cta-frame-w1""#));
        assert!(tag.contains("src=\"data:text/html;charset=utf-8,"));
        assert!(tag.contains("height: 350px"));
        assert!(!tag.contains("<!DOCTYPE"), "document must be encoded");
    }
}
