//! Compiler for embeddable affiliate widgets.
//!
//! Takes the JSON configuration records the configurator UI produces and
//! compiles them to self-contained HTML: a product-card widget (with an
//! iframe packaging and optional live-update scripts), a pros/cons review
//! panel, and styled text links. Generation is pure — the same record and
//! options always yield byte-identical markup, and nothing here touches
//! the network or the clock.

pub mod codegen;
pub mod config;
pub mod embed;
pub mod error;
pub mod format;
pub mod locale;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
mod wasm;

pub use codegen::textlink::TextLinkOutput;
pub use codegen::CompileOutput;
pub use config::{CompileOptions, ProsConsConfig, TextLinkConfig, WidgetConfig};
pub use error::{ConfigError, Result};

/// Compile a product-card widget from its JSON record.
pub fn compile_widget(json: &str, opts: &CompileOptions) -> Result<CompileOutput> {
    let config: WidgetConfig = serde_json::from_str(json)?;
    Ok(codegen::compile(&config, opts))
}

/// Compile a product-card widget straight from a JSON file on disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn compile_widget_file(
    path: &std::path::Path,
    opts: &CompileOptions,
) -> Result<CompileOutput> {
    let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    compile_widget(&json, opts)
}

/// Compile a pros/cons review panel from its JSON record.
pub fn compile_pros_cons(json: &str) -> Result<CompileOutput> {
    let config: ProsConsConfig = serde_json::from_str(json)?;
    Ok(codegen::proscons::compile(&config))
}

/// Compile a styled text link from its JSON record.
pub fn compile_text_link(json: &str) -> Result<TextLinkOutput> {
    let config: TextLinkConfig = serde_json::from_str(json)?;
    Ok(codegen::textlink::compile(&config))
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "demo-1",
        "productTitle": "Løbesko Pro",
        "productDescription": "Lette og åndbare.",
        "productImage": "https://example.com/sko.jpg",
        "originalPrice": "129,99",
        "discountedPrice": "89,99",
        "affiliateLink": "https://shop.example.com/sko",
        "language": "da",
        "usps": ["Fri fragt", "E-mærket certificeret"],
        "stockStatus": "inStock"
    }"#;

    #[test]
    fn same_record_compiles_identically() {
        let opts = CompileOptions::default();
        let a = compile_widget(RECORD, &opts).unwrap();
        let b = compile_widget(RECORD, &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn full_record_exercises_every_section() {
        let out = compile_widget(RECORD, &CompileOptions::default()).unwrap();
        assert!(out.warnings.is_empty(), "warnings: {:?}", out.warnings);
        assert!(out.html.contains("Løbesko Pro"));
        assert!(out.html.contains("-31%"));
        assert!(out.html.contains("Du sparer 40,00 kr."));
        assert!(out.html.contains("På lager"));
        assert!(out.iframe.starts_with("<iframe"));
        assert!(out.document.starts_with("<!DOCTYPE html>"));
        assert_eq!(out.height, 350 + 60 + 20 + 20);
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        let err = compile_widget("{not json", &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("invalid widget config"));
    }

    #[test]
    fn empty_record_still_compiles() {
        let out = compile_widget("{}", &CompileOptions::default()).unwrap();
        assert!(!out.html.is_empty());
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn pros_cons_from_json() {
        let out = compile_pros_cons(
            r#"{"id":"r1","productTitle":"Sko","pros":["Let"],"cons":["Dyr"],"language":"da"}"#,
        )
        .unwrap();
        assert!(out.html.contains("Fordele"));
        assert_eq!(out.height, 400 + 60);
    }

    #[test]
    fn text_link_from_json() {
        let out = compile_text_link(
            r#"{"id":"l1","linkText":"Se pris","affiliateLink":"https://example.com","style":"glow"}"#,
        )
        .unwrap();
        assert!(out.html.contains("text-shadow"));
        assert!(out.warnings.is_empty());
    }
}
