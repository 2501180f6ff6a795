//! Cross-cutting guarantees of the generated markup: determinism, id
//! scoping, locale switching, and the iframe packaging invariants.

use cta_compiler::config::{CompileOptions, Language, StockStatus, WidgetConfig};
use cta_compiler::embed;

fn config_with_everything(id: &str) -> WidgetConfig {
    WidgetConfig {
        id: id.to_string(),
        product_title: "Espressomaskine X200".into(),
        product_description: "Professionel espresso derhjemme.".into(),
        product_image: "https://example.com/x200.jpg".into(),
        original_price: "3499,00".into(),
        discounted_price: "2799,00".into(),
        cta_text: "Køb med rabat".into(),
        affiliate_link: "https://shop.example.com/espresso?aff=1".into(),
        usps: vec!["Fri fragt".into(), "E-mærket certificeret".into()],
        custom_usps: vec!["2 års garanti".into()],
        show_shipping_countdown: true,
        show_apple_pay: true,
        show_google_pay: true,
        show_mobile_pay: true,
        stock_status: StockStatus::InStock,
        show_testimonial: true,
        testimonial_text: "Bedste maskine jeg har ejet.".into(),
        testimonial_name: "Mette H.".into(),
        last_modified: Some("2026-08-01T09:30:00.000Z".into()),
        ..WidgetConfig::default()
    }
}

#[test]
fn output_is_a_pure_function_of_the_input() {
    let config = config_with_everything("p1");
    let opts = CompileOptions {
        auto_update: true,
        ..CompileOptions::default()
    };
    let runs: Vec<_> = (0..3)
        .map(|_| cta_compiler::codegen::compile(&config, &opts))
        .collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn every_scoped_identifier_carries_the_widget_id() {
    let config = config_with_everything("scope-7");
    let out = cta_compiler::codegen::compile(&config, &CompileOptions::default());
    for class in [
        "cta-widget-scope-7",
        "cta-title-scope-7",
        "cta-desc-scope-7",
        "cta-image-scope-7",
        "cta-link-scope-7",
        "cta-original-scope-7",
        "cta-price-scope-7",
        "cta-badge-scope-7",
        "countdown-timer-scope-7",
        "pulse-scope-7",
    ] {
        assert!(out.html.contains(class), "missing {class}");
    }
    assert!(out.iframe.contains("cta-frame-scope-7"));
}

#[test]
fn two_widgets_never_share_scoped_names() {
    let opts = CompileOptions::default();
    let a = cta_compiler::codegen::compile(&config_with_everything("a"), &opts);
    let b = cta_compiler::codegen::compile(&config_with_everything("b"), &opts);
    assert!(a.html.contains("pulse-a") && !a.html.contains("pulse-b"));
    assert!(b.html.contains("pulse-b") && !b.html.contains("pulse-a"));
}

#[test]
fn language_switches_every_baked_string() {
    let mut config = config_with_everything("lang");
    config.cta_text = String::new();
    config.testimonial_name = String::new();

    config.language = Language::Da;
    let da = cta_compiler::codegen::compile(&config, &CompileOptions::default()).html;
    assert!(da.contains("Køb nu"));
    assert!(da.contains("Afsendes i dag, hvis du bestiller inden"));
    assert!(da.contains("Tilfreds kunde"));

    config.language = Language::No;
    let no = cta_compiler::codegen::compile(&config, &CompileOptions::default()).html;
    assert!(no.contains("Kjøp nå"));
    assert!(no.contains("Sendes i dag hvis du bestiller før"));
    assert!(no.contains("Fornøyd kunde"));

    // unsupported language renders the Norwegian branch
    config.language = Language::En;
    let en = cta_compiler::codegen::compile(&config, &CompileOptions::default()).html;
    assert!(en.contains("Kjøp nå"));
}

#[test]
fn iframe_height_matches_reported_height() {
    let config = config_with_everything("h");
    let out = cta_compiler::codegen::compile(&config, &CompileOptions::default());
    assert!(out.iframe.contains(&format!("height: {}px", out.height)));
}

#[test]
fn iframe_data_uri_decodes_to_the_framed_document() {
    // percent-decode the src and confirm the document survived the trip
    let config = config_with_everything("rt");
    let out = cta_compiler::codegen::compile(&config, &CompileOptions::default());

    let start = out.iframe.find("data:text/html;charset=utf-8,").unwrap()
        + "data:text/html;charset=utf-8,".len();
    let end = start + out.iframe[start..].find('"').unwrap();
    let decoded = percent_decode(&out.iframe[start..end]);

    assert!(decoded.starts_with("<!DOCTYPE html>"));
    assert!(decoded.contains("Espressomaskine X200"));
    assert!(decoded.contains("cta-widget-rt"));
}

#[test]
fn encode_decode_roundtrips_arbitrary_markup() {
    let sample = r##"<div style="x: 1;">æøå "quoted" & 50% #tag</div>"##;
    assert_eq!(percent_decode(&embed::encode_uri_component(sample)), sample);
}

#[test]
fn static_output_never_mentions_the_record_store() {
    // without auto-update the markup must not poll anything
    let config = config_with_everything("s");
    let out = cta_compiler::codegen::compile(&config, &CompileOptions::default());
    assert!(!out.html.contains("widgetHistory"));
    assert!(!out.iframe.contains("postMessage"));
    // the click tracker is always present
    assert!(out.html.contains("widgetClicks"));
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
            out.push(u8::from_str_radix(hex, 16).unwrap());
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap()
}
