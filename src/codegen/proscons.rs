//! Pros/cons review panel — the second widget family. Static markup only:
//! no scripts, no update path, so compilation is a straight assembly of
//! header, two columns, conclusion, and button.

use crate::codegen::CompileOutput;
use crate::config::ProsConsConfig;
use crate::embed;
use crate::locale;

const THUMBS_UP: &str = concat!(
    r##"<svg style="width: 18px; height: 18px; margin-right: 8px;" fill="#16a34a" viewBox="0 0 20 20">"##,
    r#"<path d="M2 10.5a1.5 1.5 0 113 0v6a1.5 1.5 0 01-3 0v-6zM6 10.333v5.43a2 2 0 001.106 1.79l.05.025A4 4 0 008.943 18h5.416a2 2 0 001.962-1.608l1.2-6A2 2 0 0015.56 8H12V4a2 2 0 00-2-2 1 1 0 00-1 1v.667a4 4 0 01-.8 2.4L6.8 8.933a4 4 0 00-.8 2.4z"></path></svg>"#,
);

const THUMBS_DOWN: &str = concat!(
    r##"<svg style="width: 18px; height: 18px; margin-right: 8px;" fill="#dc2626" viewBox="0 0 20 20">"##,
    r#"<path d="M18 9.5a1.5 1.5 0 11-3 0v-6a1.5 1.5 0 013 0v6zM14 9.667v-5.43a2 2 0 00-1.105-1.79l-.05-.025A4 4 0 0011.055 2H5.64a2 2 0 00-1.962 1.608l-1.2 6A2 2 0 004.44 12H8v4a2 2 0 002 2 1 1 0 001-1v-.667a4 4 0 01.8-2.4l1.4-1.866a4 4 0 00.8-2.4z"></path></svg>"#,
);

pub fn compile(config: &ProsConsConfig) -> CompileOutput {
    let warnings = collect_warnings(config);
    let html = generate_html(config);
    let height = embed::estimate_pros_cons_height(config);
    let document = embed::wrap_document(&html, config.language);
    let iframe = embed::generate_pros_cons_iframe(config, &document, height);
    CompileOutput {
        html,
        iframe,
        document,
        height,
        warnings,
    }
}

pub fn generate_html(config: &ProsConsConfig) -> String {
    let t = locale::text(config.language);

    let image = if config.product_image.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"
    <img src="{src}" alt="{title}" style="width: 64px; height: 64px; border-radius: 8px; object-fit: cover; margin-right: 16px;">"#,
            src = config.product_image,
            title = config.product_title,
        )
    };

    let price = if config.show_price && !config.price.trim().is_empty() {
        format!(
            r#"
      <div style="font-size: 20px; font-weight: bold; color: {accent};">{price} {currency}</div>"#,
            accent = config.accent_color,
            price = config.price,
            currency = config.currency,
        )
    } else {
        String::new()
    };

    let conclusion = if config.conclusion.trim().is_empty() {
        String::new()
    } else {
        // accent + "1a" gives an 8-digit hex with ~10% alpha for the tint.
        format!(
            r#"
  <div style="margin-top: 16px; padding: 14px; background-color: {accent}1a; border-left: 4px solid {accent}; border-radius: 6px;">
    <p style="font-size: 14px; line-height: 1.6; margin: 0;">{conclusion}</p>
  </div>"#,
            accent = config.accent_color,
            conclusion = config.conclusion,
        )
    };

    let button = if config.button_link.trim().is_empty() {
        String::new()
    } else {
        let label = if config.button_text.trim().is_empty() {
            t.review_cta_default
        } else {
            config.button_text.as_str()
        };
        format!(
            r#"
  <a href="{link}" target="_blank" rel="noopener noreferrer" style="display: block; margin-top: 16px; background-color: {accent}; color: white; text-align: center; padding: 12px 24px; border-radius: 8px; font-size: 15px; font-weight: 600; text-decoration: none;">{label}</a>"#,
            link = config.button_link,
            accent = config.accent_color,
        )
    };

    format!(
        r#"<!-- Pros & Cons Widget -->
<div class="cta-proscons-{id}" style="background-color: {background}; color: {text_color}; max-width: 520px; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 20px;">
  <div style="display: flex; align-items: center; margin-bottom: 16px;">{image}
    <div>
      <h2 style="font-size: 18px; font-weight: bold; margin: 0 0 4px 0;">{title}</h2>{price}
    </div>
  </div>
  <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
    <div>
      <div style="display: flex; align-items: center; font-size: 14px; font-weight: 600; color: #16a34a; margin-bottom: 8px;">{thumbs_up}{pros_heading}</div>
      <ul style="list-style: none; padding: 0; margin: 0;">{pros}
      </ul>
    </div>
    <div>
      <div style="display: flex; align-items: center; font-size: 14px; font-weight: 600; color: #dc2626; margin-bottom: 8px;">{thumbs_down}{cons_heading}</div>
      <ul style="list-style: none; padding: 0; margin: 0;">{cons}
      </ul>
    </div>
  </div>{conclusion}{button}
</div>"#,
        id = config.id,
        background = config.background_color,
        text_color = config.text_color,
        title = config.product_title,
        thumbs_up = THUMBS_UP,
        pros_heading = t.pros_heading,
        thumbs_down = THUMBS_DOWN,
        cons_heading = t.cons_heading,
        pros = column_items(&config.pros, "#16a34a", "+"),
        cons = column_items(&config.cons, "#dc2626", "\u{2212}"),
    )
}

fn column_items(items: &[String], color: &str, marker: &str) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            r#"
        <li style="display: flex; align-items: flex-start; font-size: 13px; line-height: 1.5; margin-bottom: 6px;"><span style="color: {color}; font-weight: bold; margin-right: 6px;">{marker}</span>{item}</li>"#
        ));
    }
    out
}

fn collect_warnings(config: &ProsConsConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.product_title.trim().is_empty() {
        warnings.push("productTitle is empty".to_string());
    }
    if config.pros.is_empty() && config.cons.is_empty() {
        warnings.push("both pros and cons are empty".to_string());
    }
    if !config.button_text.trim().is_empty() && config.button_link.trim().is_empty() {
        warnings.push("buttonText is set but buttonLink is empty; the button is omitted".to_string());
    }
    warnings
}
