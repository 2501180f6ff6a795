//! Widget markup assembly. `compile` takes one configuration snapshot and
//! produces every output format in a single pass; the fragment generators
//! in [`fragments`] contribute the optional sections and [`scripts`] the
//! inline behavior.

pub mod fragments;
pub mod proscons;
pub mod scripts;
pub mod textlink;


use crate::config::{CompileOptions, WidgetConfig};
use crate::embed;
use crate::format;
use crate::locale;

/// Everything one compilation produces. Warnings are advisory — output is
/// always generated, however degenerate the input.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    /// Markup for pasting directly into a host page.
    pub html: String,
    /// `<iframe>` snippet with the whole widget packed into a `data:` URI.
    pub iframe: String,
    /// Standalone HTML document (preview files, `build` output).
    pub document: String,
    /// Pixel height estimated for the iframe variant.
    pub height: u32,
    pub warnings: Vec<String>,
}

pub fn compile(config: &WidgetConfig, opts: &CompileOptions) -> CompileOutput {
    let warnings = collect_warnings(config);
    let html = generate_widget_html(config, opts);
    let height = embed::estimate_height(config);

    // The framed copy gets the message listener instead of the storage
    // poller: a data: document has an opaque origin and cannot see the
    // host's localStorage, so updates arrive by postMessage.
    let mut framed = widget_body(config);
    if opts.auto_update {
        framed.push_str(&scripts::frame_update_listener(config));
    }
    let framed_doc = embed::wrap_document(&framed, config.language);

    let mut iframe = embed::generate_iframe(config, &framed_doc, height);
    if opts.auto_update {
        iframe.push_str(&scripts::parent_bridge(config, opts));
    }

    CompileOutput {
        document: embed::wrap_document(&html, config.language),
        html,
        iframe,
        height,
        warnings,
    }
}

/// Embeddable widget markup: the static body plus the auto-update poller
/// when requested.
pub fn generate_widget_html(config: &WidgetConfig, opts: &CompileOptions) -> String {
    let mut html = widget_body(config);
    if opts.auto_update {
        html.push_str(&scripts::auto_updater(config, opts));
    }
    html
}

/// Static markup plus the click tracker. Section order is fixed; disabled
/// features contribute empty strings, so toggling a feature never moves
/// the sections around it.
fn widget_body(config: &WidgetConfig) -> String {
    let t = locale::text(config.language);

    let image_src = if config.product_image.trim().is_empty() {
        fragments::FALLBACK_PRODUCT_IMAGE
    } else {
        config.product_image.as_str()
    };

    let cta_text = if config.cta_text.trim().is_empty() {
        t.cta_default
    } else {
        config.cta_text.as_str()
    };

    let body = format!(
        r#"<!-- CTA Widget -->
<div class="cta-widget-{id}" style="background-color: {background}; color: {text_color}; max-width: 420px; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; overflow: hidden;">
  <div style="position: relative;">
    <img class="cta-image-{id}" src="{image_src}" alt="{title}" style="width: 100%; height: 200px; object-fit: cover; display: block;" onerror="this.onerror=null; this.src='{fallback_image}'">{discount_ribbon}
  </div>
  <div style="padding: 16px;">
    <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
      <h2 class="cta-title-{id}" style="font-size: 18px; font-weight: bold; margin: 0;">{title}</h2>{stock_status}
    </div>
    <p class="cta-desc-{id}" style="font-size: 14px; line-height: 1.5; margin: 0 0 16px 0; opacity: 0.85;">{description}</p>{price_row}{testimonial}{shipping_countdown}
    <a class="cta-link-{id}" href="{affiliate_link}" target="_blank" rel="noopener noreferrer" style="display: block; background-color: {button_color}; color: white; text-align: center; padding: 12px 24px; border-radius: 8px; font-size: 16px; font-weight: 600; text-decoration: none; transition: opacity 0.2s;" onmouseover="this.style.opacity='0.85'" onmouseout="this.style.opacity='1'">{cta_text}</a>{payment_icons}{usp_list}
  </div>
</div>"#,
        id = config.id,
        background = config.background_color,
        text_color = config.text_color,
        image_src = image_src,
        fallback_image = fragments::FALLBACK_PRODUCT_IMAGE,
        title = config.product_title,
        discount_ribbon = fragments::discount_ribbon(config),
        stock_status = fragments::stock_status(config),
        description = fragments::enhanced_description(config, "<br>"),
        price_row = price_row(config),
        testimonial = fragments::testimonial(config),
        shipping_countdown = fragments::shipping_countdown(config),
        affiliate_link = config.affiliate_link,
        button_color = config.button_color,
        cta_text = cta_text,
        payment_icons = fragments::payment_icons(config),
        usp_list = fragments::usp_list(config),
    );

    format!("{body}{tracker}", tracker = scripts::click_tracker(config))
}

/// Price block above the CTA. With an active discount: struck-through
/// original next to the bold discounted price, then the savings line.
/// Otherwise a single bold price — discounted if present, else original,
/// else nothing.
fn price_row(config: &WidgetConfig) -> String {
    let t = locale::text(config.language);
    let savings = format::savings_amount(&config.original_price, &config.discounted_price);

    if let Some(amount) = savings {
        return format!(
            r#"
    <div style="margin-bottom: 16px;">
      <div style="display: flex; align-items: baseline; gap: 8px;">
        <span class="cta-original-{id}" style="font-size: 14px; text-decoration: line-through; opacity: 0.6;">{original}</span>
        <span class="cta-price-{id}" style="font-size: 22px; font-weight: bold;">{discounted}</span>
      </div>
      <div style="font-size: 13px; color: #16a34a; font-weight: 600;">{savings_prefix} {amount} kr.</div>
    </div>"#,
            id = config.id,
            original = format::format_price(&config.original_price),
            discounted = format::format_price(&config.discounted_price),
            savings_prefix = t.savings_prefix,
        );
    }

    let single = if !config.discounted_price.trim().is_empty() {
        format::format_price(&config.discounted_price)
    } else {
        format::format_price(&config.original_price)
    };
    if single.is_empty() {
        return String::new();
    }
    format!(
        r#"
    <div style="margin-bottom: 16px;">
      <span class="cta-price-{id}" style="font-size: 22px; font-weight: bold;">{single}</span>
    </div>"#,
        id = config.id,
    )
}

/// Advisory lint pass over the configuration. Never blocks compilation.
pub fn collect_warnings(config: &WidgetConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.product_title.trim().is_empty() {
        warnings.push("productTitle is empty".to_string());
    }
    if config.affiliate_link.trim().is_empty() {
        warnings.push("affiliateLink is empty; the CTA button will go nowhere".to_string());
    }
    if config.product_image.trim().is_empty() {
        warnings.push("productImage is empty; using the stock fallback image".to_string());
    }
    if config.show_testimonial && config.testimonial_text.trim().is_empty() {
        warnings.push(
            "showTestimonial is set but testimonialText is empty; the testimonial is omitted"
                .to_string(),
        );
    }
    if config.show_shipping_countdown
        && !config.shipping_deadline.trim().is_empty()
        && !is_hhmm(&config.shipping_deadline)
    {
        warnings.push(format!(
            "shippingDeadline '{}' is not HH:MM; the countdown may misbehave",
            config.shipping_deadline
        ));
    }
    if !config.original_price.trim().is_empty()
        && !config.discounted_price.trim().is_empty()
        && format::savings_amount(&config.original_price, &config.discounted_price).is_none()
    {
        warnings.push(
            "discountedPrice is not below originalPrice; no discount will be shown".to_string(),
        );
    }

    warnings
}

fn is_hhmm(s: &str) -> bool {
    let mut parts = s.trim().split(':');
    let (Some(h), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let (Ok(h), Ok(m)) = (h.parse::<u32>(), m.parse::<u32>()) else {
        return false;
    };
    h < 24 && m < 60
}
