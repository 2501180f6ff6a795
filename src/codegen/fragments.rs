//! Fragment generators — one per optional feature. Each is a total
//! function of the configuration returning an HTML fragment, with the
//! empty string as the normal "feature off" result. Every generator
//! re-checks its own preconditions instead of trusting the flag alone,
//! so an inconsistent record still compiles to clean markup.

use crate::config::{StockStatus, WidgetConfig};
use crate::format;
use crate::locale;

// Fixed asset URLs carried over from the hosted configurator.
pub const FALLBACK_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop";
const APPLE_PAY_ICON: &str =
    "https://quest-media-storage-bucket.s3.us-east-2.amazonaws.com/1753650976581-apple%20pay.jpg";
const GOOGLE_PAY_ICON: &str =
    "https://quest-media-storage-bucket.s3.us-east-2.amazonaws.com/1753650984809-google%20pay.png";
const MOBILEPAY_ICON: &str =
    "https://quest-media-storage-bucket.s3.us-east-2.amazonaws.com/1753650992093-mobilepay.webp";
const EMAERKET_BADGE: &str =
    "https://quest-media-storage-bucket.s3.us-east-2.amazonaws.com/1753650222793-e-markerket.jpg";
const TRYGHEDSMAERKET_BADGE: &str =
    "https://quest-media-storage-bucket.s3.us-east-2.amazonaws.com/1753650227304-tryghedsmaerket.png";

/// Absolute-positioned "-NN%" ribbon over the image region. Emitted only
/// for a strictly positive discount.
pub fn discount_ribbon(config: &WidgetConfig) -> String {
    let percent = format::discount_percent(&config.original_price, &config.discounted_price);
    if percent <= 0 {
        return String::new();
    }
    format!(
        r#"
    <div class="cta-badge-{id}" style="position: absolute; top: 8px; right: 8px; background-color: #ef4444; color: white; padding: 4px 8px; border-radius: 20px; font-size: 12px; font-weight: bold;">-{percent}%</div>"#,
        id = config.id,
    )
}

/// Colored dot plus locale label, with a pulsing animation whose keyframe
/// name is scoped by the widget id so stacked embeds don't redeclare each
/// other's animation.
pub fn stock_status(config: &WidgetConfig) -> String {
    let t = locale::text(config.language);
    let (color, label) = match config.stock_status {
        StockStatus::None => return String::new(),
        StockStatus::InStock => ("#22c55e", t.in_stock),
        StockStatus::LowStock => ("#f59e0b", t.low_stock),
    };
    format!(
        r#"
      <div style="display: flex; align-items: center;">
        <div style="width: 10px; height: 10px; border-radius: 50%; background-color: {color}; margin-right: 6px; animation: pulse-{id} 2s infinite;"></div>
        <span style="font-size: 14px; font-weight: 500; color: {color};">{label}</span>
      </div>
      <style>
        @keyframes pulse-{id} {{
          0% {{ opacity: 1; }}
          50% {{ opacity: 0.5; }}
          100% {{ opacity: 1; }}
        }}
      </style>"#,
        id = config.id,
    )
}

/// Zero to three payment logos, fixed order: Apple Pay, Google Pay,
/// MobilePay.
pub fn payment_icons(config: &WidgetConfig) -> String {
    if !config.has_payment_icons() {
        return String::new();
    }
    let mut icons = String::new();
    for (enabled, src, alt) in [
        (config.show_apple_pay, APPLE_PAY_ICON, "Apple Pay"),
        (config.show_google_pay, GOOGLE_PAY_ICON, "Google Pay"),
        (config.show_mobile_pay, MOBILEPAY_ICON, "MobilePay"),
    ] {
        if enabled {
            icons.push_str(&format!(
                r#"
      <img src="{src}" alt="{alt}" style="height: 24px; object-fit: contain;">"#
            ));
        }
    }
    format!(
        r#"
    <div style="display: flex; justify-content: center; align-items: center; gap: 12px; margin-top: 12px;">{icons}
    </div>"#
    )
}

/// Default avatar shown when no testimonial image is supplied, or when the
/// supplied one fails to load in the embedding page.
fn default_avatar() -> String {
    concat!(
        r#"<div style="width: 40px; height: 40px; border-radius: 50%; background-color: #60a5fa; "#,
        r#"display: flex; align-items: center; justify-content: center; color: white;">"#,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" "#,
        r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
        r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path><circle cx="12" cy="7" r="4"></circle></svg></div>"#,
    )
    .to_string()
}

/// Quoted customer testimonial with avatar. Absent unless the flag is set
/// and the quote text is non-empty.
pub fn testimonial(config: &WidgetConfig) -> String {
    if !config.show_testimonial || config.testimonial_text.trim().is_empty() {
        return String::new();
    }
    let t = locale::text(config.language);
    let name = if config.testimonial_name.trim().is_empty() {
        t.testimonial_fallback
    } else {
        config.testimonial_name.as_str()
    };

    let avatar = if config.testimonial_image.trim().is_empty() {
        default_avatar()
    } else {
        // The onerror payload swaps the broken <img> for the default
        // avatar markup; quotes are entity-escaped to survive the
        // attribute, apostrophes escaped for the JS string.
        let fallback = default_avatar()
            .replace('"', "&quot;")
            .replace('\'', "\\'");
        format!(
            r#"<img src="{src}" alt="{name}" style="width: 40px; height: 40px; border-radius: 50%; object-fit: cover;" onerror="this.onerror=null; this.outerHTML='{fallback}'">"#,
            src = config.testimonial_image,
        )
    };

    format!(
        r#"
    <div style="margin-bottom: 16px; padding: 12px; background-color: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px;">
      <div style="display: flex; align-items: flex-start; gap: 12px;">
        {avatar}
        <div>
          <p style="font-size: 14px; font-style: italic; color: #374151; margin: 0 0 4px 0;">"{quote}"</p>
          <p style="font-size: 12px; font-weight: 600; color: #111827; margin: 0;">{name}</p>
        </div>
      </div>
    </div>"#,
        quote = config.testimonial_text,
    )
}

/// Shipping cutoff banner plus the inline countdown script. The script
/// runs in the embedding page: the timer element id is suffixed with the
/// widget id and every lookup is null-guarded, since the host DOM is not
/// under this system's control.
pub fn shipping_countdown(config: &WidgetConfig) -> String {
    if !config.show_shipping_countdown {
        return String::new();
    }
    let t = locale::text(config.language);
    let deadline = if config.shipping_deadline.trim().is_empty() {
        "15:00"
    } else {
        config.shipping_deadline.as_str()
    };

    format!(
        r#"
    <div style="margin-bottom: 16px; padding: 12px; background-color: #fef3c7; border: 1px solid #f59e0b; border-radius: 6px; text-align: center;">
      <div style="display: flex; align-items: center; justify-content: center; font-size: 13px; color: #92400e; margin-bottom: 4px;">
        <svg style="width: 16px; height: 16px; margin-right: 8px; color: #d97706;" fill="currentColor" viewBox="0 0 20 20">
          <path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm1-12a1 1 0 10-2 0v4a1 1 0 00.293.707l2.828 2.829a1 1 0 101.415-1.415L11 9.586V6z" clip-rule="evenodd"></path>
        </svg>
        <span style="font-weight: 500;">{prefix}</span>
      </div>
      <div id="countdown-timer-{id}" style="font-size: 18px; font-weight: bold; color: #78350f; text-align: center;"></div>
    </div>
    <script>
    (function() {{
      function updateCountdown() {{
        var el = document.getElementById('countdown-timer-{id}');
        if (!el) return;
        var now = new Date();
        var parts = '{deadline}'.split(':');
        var target = new Date();
        target.setHours(parseInt(parts[0], 10) || 0, parseInt(parts[1], 10) || 0, 0, 0);
        if (now > target) {{
          target.setDate(target.getDate() + 1);
        }}
        var diff = target.getTime() - now.getTime();
        if (diff > 0) {{
          var h = Math.floor(diff / 3600000);
          var m = Math.floor((diff % 3600000) / 60000);
          var s = Math.floor((diff % 60000) / 1000);
          el.textContent = String(h).padStart(2, '0') + ':' + String(m).padStart(2, '0') + ':' + String(s).padStart(2, '0');
        }} else {{
          el.textContent = '00:00:00';
        }}
      }}
      updateCountdown();
      setInterval(updateCountdown, 1000);
    }})();
    </script>"#,
        prefix = t.shipping_prefix,
        id = config.id,
    )
}

/// Recognized certification seals: entries containing these substrings
/// render the seal image instead of the generic checkmark.
fn trust_badge_icon(usp: &str) -> Option<&'static str> {
    if usp.contains("E-mærket") {
        Some(EMAERKET_BADGE)
    } else if usp.contains("Tryghedsmærket") {
        Some(TRYGHEDSMAERKET_BADGE)
    } else {
        None
    }
}

/// Order-preserving USP list below the CTA button.
pub fn usp_list(config: &WidgetConfig) -> String {
    if config.usps.is_empty() {
        return String::new();
    }
    let mut items = String::new();
    for usp in &config.usps {
        let icon = match trust_badge_icon(usp) {
            Some(src) => format!(
                r#"<img src="{src}" style="width: 16px; height: 16px; margin-right: 8px; object-fit: contain;" alt="{usp}">"#
            ),
            None => concat!(
                r#"<svg style="width: 16px; height: 16px; margin-right: 8px; color: #22c55e;" fill="currentColor" viewBox="0 0 20 20">"#,
                r#"<path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd"></path></svg>"#,
            )
            .to_string(),
        };
        items.push_str(&format!(
            r#"
        <li style="display: flex; align-items: center; font-size: 13px; margin-bottom: 6px;">{icon}{usp}</li>"#
        ));
    }
    format!(
        r#"
    <div style="margin-top: 16px; padding-top: 12px; border-top: 1px solid rgba(0,0,0,0.1);">
      <ul style="list-style: none; padding: 0; margin: 0;">{items}
      </ul>
    </div>"#
    )
}

/// Product description with the custom USPs folded in, one per line with
/// a checkmark prefix. `line_break` is `"<br>"` for generated markup and
/// `"\n"` for plain-text consumers (the live preview), producing
/// textually identical content either way.
pub fn enhanced_description(config: &WidgetConfig, line_break: &str) -> String {
    let description = config.product_description.trim();
    if config.custom_usps.is_empty() {
        return description.to_string();
    }
    let usp_lines = config
        .custom_usps
        .iter()
        .map(|usp| format!("\u{2713} {usp}"))
        .collect::<Vec<_>>()
        .join(line_break);
    if description.is_empty() {
        usp_lines
    } else {
        format!("{description}{line_break}{line_break}{usp_lines}")
    }
}
