//! Styled affiliate text links. One visual style plus optional hover
//! animation, optional container (headline, product image, background,
//! border), and UTM tagging. HTML-only: a text link has no iframe form.
//!
//! Element ids and keyframe names derive from the config id, so the same
//! record always compiles to the same markup.

use crate::config::{LinkAnimation, LinkStyle, TextLinkConfig};
use crate::embed;
use crate::locale;

const EXTERNAL_ICON: &str = concat!(
    r#"<svg style="width: 1em; height: 1em; margin-left: 0.3em;" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>"#,
    r#"<polyline points="15 3 21 3 21 9"></polyline>"#,
    r#"<line x1="10" y1="14" x2="21" y2="3"></line></svg>"#,
);

/// Image placeholder substituted when the configured product image fails
/// to load in the host page.
const IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/60";

#[derive(Debug, Clone, PartialEq)]
pub struct TextLinkOutput {
    pub html: String,
    pub warnings: Vec<String>,
}

pub fn compile(config: &TextLinkConfig) -> TextLinkOutput {
    TextLinkOutput {
        html: generate_html(config),
        warnings: collect_warnings(config),
    }
}

pub fn generate_html(config: &TextLinkConfig) -> String {
    let element_id = format!("affiliate-link-{}", config.id);
    let has_container = config.show_background || config.show_product_image || config.show_headline;
    // With a container, decoration moves off the link onto the wrapper.
    let bare = !config.show_product_image && !config.show_headline;

    let mut link_styles = format!(
        "color: {color}; font-size: {size}px; text-decoration: {deco}; font-weight: {weight}; \
         transition: all 0.3s ease; display: inline-flex; align-items: center; position: relative; cursor: pointer; ",
        color = config.text_color,
        size = config.font_size,
        deco = if config.underline { "underline" } else { "none" },
        weight = config.font_weight.css(),
    );
    if bare {
        if config.show_background {
            link_styles.push_str(&format!("background-color: {}; ", config.background_color));
        }
        if config.show_border {
            link_styles.push_str(&format!("border: 1px solid {}; ", config.border_color));
        }
        if config.padding > 0 {
            link_styles.push_str(&format!("padding: {}px; ", config.padding));
        }
        if config.show_background || config.show_border {
            link_styles.push_str(&format!("border-radius: {}px; ", config.border_radius));
        }
    }

    // Style variants override the underline setting inline; a rule in a
    // <style> block would lose to the inline declaration.
    match config.style {
        LinkStyle::Default => {}
        LinkStyle::UnderlineGrow | LinkStyle::ArrowAnimation => {
            link_styles.push_str("text-decoration: none; ");
        }
        LinkStyle::HighlightExpand => {
            link_styles.push_str("text-decoration: none; position: relative; z-index: 1; ");
        }
        LinkStyle::Glow => {
            link_styles.push_str(
                "text-decoration: none; text-shadow: 0 0 0 transparent; transition: text-shadow 0.3s ease; ",
            );
        }
        LinkStyle::Button => {
            link_styles.push_str(&format!(
                "text-decoration: none; padding: 6px 12px; border-radius: 4px; background-color: {}; color: white; transition: background-color 0.3s ease; ",
                config.text_color
            ));
        }
    }

    let (animation_keyframes, hover_animation) = animation_css(config, &element_id);
    if config.animation == LinkAnimation::Pulse {
        link_styles.push_str(&format!("animation: pulse-{element_id} 2s infinite; "));
    }

    let mut style_blocks = style_for_variant(config, &element_id);
    if let Some(hover) = hover_animation {
        style_blocks.push_str(&hover);
    }
    style_blocks.push_str(&format!(
        r#"
<style>
#{element_id}:hover {{
  color: {hover_color};
}}
{animation_keyframes}</style>
"#,
        hover_color = config.hover_color,
    ));

    let icon = if config.icon && config.style != LinkStyle::ArrowAnimation {
        EXTERNAL_ICON
    } else {
        ""
    };
    let arrow = if config.style == LinkStyle::ArrowAnimation {
        r#"<span class="arrow">→</span>"#
    } else {
        ""
    };

    let target = if config.open_in_new_tab {
        r#" target="_blank""#
    } else {
        ""
    };
    let rel = if config.add_nofollow {
        r#" rel="nofollow""#
    } else {
        ""
    };

    let link_text = if config.link_text.trim().is_empty() {
        locale::text(config.language).cta_default
    } else {
        config.link_text.as_str()
    };

    let link = format!(
        r#"<a href="{url}" id="{element_id}" style="{link_styles}"{target}{rel}>{link_text}{arrow}{icon}</a>"#,
        url = tracked_url(config),
    );

    if !has_container {
        return format!("{style_blocks}{link}");
    }

    let mut container_styles = format!(
        "display: {}; align-items: center; ",
        if config.show_product_image { "flex" } else { "block" }
    );
    if config.show_background {
        container_styles.push_str(&format!("background-color: {}; ", config.background_color));
    }
    if config.show_border {
        container_styles.push_str(&format!("border: 1px solid {}; ", config.border_color));
    }
    if config.show_background || config.show_border {
        container_styles.push_str(&format!("border-radius: {}px; ", config.border_radius));
    }
    if config.background_padding > 0 {
        container_styles.push_str(&format!("padding: {}px; ", config.background_padding));
    }
    container_styles.push_str("width: fit-content; max-width: 100%; ");

    let image = if config.show_product_image {
        let size = config.image_size.dimensions();
        format!(
            r#"
  <div style="width: {size}; height: {size}; margin-right: 12px; flex-shrink: 0;"><img src="{src}" style="width: 100%; height: 100%; object-fit: cover; border-radius: {radius};" alt="" onerror="this.src='{placeholder}'"></div>"#,
            src = config.product_image,
            radius = config.image_shape.border_radius(),
            placeholder = IMAGE_PLACEHOLDER,
        )
    } else {
        String::new()
    };

    let headline = if config.show_headline {
        format!(
            r#"
    <h3 style="font-size: {size}px; font-weight: {weight}; color: {color}; margin: 0 0 4px 0;">{headline}</h3>"#,
            size = config.headline_size,
            weight = config.headline_weight.css(),
            color = config.headline_color,
            headline = config.headline,
        )
    } else {
        String::new()
    };

    format!(
        r#"{style_blocks}<div style="{container_styles}">{image}
  <div style="display: flex; flex-direction: column;">{headline}
    {link}
  </div>
</div>"#
    )
}

/// Per-style pseudo-element CSS, keyed off the element id.
fn style_for_variant(config: &TextLinkConfig, element_id: &str) -> String {
    match config.style {
        LinkStyle::Default => String::new(),
        LinkStyle::UnderlineGrow => format!(
            r#"
<style>
#{element_id}::after {{
  content: '';
  display: block;
  height: 2px;
  width: 0;
  background-color: {hover};
  transition: width 0.3s;
  position: absolute;
  bottom: -2px;
  left: 0;
}}
#{element_id}:hover::after {{
  width: 100%;
}}
</style>
"#,
            hover = config.hover_color,
        ),
        LinkStyle::HighlightExpand => format!(
            r#"
<style>
#{element_id}::before {{
  content: '';
  position: absolute;
  z-index: -1;
  height: 30%;
  bottom: 0;
  left: 0;
  right: 0;
  background-color: {hover}30;
  transition: height 0.3s ease;
}}
#{element_id}:hover::before {{
  height: 100%;
}}
</style>
"#,
            hover = config.hover_color,
        ),
        LinkStyle::ArrowAnimation => format!(
            r#"
<style>
#{element_id} .arrow {{
  display: inline-block;
  margin-left: 5px;
  transition: transform 0.3s ease;
}}
#{element_id}:hover .arrow {{
  transform: translateX(3px);
}}
</style>
"#
        ),
        LinkStyle::Glow => format!(
            r#"
<style>
#{element_id}:hover {{
  text-shadow: 0 0 10px {color}80;
}}
</style>
"#,
            color = config.text_color,
        ),
        LinkStyle::Button => format!(
            r#"
<style>
#{element_id}:hover {{
  background-color: {hover};
  color: white;
}}
</style>
"#,
            hover = config.hover_color,
        ),
    }
}

/// Keyframes plus the hover rule that triggers shake/bounce. Pulse runs
/// continuously instead, attached directly to the link style.
fn animation_css(config: &TextLinkConfig, element_id: &str) -> (String, Option<String>) {
    match config.animation {
        LinkAnimation::None => (String::new(), None),
        LinkAnimation::Pulse => (
            format!(
                r#"@keyframes pulse-{element_id} {{
  0% {{ opacity: 1; }}
  50% {{ opacity: 0.7; }}
  100% {{ opacity: 1; }}
}}
"#
            ),
            None,
        ),
        LinkAnimation::Shake => (
            format!(
                r#"@keyframes shake-{element_id} {{
  0%, 100% {{ transform: translateX(0); }}
  10%, 30%, 50%, 70%, 90% {{ transform: translateX(-2px); }}
  20%, 40%, 60%, 80% {{ transform: translateX(2px); }}
}}
"#
            ),
            Some(format!(
                r#"
<style>
#{element_id}:hover {{
  animation: shake-{element_id} 0.5s;
}}
</style>
"#
            )),
        ),
        LinkAnimation::Bounce => (
            format!(
                r#"@keyframes bounce-{element_id} {{
  0%, 100% {{ transform: translateY(0); }}
  50% {{ transform: translateY(-5px); }}
}}
"#
            ),
            Some(format!(
                r#"
<style>
#{element_id}:hover {{
  animation: bounce-{element_id} 0.5s;
}}
</style>
"#
            )),
        ),
    }
}

/// Appends the UTM triplet when a tracking id is set, respecting any query
/// string already present on the affiliate URL.
fn tracked_url(config: &TextLinkConfig) -> String {
    if config.tracking_id.trim().is_empty() {
        return config.affiliate_link.clone();
    }
    let sep = if config.affiliate_link.contains('?') {
        '&'
    } else {
        '?'
    };
    format!(
        "{url}{sep}utm_source=affiliate&utm_medium=link&utm_campaign={campaign}",
        url = config.affiliate_link,
        campaign = embed::encode_uri_component(&config.tracking_id),
    )
}

fn collect_warnings(config: &TextLinkConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.link_text.trim().is_empty() {
        warnings.push("linkText is empty; using the locale default label".to_string());
    }
    if config.affiliate_link.trim().is_empty() {
        warnings.push("affiliateLink is empty; the link will go nowhere".to_string());
    }
    if config.show_product_image && config.product_image.trim().is_empty() {
        warnings.push("showProductImage is set but productImage is empty".to_string());
    }
    warnings
}
