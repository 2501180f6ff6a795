//! Widget configuration types — the JSON records the configurator UI saves
//! are deserialized straight into these structs (camelCase keys).

use serde::{Deserialize, Deserializer, Serialize};

/// Output language for all user-facing strings baked into the markup.
///
/// Only Danish and Norwegian are fully wired. `"en"` is accepted on input
/// but renders through the Norwegian text branch, as does any unrecognized
/// value — a two-way switch, so embeds never come out half-translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    Da,
    No,
    En,
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        match s.as_str() {
            "da" => Language::Da,
            "en" => Language::En,
            _ => Language::No,
        }
    }
}

impl From<Language> for String {
    fn from(l: Language) -> Self {
        match l {
            Language::Da => "da".to_string(),
            Language::No => "no".to_string(),
            Language::En => "en".to_string(),
        }
    }
}

/// Stock indicator shown next to the product title. Unrecognized values
/// degrade to `None` rather than failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    #[default]
    None,
    InStock,
    LowStock,
}

impl From<String> for StockStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "inStock" => StockStatus::InStock,
            "lowStock" => StockStatus::LowStock,
            _ => StockStatus::None,
        }
    }
}

impl From<StockStatus> for String {
    fn from(s: StockStatus) -> Self {
        match s {
            StockStatus::None => "none".to_string(),
            StockStatus::InStock => "inStock".to_string(),
            StockStatus::LowStock => "lowStock".to_string(),
        }
    }
}

/// One product-card widget, as edited in the configurator and persisted to
/// the record store. The compiler treats an instance as an immutable
/// snapshot; it never mutates it and holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Opaque record id, assigned by the caller at creation time. Scopes
    /// every DOM id and emitted CSS class so multiple widgets can coexist
    /// on one host page.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub background_color: String,
    pub button_color: String,
    pub text_color: String,

    pub product_image: String,
    pub product_title: String,
    pub product_description: String,

    /// Decimal strings with a comma as fractional separator ("129,99").
    /// Either may be empty; a discount is active only when both parse and
    /// the discounted value is strictly below the original.
    pub original_price: String,
    pub discounted_price: String,

    /// Optional CTA label; a locale default is substituted when empty.
    pub cta_text: String,
    pub affiliate_link: String,

    pub language: Language,

    /// Canned trust strings, order-preserving. Entries containing the
    /// recognized seal names render a trust-badge image instead of the
    /// generic checkmark.
    pub usps: Vec<String>,
    /// Free-text selling points folded into the description, one per line
    /// with a checkmark prefix.
    pub custom_usps: Vec<String>,

    pub show_shipping_countdown: bool,
    /// Same-day HH:MM cutoff; rolls to tomorrow once passed.
    pub shipping_deadline: String,

    pub show_apple_pay: bool,
    pub show_google_pay: bool,
    pub show_mobile_pay: bool,

    pub stock_status: StockStatus,

    pub show_testimonial: bool,
    pub testimonial_text: String,
    pub testimonial_name: String,
    pub testimonial_image: String,

    /// Bookkeeping stamped by the caller; the compiler only bakes
    /// `lastModified` into the markup for the auto-updater to compare.
    pub created_at: Option<String>,
    pub last_modified: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            id: "0".to_string(),
            background_color: "#ffffff".to_string(),
            button_color: "#ff6b6b".to_string(),
            text_color: "#333333".to_string(),
            product_image: String::new(),
            product_title: String::new(),
            product_description: String::new(),
            original_price: String::new(),
            discounted_price: String::new(),
            cta_text: String::new(),
            affiliate_link: String::new(),
            language: Language::Da,
            usps: Vec::new(),
            custom_usps: Vec::new(),
            show_shipping_countdown: false,
            shipping_deadline: "15:00".to_string(),
            show_apple_pay: false,
            show_google_pay: false,
            show_mobile_pay: false,
            stock_status: StockStatus::None,
            show_testimonial: false,
            testimonial_text: String::new(),
            testimonial_name: String::new(),
            testimonial_image: String::new(),
            created_at: None,
            last_modified: None,
        }
    }
}

impl WidgetConfig {
    pub fn has_payment_icons(&self) -> bool {
        self.show_apple_pay || self.show_google_pay || self.show_mobile_pay
    }
}

/// Compile-time switches. Not part of the persisted record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompileOptions {
    /// Emit the auto-update script (HTML mode) or the postMessage bridge
    /// (iframe mode) alongside the static markup.
    pub auto_update: bool,
    /// Auto-update poll interval, 30 seconds unless overridden.
    pub poll_interval_secs: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            auto_update: false,
            poll_interval_secs: 30,
        }
    }
}

/// Pros/cons review panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProsConsConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub product_title: String,
    pub product_image: String,
    pub price: String,
    pub show_price: bool,
    pub currency: String,

    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub conclusion: String,

    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub language: Language,

    /// Falls back to the locale "read full review" label when empty.
    pub button_text: String,
    pub button_link: String,
}

impl Default for ProsConsConfig {
    fn default() -> Self {
        ProsConsConfig {
            id: "0".to_string(),
            product_title: String::new(),
            product_image: String::new(),
            price: String::new(),
            show_price: true,
            currency: "kr".to_string(),
            pros: Vec::new(),
            cons: Vec::new(),
            conclusion: String::new(),
            background_color: "#ffffff".to_string(),
            accent_color: "#2563eb".to_string(),
            text_color: "#1f2937".to_string(),
            language: Language::Da,
            button_text: String::new(),
            button_link: String::new(),
        }
    }
}

/// Visual treatment of a styled text link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkStyle {
    #[default]
    Default,
    UnderlineGrow,
    HighlightExpand,
    ArrowAnimation,
    Glow,
    Button,
}

impl From<String> for LinkStyle {
    fn from(s: String) -> Self {
        match s.as_str() {
            "underlineGrow" => LinkStyle::UnderlineGrow,
            "highlightExpand" => LinkStyle::HighlightExpand,
            "arrowAnimation" => LinkStyle::ArrowAnimation,
            "glow" => LinkStyle::Glow,
            "button" => LinkStyle::Button,
            _ => LinkStyle::Default,
        }
    }
}

impl From<LinkStyle> for String {
    fn from(s: LinkStyle) -> Self {
        match s {
            LinkStyle::Default => "default",
            LinkStyle::UnderlineGrow => "underlineGrow",
            LinkStyle::HighlightExpand => "highlightExpand",
            LinkStyle::ArrowAnimation => "arrowAnimation",
            LinkStyle::Glow => "glow",
            LinkStyle::Button => "button",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkAnimation {
    #[default]
    None,
    Pulse,
    Shake,
    Bounce,
}

impl From<String> for LinkAnimation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pulse" => LinkAnimation::Pulse,
            "shake" => LinkAnimation::Shake,
            "bounce" => LinkAnimation::Bounce,
            _ => LinkAnimation::None,
        }
    }
}

impl From<LinkAnimation> for String {
    fn from(a: LinkAnimation) -> Self {
        match a {
            LinkAnimation::None => "none",
            LinkAnimation::Pulse => "pulse",
            LinkAnimation::Shake => "shake",
            LinkAnimation::Bounce => "bounce",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontWeight {
    Normal,
    Medium,
    #[default]
    Semibold,
    Bold,
}

impl From<String> for FontWeight {
    fn from(s: String) -> Self {
        match s.as_str() {
            "normal" => FontWeight::Normal,
            "medium" => FontWeight::Medium,
            "bold" => FontWeight::Bold,
            _ => FontWeight::Semibold,
        }
    }
}

impl From<FontWeight> for String {
    fn from(w: FontWeight) -> Self {
        match w {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
        .to_string()
    }
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css(self) -> &'static str {
        match self {
            FontWeight::Normal => "400",
            FontWeight::Medium => "500",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "700",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl From<String> for ImageSize {
    fn from(s: String) -> Self {
        match s.as_str() {
            "small" => ImageSize::Small,
            "large" => ImageSize::Large,
            _ => ImageSize::Medium,
        }
    }
}

impl From<ImageSize> for String {
    fn from(s: ImageSize) -> Self {
        match s {
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
        }
        .to_string()
    }
}

impl ImageSize {
    pub fn dimensions(self) -> &'static str {
        match self {
            ImageSize::Small => "40px",
            ImageSize::Medium => "60px",
            ImageSize::Large => "80px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageShape {
    #[default]
    Rounded,
    Circle,
    Square,
}

impl From<String> for ImageShape {
    fn from(s: String) -> Self {
        match s.as_str() {
            "circle" => ImageShape::Circle,
            "square" => ImageShape::Square,
            _ => ImageShape::Rounded,
        }
    }
}

impl From<ImageShape> for String {
    fn from(s: ImageShape) -> Self {
        match s {
            ImageShape::Rounded => "rounded",
            ImageShape::Circle => "circle",
            ImageShape::Square => "square",
        }
        .to_string()
    }
}

impl ImageShape {
    pub fn border_radius(self) -> &'static str {
        match self {
            ImageShape::Circle => "50%",
            ImageShape::Rounded => "8px",
            ImageShape::Square => "0",
        }
    }
}

/// Styled text link configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLinkConfig {
    /// Scopes the emitted element id and keyframe names.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub link_text: String,
    pub affiliate_link: String,
    pub text_color: String,
    pub hover_color: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub underline: bool,
    pub icon: bool,
    pub animation: LinkAnimation,
    pub style: LinkStyle,
    pub language: Language,

    pub show_headline: bool,
    pub headline: String,
    pub headline_size: u32,
    pub headline_weight: FontWeight,
    pub headline_color: String,

    pub show_product_image: bool,
    pub product_image: String,
    pub image_size: ImageSize,
    pub image_shape: ImageShape,

    pub show_background: bool,
    pub background_color: String,
    pub background_padding: u32,
    pub border_radius: u32,

    pub tracking_id: String,
    pub show_border: bool,
    pub border_color: String,
    pub padding: u32,
    pub open_in_new_tab: bool,
    pub add_nofollow: bool,
}

impl Default for TextLinkConfig {
    fn default() -> Self {
        TextLinkConfig {
            id: "0".to_string(),
            link_text: String::new(),
            affiliate_link: String::new(),
            text_color: "#2563eb".to_string(),
            hover_color: "#1d4ed8".to_string(),
            font_size: 16,
            font_weight: FontWeight::Semibold,
            underline: true,
            icon: true,
            animation: LinkAnimation::None,
            style: LinkStyle::Default,
            language: Language::Da,
            show_headline: false,
            headline: String::new(),
            headline_size: 18,
            headline_weight: FontWeight::Bold,
            headline_color: "#111827".to_string(),
            show_product_image: false,
            product_image: String::new(),
            image_size: ImageSize::Medium,
            image_shape: ImageShape::Rounded,
            show_background: false,
            background_color: "#f3f4f6".to_string(),
            background_padding: 16,
            border_radius: 8,
            tracking_id: String::new(),
            show_border: false,
            border_color: "#e5e7eb".to_string(),
            padding: 0,
            open_in_new_tab: true,
            add_nofollow: true,
        }
    }
}

/// The configurator historically stamped numeric `Date.now()` ids; newer
/// records carry strings. Accept both.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_fallback_is_norwegian() {
        assert_eq!(Language::from("da".to_string()), Language::Da);
        assert_eq!(Language::from("en".to_string()), Language::En);
        assert_eq!(Language::from("sv".to_string()), Language::No);
        assert_eq!(Language::from("".to_string()), Language::No);
    }

    #[test]
    fn widget_config_from_minimal_json() {
        let cfg: WidgetConfig = serde_json::from_str(
            r#"{"productTitle":"X","productImage":"http://i/img.jpg","affiliateLink":"http://a","language":"da"}"#,
        )
        .expect("minimal config should parse");
        assert_eq!(cfg.product_title, "X");
        assert_eq!(cfg.language, Language::Da);
        assert_eq!(cfg.shipping_deadline, "15:00");
        assert_eq!(cfg.stock_status, StockStatus::None);
        assert!(cfg.usps.is_empty());
    }

    #[test]
    fn numeric_id_accepted() {
        let cfg: WidgetConfig =
            serde_json::from_str(r#"{"id":1753650976581,"productTitle":"X"}"#).unwrap();
        assert_eq!(cfg.id, "1753650976581");
    }

    #[test]
    fn unknown_stock_status_degrades_to_none() {
        let cfg: WidgetConfig =
            serde_json::from_str(r#"{"stockStatus":"backorder"}"#).unwrap();
        assert_eq!(cfg.stock_status, StockStatus::None);
    }
}
