//! The handful of user-facing strings baked into generated markup.
//!
//! Two text branches exist: Danish and Norwegian. `Language::En` renders
//! through the Norwegian branch (see `Language` docs).

use crate::config::Language;

pub struct LocaleText {
    pub cta_default: &'static str,
    pub savings_prefix: &'static str,
    pub in_stock: &'static str,
    pub low_stock: &'static str,
    pub shipping_prefix: &'static str,
    pub testimonial_fallback: &'static str,
    pub pros_heading: &'static str,
    pub cons_heading: &'static str,
    pub review_cta_default: &'static str,
}

static DA: LocaleText = LocaleText {
    cta_default: "Køb nu",
    savings_prefix: "Du sparer",
    in_stock: "På lager",
    low_stock: "Få på lager",
    shipping_prefix: "Afsendes i dag, hvis du bestiller inden",
    testimonial_fallback: "Tilfreds kunde",
    pros_heading: "Fordele",
    cons_heading: "Ulemper",
    review_cta_default: "Læs fuld anmeldelse",
};

static NO: LocaleText = LocaleText {
    cta_default: "Kjøp nå",
    savings_prefix: "Du sparer",
    in_stock: "På lager",
    low_stock: "Få på lager",
    shipping_prefix: "Sendes i dag hvis du bestiller før",
    testimonial_fallback: "Fornøyd kunde",
    pros_heading: "Pros",
    cons_heading: "Cons",
    review_cta_default: "Les full anmeldelse",
};

pub fn text(language: Language) -> &'static LocaleText {
    match language {
        Language::Da => &DA,
        Language::No | Language::En => &NO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_takes_norwegian_branch() {
        assert_eq!(text(Language::En).cta_default, "Kjøp nå");
        assert_eq!(text(Language::No).cta_default, "Kjøp nå");
        assert_eq!(text(Language::Da).cta_default, "Køb nu");
    }
}
