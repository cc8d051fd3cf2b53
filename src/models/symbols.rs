//! Zodiac glyph lookup.

/// Glyph shown for any name without a registered symbol.
pub const FALLBACK_GLYPH: &str = "✦";

/// The twelve known signs and their glyphs, in zodiac order.
pub const ZODIAC_GLYPHS: [(&str, &str); 12] = [
    ("Aries", "♈"),
    ("Taurus", "♉"),
    ("Gemini", "♊"),
    ("Cancer", "♋"),
    ("Leo", "♌"),
    ("Virgo", "♍"),
    ("Libra", "♎"),
    ("Scorpio", "♏"),
    ("Sagittarius", "♐"),
    ("Capricorn", "♑"),
    ("Aquarius", "♒"),
    ("Pisces", "♓"),
];

/// Returns the glyph registered for `name`, or [`FALLBACK_GLYPH`].
///
/// Matching is exact; "aries" does not match "Aries".
#[must_use]
pub fn glyph_for(name: &str) -> &'static str {
    ZODIAC_GLYPHS
        .iter()
        .find(|(sign, _)| *sign == name)
        .map_or(FALLBACK_GLYPH, |(_, glyph)| glyph)
}

/// Display label used for a category in titles and pickers.
#[must_use]
pub fn category_label(name: &str) -> String {
    format!("{} {} Ascendant", glyph_for(name), name)
}
