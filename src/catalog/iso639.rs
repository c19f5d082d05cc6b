// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code checks for catalog validation.
//!
//! Localization files are named after their language code (`en.dart`,
//! `it.dart`), so a code outside ISO 639-1 usually means a typo in the
//! catalog. Validation only warns; regional variants such as `pt_BR` are
//! accepted when their primary subtag is known.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Every ISO 639-1 two-letter code, sorted for binary search.
const ISO639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs",
    "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz",
    "ee", "el", "en", "eo", "es", "et", "eu",
    "fa", "ff", "fi", "fj", "fo", "fr", "fy",
    "ga", "gd", "gl", "gn", "gu", "gv",
    "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu",
    "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv",
    "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my",
    "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os",
    "pa", "pi", "pl", "ps", "pt",
    "qu",
    "rm", "rn", "ro", "ru", "rw",
    "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st",
    "su", "sv", "sw",
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty",
    "ug", "uk", "ur", "uz",
    "ve", "vi", "vo",
    "wa", "wo",
    "xh",
    "yi", "yo",
    "za", "zh", "zu",
];

/// True if `code` is a lowercase ISO 639-1 code.
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO639_1.binary_search(&code).is_ok()
}

/// True if the primary subtag of a locale code (`pt` in `pt_BR` or `pt-BR`)
/// is a valid ISO 639-1 code.
pub fn is_known_locale(code: &str) -> bool {
    let primary = code.split(['_', '-']).next().unwrap_or(code);
    is_valid_iso639_1(primary)
}

/// English display name for the languages most often seen in app catalogs.
pub fn language_name(code: &str) -> Option<&'static str> {
    let primary = code.split(['_', '-']).next().unwrap_or(code);
    match primary {
        "en" => Some("English"),
        "it" => Some("Italian"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "pt" => Some("Portuguese"),
        "ru" => Some("Russian"),
        "zh" => Some("Chinese"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "nl" => Some("Dutch"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        _ => None,
    }
}
