use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// The XML predefined set plus the Latin-1 letters that occur in saint names
// ("Rémi", "Æthelburh", "Fursée", ...). The year pages predate UTF-8 and
// escape every non-ASCII letter.
static NAMED_REFERENCES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("amp", "&"),
        ("lt", "<"),
        ("gt", ">"),
        ("quot", "\""),
        ("apos", "'"),
        ("nbsp", "\u{a0}"),
        ("Aacute", "Á"),
        ("AElig", "Æ"),
        ("Eacute", "É"),
        ("Oslash", "Ø"),
        ("aacute", "á"),
        ("acirc", "â"),
        ("aelig", "æ"),
        ("agrave", "à"),
        ("aring", "å"),
        ("auml", "ä"),
        ("ccedil", "ç"),
        ("eacute", "é"),
        ("ecirc", "ê"),
        ("egrave", "è"),
        ("euml", "ë"),
        ("iacute", "í"),
        ("icirc", "î"),
        ("iuml", "ï"),
        ("ntilde", "ñ"),
        ("oacute", "ó"),
        ("ocirc", "ô"),
        ("oslash", "ø"),
        ("ouml", "ö"),
        ("uacute", "ú"),
        ("ucirc", "û"),
        ("ugrave", "ù"),
        ("uuml", "ü"),
    ])
});

static REGEX_CHARACTER_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#(?P<dec>[0-9]+)|#[xX](?P<hex>[0-9A-Fa-f]+)|(?P<name>[A-Za-z][A-Za-z0-9]*));")
        .unwrap()
});

// Decodes named and numeric HTML character references to literal text.
// Anything unresolvable is left exactly as written; classification downstream
// treats it as ordinary characters.
pub fn decode_character_references(text: &str) -> String {
    REGEX_CHARACTER_REFERENCE
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(dec) = caps.name("dec") {
                return decode_code_point(dec.as_str(), 10).unwrap_or_else(|| caps[0].to_string());
            }
            if let Some(hex) = caps.name("hex") {
                return decode_code_point(hex.as_str(), 16).unwrap_or_else(|| caps[0].to_string());
            }

            let name = caps.name("name").unwrap().as_str();
            match NAMED_REFERENCES.get(name) {
                Some(replacement) => replacement.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn decode_code_point(digits: &str, radix: u32) -> Option<String> {
    let code_point = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code_point).map(|c| c.to_string())
}
