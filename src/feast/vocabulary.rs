use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::feast::tokenizer::TokenKind;

// The bracketed abbreviations identify the reference works an entry was drawn
// from:
//
//   HBD: Holweck, A Biographical Dictionary of the Saints
//   BLS: Butler, The Lives of the Fathers, Martyrs, and other Principal Saints
//   GTZ: Grotefend, Taschenbuch der Zeitrechnung
//   MR:  Missale Romanum
//   PCP: Perdrizet, Le Calendrier Parisien à la fin du moyen âge
//   WTS: Wieck, Time Sanctified
//
// HCC, PRI and 6082 are left over from an experimental phase of the source
// data. "common" marks a feast that appears on that date in most of the works
// consulted; an entry with no abbreviation at all is essentially universal.
pub static SOURCES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "HBD", "BLS", "GTZ", "MR", "PCP", "WTS", "HCC", "PRI", "6082", "common",
    ])
});

// Role and status descriptors. Matching is case-sensitive: "virgin" is a
// descriptor, "Virgin" in "Assumption of the Virgin" is part of a title.
pub static ATTRIBUTES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Doctors",
        "abbess",
        "abbot",
        "abbots",
        "anchoress",
        "anchoret",
        "anchorite",
        "apostle",
        "apostles",
        "archangel",
        "archdeacon",
        "bishop",
        "bishops",
        "boy",
        "canon",
        "cardinal",
        "confessor",
        "confessors",
        "count",
        "countess",
        "deacon",
        "disciple",
        "duchess",
        "duke",
        "earl",
        "emperor",
        "empress",
        "evangelist",
        "friar",
        "friars",
        "hermit",
        "host",
        "king",
        "kings",
        "lector",
        "marquis",
        "martyr",
        "martyrs",
        "matron",
        "monk",
        "nun",
        "patriarchs",
        "penitent",
        "pope",
        "popes",
        "priest",
        "priests",
        "prince",
        "prior",
        "proconsul",
        "prophet",
        "protomartyr",
        "queen",
        "recluse",
        "soldier",
        "subdeacon",
        "tribune",
        "virgin",
        "virgins",
        "widow",
    ])
});

// Liturgical event qualifiers ("Translation of relics", "Vigil", ...).
pub static MODIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Advent",
        "Assumption",
        "Beheading",
        "Candlemass",
        "Canonization",
        "Commemoration",
        "Conception",
        "Conversion",
        "Death",
        "Deposition",
        "Display",
        "Elevation",
        "Exceptio",
        "Impression",
        "Ingression",
        "Invention",
        "Miracle",
        "Nativity",
        "Obitus",
        "Octave",
        "Ordination",
        "Portatio",
        "Purification",
        "Reception",
        "Recollection",
        "Relatio",
        "Revelation",
        "Subvention",
        "Transitus",
        "Translation",
        "Vigil",
    ])
});

// Misspellings that occur in the source pages.
pub static TYPOS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("achoret", "anchoret"), ("abbes", "abbess")]));

pub fn fix_typo(word: &str) -> String {
    match TYPOS.get(word) {
        Some(corrected) => corrected.to_string(),
        None => word.to_string(),
    }
}

// Typo correction is expected to have happened already; classification never
// fails, an unknown word is an ordinary word.
pub fn classify_word(word: &str) -> TokenKind {
    match word {
        "of" => TokenKind::Of,
        "and" => TokenKind::And,
        w if ATTRIBUTES.contains(w) => TokenKind::Attribute,
        w if SOURCES.contains(w) => TokenKind::Source,
        w if MODIFIERS.contains(w) => TokenKind::Modifier,
        _ => TokenKind::Word,
    }
}

pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '<' => Some(TokenKind::OpenTag),
        '>' => Some(TokenKind::CloseTag),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '[' => Some(TokenKind::OpenBracket),
        ']' => Some(TokenKind::CloseBracket),
        ':' => Some(TokenKind::Colon),
        ';' => Some(TokenKind::SemiColon),
        '.' => Some(TokenKind::Period),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}
