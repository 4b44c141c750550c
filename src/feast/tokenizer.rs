use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    feast::vocabulary::{classify_word, fix_typo, punctuation_kind},
    html_entities::decode_character_references,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    OpenTag,
    CloseTag,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Colon,
    SemiColon,
    Period,
    Comma,

    Of,
    And,
    Attribute,
    Source,
    Modifier,
    Word,
}

// One piece per scanned run: a whole word, or a single punctuation character.
// Adjacent runs of the same kind are merged into one token; the pieces stay
// separate so the formatter can restore the spacing between words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeastToken {
    pub kind: TokenKind,
    pub pieces: Vec<String>,
}

// Lexes one entry line: maximal alphabetic runs and single structural
// punctuation characters, everything else dropped (whitespace included; word
// boundaries survive only as piece boundaries).
pub fn tokenize_feast_line(line: &str) -> Result<Vec<FeastToken>> {
    let line = decode_character_references(line.trim());

    let mut tokens: Vec<FeastToken> = Vec::new();

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        let (kind, piece) = if c.is_alphabetic() {
            let mut word = String::from(c);
            while let Some(&next) = chars.peek() {
                if !next.is_alphabetic() {
                    break;
                }
                word.push(next);
                chars.next();
            }

            let word = fix_typo(&word);
            (classify_word(&word), word)
        } else if let Some(kind) = punctuation_kind(c) {
            (kind, c.to_string())
        } else {
            continue;
        };

        match tokens.last_mut() {
            Some(last) if last.kind == kind => last.pieces.push(piece),
            _ => tokens.push(FeastToken {
                kind,
                pieces: vec![piece],
            }),
        }
    }

    Ok(tokens)
}
