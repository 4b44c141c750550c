use serde::{Deserialize, Serialize};

use crate::feast::{
    formatter::format_phrase,
    tokenizer::{FeastToken, TokenKind},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeastRecord {
    pub title: String,
    pub attributes: Vec<String>,
    pub modifiers: Vec<String>,
    pub sources: Vec<String>,
}

// Sections appear in this order and are never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Attributes,
    Modifiers,
    Sources,
}

pub fn segment_tokens(tokens: &[FeastToken]) -> FeastRecord {
    let mut tokens = tokens;

    let mut title = String::new();
    let mut attributes = Vec::new();
    let mut modifiers = Vec::new();
    let mut sources = Vec::new();

    let mut section = Section::Title;
    while !tokens.is_empty() {
        // Markup is invisible to segmentation in every section.
        if tokens[0].kind == TokenKind::OpenTag {
            tokens = skip_markup_tag(tokens);
            continue;
        }

        match section {
            Section::Title => {
                let (value, rest) = extract_title(tokens);
                title = value;
                tokens = rest;
                section = Section::Attributes;
            }
            Section::Attributes => {
                let (values, rest) = extract_attributes(tokens);
                attributes = values;
                tokens = rest;
                section = Section::Modifiers;
            }
            Section::Modifiers => {
                let (values, rest) = extract_modifiers(tokens);
                modifiers = values;
                tokens = rest;
                section = Section::Sources;
            }
            Section::Sources => {
                let (values, rest) = extract_sources(tokens);
                sources = values;
                tokens = rest;
            }
        }
    }

    FeastRecord {
        title,
        attributes,
        modifiers,
        sources,
    }
}

// Consumes tokens up to and including the next close-tag marker. A line with
// an unterminated tag loses everything after the opener.
fn skip_markup_tag(tokens: &[FeastToken]) -> &[FeastToken] {
    let mut tokens = tokens;
    while let Some((first, rest)) = tokens.split_first() {
        tokens = rest;
        if first.kind == TokenKind::CloseTag {
            break;
        }
    }
    tokens
}

// Markup is invisible to the lookahead as well: a tag span sitting between a
// delimiter and its vocabulary word must not mask the boundary.
fn leading_kinds(tokens: &[FeastToken]) -> (Option<TokenKind>, Option<TokenKind>) {
    let mut tokens = tokens;
    let mut kinds = [None, None];

    for slot in kinds.iter_mut() {
        while let Some(first) = tokens.first() {
            if first.kind != TokenKind::OpenTag {
                break;
            }
            tokens = skip_markup_tag(tokens);
        }

        if let Some(first) = tokens.first() {
            *slot = Some(first.kind);
            tokens = &tokens[1..];
        }
    }

    (kinds[0], kinds[1])
}

// A comma or "and" opens a new attribute phrase only when an attribute word
// actually follows; a bare comma belongs to whatever phrase is in progress.
pub fn attribute_starts_next(tokens: &[FeastToken]) -> bool {
    matches!(
        leading_kinds(tokens),
        (Some(TokenKind::Comma), Some(TokenKind::Attribute))
            | (Some(TokenKind::And), Some(TokenKind::Attribute))
    )
}

pub fn modifier_starts_next(tokens: &[FeastToken]) -> bool {
    matches!(
        leading_kinds(tokens),
        (Some(TokenKind::OpenParen), Some(TokenKind::Modifier))
    )
}

pub fn source_starts_next(tokens: &[FeastToken]) -> bool {
    matches!(
        leading_kinds(tokens),
        (Some(TokenKind::OpenBracket), Some(TokenKind::Source))
    )
}

// The title runs until a section boundary comes up. The boundary tokens
// themselves are left for the next section to consume.
pub fn extract_title(tokens: &[FeastToken]) -> (String, &[FeastToken]) {
    let mut tokens = tokens;
    let mut phrase: Vec<String> = Vec::new();

    while !tokens.is_empty() {
        if attribute_starts_next(tokens)
            || modifier_starts_next(tokens)
            || source_starts_next(tokens)
        {
            break;
        }

        if tokens[0].kind == TokenKind::OpenTag {
            tokens = skip_markup_tag(tokens);
            continue;
        }

        phrase.extend(tokens[0].pieces.iter().cloned());
        tokens = &tokens[1..];
    }

    (format_phrase(&phrase), tokens)
}

pub fn extract_attributes(tokens: &[FeastToken]) -> (Vec<String>, &[FeastToken]) {
    let mut tokens = tokens;
    let mut attributes = Vec::new();
    let mut phrase: Vec<String> = Vec::new();

    while !tokens.is_empty() {
        let token = &tokens[0];

        if token.kind == TokenKind::Attribute {
            phrase.extend(token.pieces.iter().cloned());
            tokens = &tokens[1..];
        } else if token.kind == TokenKind::OpenTag {
            tokens = skip_markup_tag(tokens);
        } else if source_starts_next(tokens) || modifier_starts_next(tokens) {
            break;
        } else if attribute_starts_next(tokens) {
            // The delimiter comma or "and" is dropped, not kept in output.
            if !phrase.is_empty() {
                attributes.push(format_phrase(&phrase));
                phrase.clear();
            }
            tokens = &tokens[1..];
        } else {
            // Connective words like "of" stay inside the running phrase
            // ("disciple of Christ" is one attribute).
            phrase.extend(token.pieces.iter().cloned());
            tokens = &tokens[1..];
        }
    }

    if !phrase.is_empty() {
        attributes.push(format_phrase(&phrase));
    }

    (attributes, tokens)
}

pub fn extract_modifiers(tokens: &[FeastToken]) -> (Vec<String>, &[FeastToken]) {
    let mut tokens = tokens;
    let mut modifiers = Vec::new();
    let mut phrase: Vec<String> = Vec::new();

    // The outermost parens are delimiters; anything nested is content.
    let mut paren_depth: i32 = 0;

    while !tokens.is_empty() {
        let token = &tokens[0];

        match token.kind {
            TokenKind::OpenParen => {
                // An opener at depth 0 followed by a modifier word starts a
                // fresh phrase; whatever was collected so far is complete.
                if paren_depth == 0 && modifier_starts_next(tokens) && !phrase.is_empty() {
                    modifiers.push(format_phrase(&phrase));
                    phrase.clear();
                }
                for piece in &token.pieces {
                    if paren_depth > 0 {
                        phrase.push(piece.clone());
                    }
                    paren_depth += 1;
                }
                tokens = &tokens[1..];
            }

            TokenKind::CloseParen => {
                for piece in &token.pieces {
                    if paren_depth > 1 {
                        phrase.push(piece.clone());
                    }
                    paren_depth -= 1;
                }
                tokens = &tokens[1..];
            }

            TokenKind::OpenTag => {
                tokens = skip_markup_tag(tokens);
            }

            TokenKind::Modifier => {
                phrase.extend(token.pieces.iter().cloned());
                tokens = &tokens[1..];
            }

            _ => {
                if source_starts_next(tokens) {
                    break;
                }
                phrase.extend(token.pieces.iter().cloned());
                tokens = &tokens[1..];
            }
        }
    }

    if !phrase.is_empty() {
        modifiers.push(format_phrase(&phrase));
    }

    (modifiers, tokens)
}

// Consumes everything left. Only source-classified pieces are kept; the
// brackets and separators around them are discarded.
pub fn extract_sources(tokens: &[FeastToken]) -> (Vec<String>, &[FeastToken]) {
    let mut tokens = tokens;
    let mut sources = Vec::new();

    while let Some((token, rest)) = tokens.split_first() {
        if token.kind == TokenKind::Source {
            sources.extend(token.pieces.iter().cloned());
        }
        tokens = rest;
    }

    (sources, tokens)
}
