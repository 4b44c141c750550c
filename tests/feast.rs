use anyhow::Result;

use mednet_json::feast::{
    formatter::format_phrase,
    parser::parse_feast_entry,
    segmenter::{
        attribute_starts_next, extract_attributes, extract_modifiers, extract_sources,
        extract_title, modifier_starts_next, segment_tokens, source_starts_next, FeastRecord,
    },
    tokenizer::{tokenize_feast_line, TokenKind},
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn splits_title_attributes_and_sources() -> Result<()> {
    let record = parse_feast_entry("Felix, bishop and martyr [HBD, MR]")?;

    assert_eq!(
        record,
        FeastRecord {
            title: "Felix".to_string(),
            attributes: strings(&["bishop", "martyr"]),
            modifiers: vec![],
            sources: strings(&["HBD", "MR"]),
        }
    );

    Ok(())
}

#[test]
fn extracts_parenthesized_modifier() -> Result<()> {
    let record = parse_feast_entry("Assumption of the Virgin (Translation) [common]")?;

    assert_eq!(record.title, "Assumption of the Virgin");
    assert_eq!(record.attributes, Vec::<String>::new());
    assert_eq!(record.modifiers, strings(&["Translation"]));
    assert_eq!(record.sources, strings(&["common"]));

    Ok(())
}

#[test]
fn corrects_known_typos() -> Result<()> {
    let record = parse_feast_entry("Pope Leo, achoret [BLS]")?;
    assert_eq!(record.attributes, strings(&["anchoret"]));

    let record = parse_feast_entry("Aldegundis, abbes [GTZ]")?;
    assert_eq!(record.attributes, strings(&["abbess"]));

    Ok(())
}

#[test]
fn line_with_title_only() -> Result<()> {
    let record = parse_feast_entry("The Seven Sleepers")?;

    assert_eq!(record.title, "The Seven Sleepers");
    assert!(record.attributes.is_empty());
    assert!(record.modifiers.is_empty());
    assert!(record.sources.is_empty());

    Ok(())
}

#[test]
fn splits_comma_separated_attributes_without_and() -> Result<()> {
    let record = parse_feast_entry("Honoratus, bishop, confessor [HBD]")?;

    assert_eq!(record.title, "Honoratus");
    assert_eq!(record.attributes, strings(&["bishop", "confessor"]));
    assert_eq!(record.sources, strings(&["HBD"]));

    Ok(())
}

#[test]
fn folds_of_phrases_into_one_attribute() -> Result<()> {
    let record = parse_feast_entry("Thomas, disciple of Christ [HBD]")?;

    assert_eq!(record.title, "Thomas");
    assert_eq!(record.attributes, strings(&["disciple of Christ"]));

    Ok(())
}

#[test]
fn keeps_nested_parentheses_in_modifier() -> Result<()> {
    let record = parse_feast_entry("Edward, king (Translation (of relics)) [GTZ]")?;

    assert_eq!(record.attributes, strings(&["king"]));
    assert_eq!(record.modifiers, strings(&["Translation (of relics)"]));
    assert_eq!(record.sources, strings(&["GTZ"]));

    Ok(())
}

#[test]
fn splits_consecutive_parenthesized_modifiers() -> Result<()> {
    let record = parse_feast_entry("Stephen (Invention) (Vigil) [MR]")?;

    assert_eq!(record.title, "Stephen");
    assert_eq!(record.modifiers, strings(&["Invention", "Vigil"]));
    assert_eq!(record.sources, strings(&["MR"]));

    Ok(())
}

#[test]
fn keeps_trailing_phrase_without_sources() -> Result<()> {
    let record = parse_feast_entry("Felix, bishop and martyr")?;

    assert_eq!(record.title, "Felix");
    assert_eq!(record.attributes, strings(&["bishop", "martyr"]));
    assert!(record.sources.is_empty());

    Ok(())
}

#[test]
fn title_keeps_ordinary_commas_and_periods() -> Result<()> {
    let record = parse_feast_entry("Peter, of Alexandria [BLS]")?;
    assert_eq!(record.title, "Peter, of Alexandria");

    let record = parse_feast_entry("Octave of St. Stephen [common]")?;
    assert_eq!(record.title, "Octave of St. Stephen");

    Ok(())
}

#[test]
fn ignores_well_formed_markup() -> Result<()> {
    let plain = parse_feast_entry("Felix, bishop and martyr [HBD, MR]")?;

    for marked_up in [
        "<b>Felix, bishop and martyr [HBD, MR]</b>",
        "Felix, <i>bishop</i> and martyr [HBD, MR]",
        "Felix,<i></i> bishop and martyr [HBD, MR]",
        "Felix, bishop and martyr <a href=x>[HBD, MR]</a>",
    ] {
        assert_eq!(parse_feast_entry(marked_up)?, plain, "{:?}", marked_up);
    }

    Ok(())
}

#[test]
fn drops_trailing_content_after_unterminated_tag() -> Result<()> {
    let record = parse_feast_entry("Felix <b bishop and martyr [HBD]")?;

    assert_eq!(record.title, "Felix");
    assert!(record.attributes.is_empty());
    assert!(record.sources.is_empty());

    Ok(())
}

#[test]
fn attributes_end_before_modifiers_and_sources() -> Result<()> {
    // Sources directly after an attribute: the modifier section is passed
    // through empty, never skipped out of order.
    let record = parse_feast_entry("Agnes, virgin [MR]")?;
    assert_eq!(record.attributes, strings(&["virgin"]));
    assert!(record.modifiers.is_empty());
    assert_eq!(record.sources, strings(&["MR"]));

    let record = parse_feast_entry("Agnes, virgin (Octave) [MR]")?;
    assert_eq!(record.attributes, strings(&["virgin"]));
    assert_eq!(record.modifiers, strings(&["Octave"]));
    assert_eq!(record.sources, strings(&["MR"]));

    Ok(())
}

#[test]
fn decodes_character_references_before_classification() -> Result<()> {
    let record = parse_feast_entry("R&eacute;mi, bishop [HBD]")?;
    assert_eq!(record.title, "Rémi");
    assert_eq!(record.attributes, strings(&["bishop"]));

    // Numeric references decode to the same letter.
    let record = parse_feast_entry("R&#233;mi, bishop [HBD]")?;
    assert_eq!(record.title, "Rémi");

    Ok(())
}

#[test]
fn empty_line_yields_empty_record() -> Result<()> {
    let record = parse_feast_entry("")?;

    assert_eq!(
        record,
        FeastRecord {
            title: String::new(),
            attributes: vec![],
            modifiers: vec![],
            sources: vec![],
        }
    );

    Ok(())
}

#[test]
fn tokenizer_merges_adjacent_runs_of_one_kind() -> Result<()> {
    let tokens = tokenize_feast_line("Pope Leo, bishop")?;

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Word);
    assert_eq!(tokens[0].pieces, strings(&["Pope", "Leo"]));
    assert_eq!(tokens[1].kind, TokenKind::Comma);
    assert_eq!(tokens[2].kind, TokenKind::Attribute);
    assert_eq!(tokens[2].pieces, strings(&["bishop"]));

    Ok(())
}

#[test]
fn tokenizer_classification_is_case_sensitive() -> Result<()> {
    let tokens = tokenize_feast_line("virgin Virgin")?;

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Attribute);
    assert_eq!(tokens[1].kind, TokenKind::Word);

    Ok(())
}

#[test]
fn tokenizer_drops_unclassified_characters() -> Result<()> {
    // Digits, quotes and stray symbols carry no signal; only letters and the
    // structural punctuation survive.
    let tokens = tokenize_feast_line("Felix 903 &\" bishop")?;

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].pieces, strings(&["Felix"]));
    assert_eq!(tokens[1].kind, TokenKind::Attribute);

    Ok(())
}

#[test]
fn tokenizer_fixes_typos_before_classification() -> Result<()> {
    let tokens = tokenize_feast_line("achoret")?;

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Attribute);
    assert_eq!(tokens[0].pieces, strings(&["anchoret"]));

    Ok(())
}

#[test]
fn segmenter_consumes_every_token() -> Result<()> {
    // No token is lost between sections: every word ends up in some field
    // even when nothing matches a vocabulary.
    let tokens = tokenize_feast_line("some entirely unknown words")?;
    let record = segment_tokens(&tokens);

    assert_eq!(record.title, "some entirely unknown words");

    Ok(())
}

#[test]
fn boundary_lookahead_needs_delimiter_and_vocabulary_word() -> Result<()> {
    assert!(attribute_starts_next(&tokenize_feast_line(", bishop")?));
    assert!(attribute_starts_next(&tokenize_feast_line("and martyr")?));
    assert!(!attribute_starts_next(&tokenize_feast_line(", Rome")?));

    assert!(modifier_starts_next(&tokenize_feast_line("(Vigil)")?));
    assert!(!modifier_starts_next(&tokenize_feast_line("(whatever)")?));

    assert!(source_starts_next(&tokenize_feast_line("[HBD]")?));
    assert!(!source_starts_next(&tokenize_feast_line("[unknown]")?));

    Ok(())
}

#[test]
fn extract_functions_advance_past_their_section() -> Result<()> {
    let tokens = tokenize_feast_line("Felix, bishop [HBD]")?;

    let (title, rest) = extract_title(&tokens);
    assert_eq!(title, "Felix");
    assert_eq!(rest.len(), tokens.len() - 1);

    let (attributes, rest) = extract_attributes(rest);
    assert_eq!(attributes, strings(&["bishop"]));

    let (modifiers, rest) = extract_modifiers(rest);
    assert!(modifiers.is_empty());

    let (sources, rest) = extract_sources(rest);
    assert_eq!(sources, strings(&["HBD"]));
    assert!(rest.is_empty());

    Ok(())
}

#[test]
fn formats_phrases_with_english_spacing() {
    assert_eq!(
        format_phrase(&strings(&["Assumption", "of", "the", "Virgin"])),
        "Assumption of the Virgin"
    );
    assert_eq!(
        format_phrase(&strings(&["Translation", "(", "of", "relics", ")"])),
        "Translation (of relics)"
    );
    assert_eq!(
        format_phrase(&strings(&["Octave", "of", "St", ".", "Stephen"])),
        "Octave of St. Stephen"
    );
    assert_eq!(
        format_phrase(&strings(&["Peter", ",", "of", "Alexandria"])),
        "Peter, of Alexandria"
    );
    assert_eq!(format_phrase(&[]), "");
}
