// Tokenized pieces carry no whitespace; ordinary English spacing is put back
// here: no space after an opening bracket or paren, no space before closing
// punctuation, one space between words.
pub fn format_phrase(pieces: &[String]) -> String {
    let mut text = String::new();

    for piece in pieces {
        match piece.as_str() {
            "(" | "[" => text.push_str(piece),
            "," | ")" | "]" | "." | ":" | ";" => {
                if text.ends_with(' ') {
                    text.pop();
                }
                text.push_str(piece);
                text.push(' ');
            }
            _ => {
                text.push_str(piece);
                text.push(' ');
            }
        }
    }

    text.trim().to_string()
}
