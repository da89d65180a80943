use unicode_normalization::UnicodeNormalization;

/// Clean one recognized string: NFC-compose combining marks (camera OCR
/// tends to emit å/ä/ö as a base letter plus a combining mark) and
/// collapse whitespace runs to single spaces so downstream tokenization
/// sees one token per word.
pub fn clean_text(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}
