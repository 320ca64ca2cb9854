//! Structural repair for the Baike month payload.
//!
//! The upstream document is JSON corrupted by embedded HTML anchor tags
//! and raw quote characters inside string values. This module performs a
//! best-effort marker-scanning repair so the result parses as standard
//! JSON. It assumes the `"desc":`, `"cover":`, `"title":` and
//! `"festival"` field names are stable and do not appear inside values
//! once the earlier passes have run.

/// Repair the raw month payload so it parses as standard JSON.
///
/// Passes run in a fixed order:
/// 1. drop every literal `</a>` and newline;
/// 2. delete every `<a target=` .. `>` span;
/// 3. remove every `"desc":` member up to the following `"cover":`
///    marker (description bodies contain free text that confuses the
///    structure);
/// 4. replace raw quote characters inside each `"title":` .. `"festival"`
///    string value with spaces.
pub fn repair_payload(raw: &str) -> String {
    let mut text = raw.replace("</a>", "").replace('\n', "");

    strip_anchor_tags(&mut text);
    strip_desc_fields(&mut text);
    clean_title_quotes(&mut text);

    text
}

/// Delete every `<a target=` .. `>` span, repeating until none remain
fn strip_anchor_tags(text: &mut String) {
    while let Some(start) = text.find("<a target=") {
        match text[start..].find('>') {
            Some(offset) => text.replace_range(start..start + offset + 1, ""),
            None => {
                // Unterminated tag: drop the tail and stop
                text.truncate(start);
                break;
            }
        }
    }
}

/// Remove each `"desc":` member, value included, up to the following
/// `"cover":` marker. Removing the whole member keeps the document
/// well-formed; the cursor then sits on `"cover":`, past the splice.
fn strip_desc_fields(text: &mut String) {
    let mut from = 0;
    while let Some(offset) = text[from..].find("\"desc\":") {
        let start = from + offset;
        let Some(cover_offset) = text[start..].find("\"cover\":") else {
            break;
        };
        text.replace_range(start..start + cover_offset, "");
        from = start;
    }
}

/// Replace raw quote characters inside each `"title":"..."` value with
/// spaces, using the following `"festival"` marker to find the closing
/// quote. Quote-for-space is a same-length substitution, so marker
/// positions are unaffected and the cursor can jump straight to the
/// marker.
///
/// NOTE: a title that legitimately contains the text `"festival"` would
/// desynchronize this pass; the upstream payload has never produced one.
fn clean_title_quotes(text: &mut String) {
    const VALUE_OFFSET: usize = "\"title\":\"".len();

    let mut from = 0;
    while let Some(offset) = text[from..].find("\"title\":") {
        let start = from + offset;
        let Some(festival_offset) = text[start..].find("\"festival\"") else {
            break;
        };
        let festival = start + festival_offset;

        // Value spans from after the opening quote to the `",` that
        // precedes the festival marker.
        let value_start = start + VALUE_OFFSET;
        let Some(value_end) = festival.checked_sub(2) else {
            break;
        };
        let Some(value) = text.get(value_start..value_end) else {
            break;
        };

        let cleaned = value.replace('"', " ");
        text.replace_range(value_start..value_end, &cleaned);
        from = festival;
    }
}
