use once_cell::sync::Lazy;
use regex::Regex;

static NON_KEY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

fn fold(c: char) -> Option<&'static str> {
    Some(match c {
        'ä' => "ae",
        'ö' => "oe",
        'ü' => "ue",
        'ß' => "ss",
        'à' | 'á' | 'â' | 'ã' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' => "o",
        'ù' | 'ú' | 'û' => "u",
        'ç' => "c",
        'ñ' => "n",
        _ => return None,
    })
}

/// Derive the explanation key for a piece of selected text.
///
/// Umlauts and common accented letters fold to ASCII, every other run of
/// characters outside `[a-z0-9]` becomes a single `_`, and one `_` is
/// trimmed from each end.
///
/// ```
/// use editor::generate_i18n_key;
///
/// assert_eq!(generate_i18n_key("Erklärung-Tooltips"), "erklaerung_tooltips");
/// assert_eq!(generate_i18n_key("  Crème brûlée! "), "creme_brulee");
/// ```
pub fn generate_i18n_key(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match fold(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.push(c),
        }
    }

    let key = NON_KEY_CHARS.replace_all(&folded, "_");
    let key = key.strip_prefix('_').unwrap_or(&key);
    let key = key.strip_suffix('_').unwrap_or(key);
    key.to_string()
}
