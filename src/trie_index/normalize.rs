pub const ALPHABET_SIZE: usize = 27;
pub const HYPHEN_INDEX: usize = 26;

/// Folds `c` onto `a`..=`z` or `-`, dropping case and Latin diacritics.
pub const fn normalize_char(c: char) -> Option<char> {
    let folded = match c {
        'a'..='z' | '-' => c,
        'A'..='Z' => c.to_ascii_lowercase(),
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        _ => return None,
    };

    Some(folded)
}

/// Child slot for `c`, or `None` when the character is skipped.
pub const fn child_index(c: char) -> Option<usize> {
    match normalize_char(c) {
        Some('-') => Some(HYPHEN_INDEX),
        Some(folded) => Some(folded as usize - 'a' as usize),
        None => None,
    }
}

/// Inverse of [`child_index`].
pub fn index_char(index: usize) -> Option<char> {
    match index {
        HYPHEN_INDEX => Some('-'),
        0..=25 => u8::try_from(index).ok().map(|i| char::from(b'a' + i)),
        _ => None,
    }
}

/// The folded path a word is stored under.
pub fn normalize(word: &str) -> String {
    word.chars().filter_map(normalize_char).collect()
}
