//! Spanish to English Bible book names for scripture references.

/// Spanish book name → English book name. Numbered books ("1 Juan") are
/// covered by their base name; the number passes through untouched.
const BOOKS: &[(&str, &str)] = &[
    ("Génesis", "Genesis"),
    ("Éxodo", "Exodus"),
    ("Exodo", "Exodus"),
    ("Levítico", "Leviticus"),
    ("Levitico", "Leviticus"),
    ("Números", "Numbers"),
    ("Numeros", "Numbers"),
    ("Deuteronomio", "Deuteronomy"),
    ("Josué", "Joshua"),
    ("Josue", "Joshua"),
    ("Jueces", "Judges"),
    ("Rut", "Ruth"),
    ("Reyes", "Kings"),
    ("Crónicas", "Chronicles"),
    ("Cronicas", "Chronicles"),
    ("Esdras", "Ezra"),
    ("Nehemías", "Nehemiah"),
    ("Nehemias", "Nehemiah"),
    ("Ester", "Esther"),
    ("Salmos", "Psalms"),
    ("Salmo", "Psalm"),
    ("Proverbios", "Proverbs"),
    ("Eclesiastés", "Ecclesiastes"),
    ("Eclesiastes", "Ecclesiastes"),
    ("Cantar de los Cantares", "Song of Solomon"),
    ("Cantares", "Song of Solomon"),
    ("Isaías", "Isaiah"),
    ("Isaias", "Isaiah"),
    ("Jeremías", "Jeremiah"),
    ("Jeremias", "Jeremiah"),
    ("Lamentaciones", "Lamentations"),
    ("Ezequiel", "Ezekiel"),
    ("Oseas", "Hosea"),
    ("Amós", "Amos"),
    ("Abdías", "Obadiah"),
    ("Abdias", "Obadiah"),
    ("Jonás", "Jonah"),
    ("Jonas", "Jonah"),
    ("Miqueas", "Micah"),
    ("Nahúm", "Nahum"),
    ("Habacuc", "Habakkuk"),
    ("Sofonías", "Zephaniah"),
    ("Sofonias", "Zephaniah"),
    ("Hageo", "Haggai"),
    ("Zacarías", "Zechariah"),
    ("Zacarias", "Zechariah"),
    ("Malaquías", "Malachi"),
    ("Malaquias", "Malachi"),
    ("Mateo", "Matthew"),
    ("Marcos", "Mark"),
    ("Lucas", "Luke"),
    ("Juan", "John"),
    ("Hechos", "Acts"),
    ("Romanos", "Romans"),
    ("Corintios", "Corinthians"),
    ("Gálatas", "Galatians"),
    ("Galatas", "Galatians"),
    ("Efesios", "Ephesians"),
    ("Filipenses", "Philippians"),
    ("Colosenses", "Colossians"),
    ("Tesalonicenses", "Thessalonians"),
    ("Timoteo", "Timothy"),
    ("Tito", "Titus"),
    ("Filemón", "Philemon"),
    ("Filemon", "Philemon"),
    ("Hebreos", "Hebrews"),
    ("Santiago", "James"),
    ("Pedro", "Peter"),
    ("Judas", "Jude"),
    ("Apocalipsis", "Revelation"),
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Finds the longest book name that starts at `rest` and ends on a word boundary.
fn match_book(rest: &str) -> Option<(&'static str, &'static str)> {
    BOOKS
        .iter()
        .filter(|(spanish, _)| rest.starts_with(spanish))
        .filter(|(spanish, _)| !rest[spanish.len()..].starts_with(is_word_char))
        .max_by_key(|(spanish, _)| spanish.len())
        .copied()
}

/// Replaces whole-word Spanish book names with English ones.
///
/// Partial words are left alone, so `"Lucasas"` stays as is while
/// `"Lucas 10:25"` becomes `"Luke 10:25"`.
pub fn translate_scripture(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if at_boundary {
            if let Some((spanish, english)) = match_book(rest) {
                out.push_str(english);
                i += spanish.len();
                at_boundary = false;
                continue;
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        out.push(c);
        at_boundary = !is_word_char(c);
        i += c.len_utf8();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_whole_book_names() {
        assert_eq!(translate_scripture("Lucas 10:25"), "Luke 10:25");
        assert_eq!(translate_scripture("Génesis 1:1"), "Genesis 1:1");
        assert_eq!(translate_scripture("Apocalipsis 21"), "Revelation 21");
    }

    #[test]
    fn test_leaves_partial_words() {
        assert_eq!(translate_scripture("Lucasas"), "Lucasas");
        assert_eq!(translate_scripture("SuperJuan 3"), "SuperJuan 3");
        assert_eq!(translate_scripture("Juanito"), "Juanito");
    }

    #[test]
    fn test_numbered_books() {
        assert_eq!(translate_scripture("1 Juan 4:8"), "1 John 4:8");
        assert_eq!(translate_scripture("2 Corintios 5:17"), "2 Corinthians 5:17");
    }

    #[test]
    fn test_multiple_references() {
        assert_eq!(
            translate_scripture("Salmos 23; Juan 3:16, Romanos 8:28"),
            "Psalms 23; John 3:16, Romans 8:28"
        );
    }

    #[test]
    fn test_longest_name_wins() {
        assert_eq!(
            translate_scripture("Cantar de los Cantares 2:4"),
            "Song of Solomon 2:4"
        );
        assert_eq!(translate_scripture("Salmo 51"), "Psalm 51");
    }

    #[test]
    fn test_english_and_unknown_text_pass_through() {
        assert_eq!(translate_scripture("John 3:16"), "John 3:16");
        assert_eq!(translate_scripture(""), "");
        assert_eq!(translate_scripture("Mensaje especial"), "Mensaje especial");
    }
}
