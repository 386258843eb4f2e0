//! Module name normalisation.

/// Converts free text into a kebab-case module name.
///
/// Words break on any non-alphanumeric character, on lower-to-upper
/// transitions (`fooBar`), at the end of an acronym (`XMLHttp`) and between
/// letters and digits (`v8` becomes `v-8`). Apostrophes vanish without
/// breaking the word.
pub fn kebab_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let next = chars.get(i + 1).copied();
            if prev.is_alphanumeric() && is_boundary(prev, c, next) {
                flush(&mut current, &mut words);
            }
        }
        current.push(c);
    }
    flush(&mut current, &mut words);
    words
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if prev.is_lowercase() && c.is_uppercase() {
        return true;
    }
    if prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase) {
        return true;
    }
    prev.is_numeric() != c.is_numeric()
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_dashes() {
        assert_eq!(kebab_case("My Cool App"), "my-cool-app");
    }

    #[test]
    fn camel_and_acronyms_split() {
        assert_eq!(kebab_case("fooBar"), "foo-bar");
        assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(kebab_case("__FOO_BAR__"), "foo-bar");
    }

    #[test]
    fn digits_are_separate_words() {
        assert_eq!(kebab_case("v8 engine"), "v-8-engine");
    }

    #[test]
    fn apostrophes_are_dropped() {
        assert_eq!(kebab_case("don't panic"), "dont-panic");
    }

    #[test]
    fn already_kebab_is_unchanged() {
        assert_eq!(kebab_case("ts-scaffold"), "ts-scaffold");
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("  --  "), "");
    }
}
