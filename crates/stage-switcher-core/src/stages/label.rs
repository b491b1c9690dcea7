//! Menu label formatting.

/// Uppercases the first character of every whitespace-delimited word and
/// leaves the rest of each word untouched ("staging eu" -> "Staging Eu",
/// "qa-env" -> "Qa-env").
pub fn capitalize_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word() {
        assert_eq!(capitalize_words("production"), "Production");
    }

    #[test]
    fn multiple_words() {
        assert_eq!(capitalize_words("staging eu west"), "Staging Eu West");
        assert_eq!(capitalize_words("qa\tbox"), "Qa\tBox");
    }

    #[test]
    fn rest_of_word_untouched() {
        assert_eq!(capitalize_words("qa-env"), "Qa-env");
        assert_eq!(capitalize_words("myCMS"), "MyCMS");
    }

    #[test]
    fn empty_and_leading_space() {
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("  dev"), "  Dev");
    }
}
