//! # String Helpers
//!
//! Case conversion, HTML stripping, input validation and masking.
//!
//! ## Validation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Helper                        Accepts                                  │
//! │  ───────────────────────────   ───────────────────────────────────────  │
//! │  is_valid_email                word chars, . + - separators, a dotted   │
//! │                                domain                                   │
//! │  is_valid_name                 letters and spaces, at least 2 chars     │
//! │  is_alphanumeric_string        a-z A-Z 0-9, at least 1 char             │
//! │  is_valid_pincode              exactly 6 digits                         │
//! │  is_sequential_digits_pattern  a run of "01234567890" / "09876543210"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::borrow::Cow;
use std::fmt::Display;
use std::sync::LazyLock;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use tracing::debug;

/// Character used by [`mask_input_string_and_truncate`].
pub const MASK_CHAR: char = 'X';

/// Characters left readable at the end of a masked string.
pub const VISIBLE_CHARS: usize = 4;

/// Bytes a URI component keeps as they are: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SEQUENTIAL_DIGITS: &str = "01234567890";
const REVERSE_SEQUENTIAL_DIGITS: &str = "09876543210";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([+.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w)+)+$")
        .expect("valid regex")
});
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("valid regex"));
static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]+$").expect("valid regex"));
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static SENTENCE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?-u:\w)|[.!?]\s*(?-u:\w)").expect("valid regex"));
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\w)\S*").expect("valid regex"));

// =============================================================================
// Validation
// =============================================================================

/// ## Example
/// ```rust
/// use frontkit_core::string::is_valid_email;
///
/// assert!(is_valid_email("first.last+tag@mail.example.com"));
/// assert!(!is_valid_email("first@localhost"));
/// ```
pub fn is_valid_email(email_id: &str) -> bool {
    EMAIL_RE.is_match(email_id)
}

/// Letters and spaces only, at least two characters once trimmed.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && NAME_RE.is_match(name) && name.chars().count() >= 2
}

pub fn is_alphanumeric_string(s: &str) -> bool {
    ALPHANUMERIC_RE.is_match(s)
}

/// Exactly six digits. Numbers and strings are both accepted.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::is_valid_pincode;
///
/// assert!(is_valid_pincode("123456"));
/// assert!(is_valid_pincode(110018));
/// assert!(!is_valid_pincode("1234aa"));
/// assert!(!is_valid_pincode("12345"));
/// ```
pub fn is_valid_pincode(pincode: impl Display) -> bool {
    let pincode = pincode.to_string();
    DIGITS_RE.is_match(&pincode) && pincode.len() == 6
}

/// True when the digits form an ascending or descending run, wrapping
/// through 0 (`"7890"`, `"0987"`).
///
/// ## Example
/// ```rust
/// use frontkit_core::string::is_sequential_digits_pattern;
///
/// assert!(is_sequential_digits_pattern("1234"));
/// assert!(is_sequential_digits_pattern(9876));
/// assert!(!is_sequential_digits_pattern("1235"));
/// ```
pub fn is_sequential_digits_pattern(digits_pattern: impl Display) -> bool {
    let pattern = digits_pattern.to_string();
    SEQUENTIAL_DIGITS.contains(&pattern) || REVERSE_SEQUENTIAL_DIGITS.contains(&pattern)
}

// =============================================================================
// Case Conversion
// =============================================================================

/// Lowercases everything, then capitalises the first word character of
/// each sentence.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::convert_to_sentence_case;
///
/// assert_eq!(convert_to_sentence_case("Enter SIP amount"), "Enter sip amount");
/// assert_eq!(convert_to_sentence_case("hELLO there. how ARE you? fine!"), "Hello there. How are you? Fine!");
/// ```
pub fn convert_to_sentence_case(s: &str) -> String {
    let lower = s.to_lowercase();
    SENTENCE_START_RE
        .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Capitalises the first letter of each word and leaves the rest alone.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("Enter SIP amount"), "Enter SIP Amount");
/// ```
pub fn capitalize_first_letter(s: &str) -> String {
    WORD_RE
        .replace_all(s, |caps: &Captures| upper_first(&caps[0], false))
        .into_owned()
}

/// Capitalises the first letter of each word and lowercases the rest.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::to_title_case;
///
/// assert_eq!(to_title_case("My NAME Is kHan"), "My Name Is Khan");
/// ```
pub fn to_title_case(s: &str) -> String {
    WORD_RE
        .replace_all(s, |caps: &Captures| upper_first(&caps[0], true))
        .into_owned()
}

fn upper_first(word: &str, lower_rest: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            let rest = if lower_rest {
                rest.to_lowercase()
            } else {
                rest.to_string()
            };
            format!("{}{}", first.to_uppercase(), rest)
        }
        None => String::new(),
    }
}

// =============================================================================
// HTML To Text
// =============================================================================

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement,
        }
    }
}

/// Applied in order; later rules see the output of earlier ones.
static HTML_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // line breaks become spaces
        Rule::new(r"(?i)<br>", " "),
        Rule::new(r"(?i)<br\s/>", " "),
        Rule::new(r"(?i)<br/>", " "),
        // escaped newlines ("\n" as two characters)
        Rule::new(r"\\n", " "),
        // every tag
        Rule::new(r"(?s)<.*?>", ""),
        // leftovers of p and a tags, keeping link text and target
        Rule::new(r"(?i)<p.*>", " "),
        Rule::new(r#"(?i)<a.*href="(.*?)".*>(.*?)</a>"#, " ${2} (${1})"),
        // script and style bodies
        Rule::new(r"(?i)<script.*>[\w\W]+[\w\W]+</script>", ""),
        Rule::new(r"(?i)<style.*>[\w\W]+[\w\W]+</style>", ""),
        Rule::new(r"(?s)<.*?>", ""),
        // runs of two or more line breaks
        Rule::new(r"(?:(?:\r\n|\r|\n)\s*){2,}", ""),
        // runs of spaces
        Rule::new(r" {2,}", " "),
        // double-encoded entities, then plain ones, then any stray &amp;
        Rule::new(r"(?i)&amp;(?:nbsp|quot|lt|gt|rsquo);", ""),
        Rule::new(r"(?i)&(?:nbsp|quot|lt|gt|rsquo);", ""),
        Rule::new(r"(?i)&amp;", ""),
        Rule::new(r"\\n", ""),
    ]
});

/// Strips markup from an HTML string.
///
/// Entities are dropped, not decoded.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::convert_html_to_text;
///
/// assert_eq!(convert_html_to_text("<p>Hello <b>World</b></p>"), "Hello World");
/// assert_eq!(convert_html_to_text("one<br>two"), "one two");
/// ```
pub fn convert_html_to_text(html_string: &str) -> String {
    HTML_RULES.iter().fold(html_string.to_string(), |text, rule| {
        rule.pattern.replace_all(&text, rule.replacement).into_owned()
    })
}

// =============================================================================
// Masking
// =============================================================================

/// Replaces all but the last four characters with `X`.
///
/// With `truncate_to`, the masked prefix is shortened so the result is at
/// most that many characters long. The last four characters are always
/// kept, and strings of four characters or fewer come back unchanged.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::mask_input_string_and_truncate;
///
/// assert_eq!(mask_input_string_and_truncate("301634570900", None), "XXXXXXXX0900");
/// assert_eq!(mask_input_string_and_truncate("301634570900", Some(8)), "XXXX0900");
/// ```
pub fn mask_input_string_and_truncate(input: &str, truncate_to: Option<usize>) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    if len <= VISIBLE_CHARS {
        return input.to_string();
    }

    let total = truncate_to.map_or(len, |count| count.clamp(VISIBLE_CHARS, len));
    let masked = total - VISIBLE_CHARS;

    let mut out = String::with_capacity(total);
    out.extend(std::iter::repeat(MASK_CHAR).take(masked));
    out.extend(&chars[len - VISIBLE_CHARS..]);
    out
}

// =============================================================================
// URL Components
// =============================================================================

/// Percent-encodes a path segment or query value.
///
/// Input that is already encoded is decoded first, so encoding twice gives
/// the same result as encoding once. Input that does not decode (a stray
/// `%`, invalid UTF-8) is encoded as it is.
///
/// ## Example
/// ```rust
/// use frontkit_core::string::encode_url_params;
///
/// assert_eq!(encode_url_params("a b&c"), "a%20b%26c");
/// assert_eq!(encode_url_params("a%20b%26c"), "a%20b%26c");
/// assert_eq!(encode_url_params("100%"), "100%25");
/// ```
pub fn encode_url_params(query_param: &str) -> String {
    let decoded = match decode_uri_component(query_param) {
        Some(decoded) => decoded,
        None => {
            debug!(input = query_param, "URL param is not percent-encoded, encoding as is");
            query_param.to_string()
        }
    };

    encode_uri_component(&decoded)
}

/// `None` for a malformed `%XX` escape or bytes that are not UTF-8.
fn decode_uri_component(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let malformed = bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    });
    if malformed {
        return None;
    }

    percent_decode_str(text)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name-1@mail.co.in"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("üser@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name("  Ada Lovelace "));
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(convert_to_sentence_case("Enter investment amount"), "Enter investment amount");
        assert_eq!(
            convert_to_sentence_case("  first LINE. second one"),
            "  First line. Second one"
        );
        assert_eq!(capitalize_first_letter("Enter investment amount"), "Enter Investment Amount");
        assert_eq!(capitalize_first_letter("hello wORLD"), "Hello WORLD");
        assert_eq!(to_title_case("Enter SIP amount"), "Enter Sip Amount");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_is_alphanumeric_string() {
        assert!(is_alphanumeric_string("aaAa123"));
        assert!(!is_alphanumeric_string("aaAa_98-"));
        assert!(!is_alphanumeric_string(""));
    }

    #[test]
    fn test_is_valid_pincode() {
        assert!(is_valid_pincode(560001));
        assert!(!is_valid_pincode("5600011"));
        assert!(!is_valid_pincode(" 56000"));
    }

    #[test]
    fn test_is_sequential_digits_pattern() {
        assert!(is_sequential_digits_pattern("1234"));
        assert!(is_sequential_digits_pattern("7890"));
        assert!(is_sequential_digits_pattern("9876"));
        assert!(is_sequential_digits_pattern("3210"));
        assert!(!is_sequential_digits_pattern("1235"));
        assert!(!is_sequential_digits_pattern("1243"));
    }

    #[test]
    fn test_convert_html_to_text() {
        assert_eq!(convert_html_to_text("<div>a</div><br/>b"), "a b");
        assert_eq!(convert_html_to_text("line\\nbreak"), "line break");
        assert_eq!(convert_html_to_text("Tom&nbsp;&amp;&nbsp;Jerry"), "TomJerry");
        assert_eq!(convert_html_to_text("a    b"), "a b");
        assert_eq!(convert_html_to_text("<a href=\"/x\">link</a>"), "link");
        assert_eq!(convert_html_to_text(""), "");
    }

    #[test]
    fn test_mask_input_string_and_truncate() {
        assert_eq!(mask_input_string_and_truncate("301634570900", None), "XXXXXXXX0900");
        assert_eq!(mask_input_string_and_truncate("301634570900", Some(8)), "XXXX0900");
        assert_eq!(mask_input_string_and_truncate("301634570900", Some(2)), "0900");
        assert_eq!(mask_input_string_and_truncate("301634570900", Some(50)), "XXXXXXXX0900");
        assert_eq!(mask_input_string_and_truncate("0900", None), "0900");
        assert_eq!(mask_input_string_and_truncate("ab€cde", None), "XX€cde");
    }

    #[test]
    fn test_encode_url_params() {
        assert_eq!(encode_url_params("plain"), "plain");
        assert_eq!(encode_url_params("a/b?c=d"), "a%2Fb%3Fc%3Dd");
        assert_eq!(encode_url_params("₹"), "%E2%82%B9");
        assert_eq!(encode_url_params("%E2%82%B9"), "%E2%82%B9");
        assert_eq!(encode_url_params("%FF"), "%25FF");
        assert_eq!(encode_url_params("it's (ok)!"), "it's%20(ok)!");
    }

    #[test]
    fn test_malformed_escapes_are_encoded_as_is() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        assert_eq!(decode_uri_component("%4"), None);
        assert_eq!(decode_uri_component("%G1"), None);
        assert_eq!(decode_uri_component("a%2"), None);
        assert_eq!(decode_uri_component("%C3%28"), None);
        assert_eq!(decode_uri_component("%41%25"), Some("A%".to_string()));

        assert_eq!(encode_url_params("50%off"), "50%25off");
        assert_eq!(encode_url_params("%%41"), "%25%2541");
    }
}
