// ============================================================================
// Delimiters
// Custom-delimiter header detection and the resolved delimiter set
// ============================================================================

use super::config::CalculatorConfig;
use smallvec::SmallVec;

const NEWLINE: &str = "\n";

/// Ordered set of delimiters used to split one numeric body.
///
/// Either the configured defaults, or the entries of a custom-delimiter
/// header which replace the defaults wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    delimiters: SmallVec<[String; 4]>,
    custom: bool,
}

impl DelimiterSet {
    /// Delimiter set taken from the configuration defaults
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            delimiters: config.default_delimiters.iter().cloned().collect(),
            custom: false,
        }
    }

    /// Parse the delimiters declared by a header (the text between the
    /// marker and the newline).
    ///
    /// Empty entries are ignored. Returns `None` if no usable entry remains.
    pub fn from_header(declared: &str, list_separator: char) -> Option<Self> {
        let delimiters: SmallVec<[String; 4]> = declared
            .split(list_separator)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        if delimiters.is_empty() {
            return None;
        }

        Some(Self {
            delimiters,
            custom: true,
        })
    }

    /// Whether these delimiters came from a header
    #[inline]
    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    pub fn contains(&self, delimiter: &str) -> bool {
        self.delimiters.iter().any(|d| d == delimiter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.delimiters.iter().map(String::as_str)
    }

    /// All separators to split on, in order, with the implicit newline
    /// appended when enabled and not already declared.
    pub fn separators(&self, newline_separator: bool) -> SmallVec<[&str; 5]> {
        let mut separators: SmallVec<[&str; 5]> = self.iter().collect();
        if newline_separator && !self.contains(NEWLINE) {
            separators.push(NEWLINE);
        }
        separators
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.delimiters.to_vec()
    }
}

/// Numeric input split into its delimiter set and numeric body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub delimiters: DelimiterSet,
    pub body: &'a str,
}

impl<'a> ParsedInput<'a> {
    /// Detect a custom-delimiter header and separate it from the body.
    ///
    /// A header is the configured marker at the very start of the input,
    /// followed by the declared delimiters and a newline. Input that starts
    /// with the marker but has no newline carries no header.
    pub fn parse(input: &'a str, config: &CalculatorConfig) -> Self {
        if let Some(rest) = input.strip_prefix(config.header_marker.as_str()) {
            if let Some((declared, body)) = rest.split_once('\n') {
                let delimiters = DelimiterSet::from_header(declared, config.delimiter_list_separator)
                    .unwrap_or_else(|| DelimiterSet::from_config(config));
                return Self { delimiters, body };
            }
        }

        Self {
            delimiters: DelimiterSet::from_config(config),
            body: input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kata() -> CalculatorConfig {
        CalculatorConfig::kata()
    }

    #[test]
    fn test_no_header_uses_defaults() {
        let parsed = ParsedInput::parse("1,2,5", &kata());
        assert!(!parsed.delimiters.is_custom());
        assert_eq!(parsed.delimiters.to_vec(), vec![",".to_string()]);
        assert_eq!(parsed.body, "1,2,5");
    }

    #[test]
    fn test_single_custom_delimiter() {
        let parsed = ParsedInput::parse("//;\n1;3;4", &kata());
        assert!(parsed.delimiters.is_custom());
        assert_eq!(parsed.delimiters.to_vec(), vec![";".to_string()]);
        assert_eq!(parsed.body, "1;3;4");
    }

    #[test]
    fn test_multiple_custom_delimiters() {
        let parsed = ParsedInput::parse("//$$$,@@\n1$$$2@@3", &kata());
        assert_eq!(
            parsed.delimiters.to_vec(),
            vec!["$$$".to_string(), "@@".to_string()]
        );
        assert_eq!(parsed.body, "1$$$2@@3");
    }

    #[test]
    fn test_header_without_body() {
        let parsed = ParsedInput::parse("//;\n", &kata());
        assert_eq!(parsed.delimiters.to_vec(), vec![";".to_string()]);
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_marker_without_newline_is_not_a_header() {
        let parsed = ParsedInput::parse("//;1;2", &kata());
        assert!(!parsed.delimiters.is_custom());
        assert_eq!(parsed.body, "//;1;2");
    }

    #[test]
    fn test_empty_header_falls_back_to_defaults() {
        let parsed = ParsedInput::parse("//\n1,2", &kata());
        assert!(!parsed.delimiters.is_custom());
        assert_eq!(parsed.body, "1,2");

        let parsed = ParsedInput::parse("//;,\n1;2", &kata());
        assert_eq!(parsed.delimiters.to_vec(), vec![";".to_string()]);
    }

    #[test]
    fn test_only_first_newline_ends_header() {
        let parsed = ParsedInput::parse("//;\n1;\n2;4", &kata());
        assert_eq!(parsed.body, "1;\n2;4");
    }

    #[test]
    fn test_custom_marker_and_list_separator() {
        let config = kata()
            .with_header_marker("#")
            .with_delimiter_list_separator('|');
        let parsed = ParsedInput::parse("#;|,\n1;2,3", &config);
        assert_eq!(
            parsed.delimiters.to_vec(),
            vec![";".to_string(), ",".to_string()]
        );
    }

    #[test]
    fn test_separators_append_newline() {
        let set = DelimiterSet::from_header(";", ',').unwrap();
        assert_eq!(set.separators(true).as_slice(), &[";", "\n"]);
        assert_eq!(set.separators(false).as_slice(), &[";"]);
    }

    #[test]
    fn test_separators_do_not_duplicate_newline() {
        let config = CalculatorConfig::new(vec![",".to_string(), "\n".to_string()]);
        let set = DelimiterSet::from_config(&config);
        assert_eq!(set.separators(true).as_slice(), &[",", "\n"]);
    }
}
