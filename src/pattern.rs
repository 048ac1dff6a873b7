//! Pattern templates and lazy expansion
//!
//! A pattern is a template string with `{{...}}` placeholder tokens, parsed
//! once into a sequence of literal and placeholder segments and reused for
//! every substitution. Expansion walks the cartesian product of the
//! wordlist dimensions the pattern actually references, yielding one
//! substituted candidate at a time so the product is never materialized.
//!
//! Substitutable tokens are `{{word}}`, `{{number}}`, `{{region}}` and
//! `{{domain}}` (bound to the current base domain). Any other token,
//! `{{sub}}` included, passes through as literal text; such candidates are
//! later rejected by the grammar filter.

/// One parsed segment of a pattern template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Word,
    Number,
    Region,
    Domain,
}

/// A parsed pattern template.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a template into segments.
    ///
    /// Parsing never fails: malformed or unrecognized tokens are kept as
    /// literal text, matching plain textual substitution semantics.
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            let Some(close) = rest[open..].find("}}") else {
                break;
            };
            let close = open + close;
            let token = match &rest[open + 2..close] {
                "word" => Some(Segment::Word),
                "number" => Some(Segment::Number),
                "region" => Some(Segment::Region),
                "domain" => Some(Segment::Domain),
                _ => None,
            };

            match token {
                Some(segment) => {
                    literal.push_str(&rest[..open]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                // Unknown token ({{sub}} among them) stays literal.
                None => literal.push_str(&rest[..close + 2]),
            }
            rest = &rest[close + 2..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            raw: template.to_string(),
            segments,
        }
    }

    /// The original template string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    fn uses(&self, segment: &Segment) -> bool {
        self.segments.contains(segment)
    }

    pub fn uses_words(&self) -> bool {
        self.uses(&Segment::Word)
    }

    pub fn uses_numbers(&self) -> bool {
        self.uses(&Segment::Number)
    }

    pub fn uses_regions(&self) -> bool {
        self.uses(&Segment::Region)
    }

    /// Number of candidates this pattern will yield for one base domain.
    ///
    /// A referenced empty wordlist collapses the count to zero; an
    /// unreferenced wordlist contributes a factor of one regardless of its
    /// size. Saturates instead of overflowing.
    pub fn combination_count(&self, words: usize, numbers: usize, regions: usize) -> usize {
        let mut count = 1usize;
        if self.uses_words() {
            count = count.saturating_mul(words);
        }
        if self.uses_numbers() {
            count = count.saturating_mul(numbers);
        }
        if self.uses_regions() {
            count = count.saturating_mul(regions);
        }
        count
    }

    /// Lazily expand this pattern for one base domain.
    ///
    /// Combinations follow words → numbers → regions nesting order, with
    /// the rightmost referenced dimension varying fastest.
    pub fn expand<'a>(
        &'a self,
        base_domain: &'a str,
        words: &'a [String],
        numbers: &'a [String],
        regions: &'a [String],
    ) -> Expansion<'a> {
        let mut axes: Vec<&[String]> = Vec::with_capacity(3);
        let mut word_axis = None;
        let mut number_axis = None;
        let mut region_axis = None;

        if self.uses_words() {
            word_axis = Some(axes.len());
            axes.push(words);
        }
        if self.uses_numbers() {
            number_axis = Some(axes.len());
            axes.push(numbers);
        }
        if self.uses_regions() {
            region_axis = Some(axes.len());
            axes.push(regions);
        }

        Expansion {
            pattern: self,
            base_domain,
            product: CartesianProduct::new(axes),
            word_axis,
            number_axis,
            region_axis,
        }
    }
}

/// Lazy sequence of substituted candidates for one pattern and base domain.
pub struct Expansion<'a> {
    pattern: &'a Pattern,
    base_domain: &'a str,
    product: CartesianProduct<'a>,
    word_axis: Option<usize>,
    number_axis: Option<usize>,
    region_axis: Option<usize>,
}

impl<'a> Expansion<'a> {
    #[inline]
    fn axis_value(combo: &[&'a str], axis: Option<usize>) -> &'a str {
        axis.map(|i| combo[i]).unwrap_or("")
    }
}

impl<'a> Iterator for Expansion<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let combo = self.product.next()?;

        let mut candidate = String::with_capacity(self.pattern.raw.len() + self.base_domain.len());
        for segment in &self.pattern.segments {
            match segment {
                Segment::Literal(text) => candidate.push_str(text),
                Segment::Word => candidate.push_str(Self::axis_value(&combo, self.word_axis)),
                Segment::Number => candidate.push_str(Self::axis_value(&combo, self.number_axis)),
                Segment::Region => candidate.push_str(Self::axis_value(&combo, self.region_axis)),
                Segment::Domain => candidate.push_str(self.base_domain),
            }
        }

        Some(candidate)
    }
}

/// Odometer-style cartesian product over string-slice axes.
///
/// Yields one tuple of per-axis values at a time, rightmost axis varying
/// fastest. An empty axis collapses the whole product to the empty
/// sequence; zero axes yield exactly one empty tuple.
pub struct CartesianProduct<'a> {
    axes: Vec<&'a [String]>,
    counters: Vec<usize>,
    exhausted: bool,
}

impl<'a> CartesianProduct<'a> {
    pub fn new(axes: Vec<&'a [String]>) -> Self {
        let exhausted = axes.iter().any(|axis| axis.is_empty());
        Self {
            counters: vec![0; axes.len()],
            axes,
            exhausted,
        }
    }
}

impl<'a> Iterator for CartesianProduct<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let combo: Vec<&str> = self
            .counters
            .iter()
            .zip(&self.axes)
            .map(|(&c, axis)| axis[c].as_str())
            .collect();

        // Advance the odometer, rightmost digit first.
        let mut position = self.axes.len();
        loop {
            if position == 0 {
                self.exhausted = true;
                break;
            }
            position -= 1;
            self.counters[position] += 1;
            if self.counters[position] < self.axes[position].len() {
                break;
            }
            self.counters[position] = 0;
        }

        Some(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ── Parsing ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_literal_only() {
        let pattern = Pattern::parse("static.example.com");
        assert!(!pattern.uses_words());
        assert!(!pattern.uses_numbers());
        assert!(!pattern.uses_regions());
    }

    #[test]
    fn test_parse_recognized_tokens() {
        let pattern = Pattern::parse("{{word}}{{number}}.{{region}}.{{domain}}");
        assert!(pattern.uses_words());
        assert!(pattern.uses_numbers());
        assert!(pattern.uses_regions());
    }

    #[test]
    fn test_unknown_token_stays_literal() {
        let pattern = Pattern::parse("{{sub}}.{{word}}.{{domain}}");
        let out: Vec<String> = pattern
            .expand("cyble.com", &list(&["abc"]), &[], &[])
            .collect();
        assert_eq!(out, vec!["{{sub}}.abc.cyble.com"]);
    }

    #[test]
    fn test_unterminated_token_stays_literal() {
        let pattern = Pattern::parse("{{word.{{domain}}");
        let out: Vec<String> = pattern.expand("cyble.com", &[], &[], &[]).collect();
        // The span up to the first "}}" is not a recognized token name, so
        // the whole thing stays literal.
        assert_eq!(out, vec!["{{word.{{domain}}"]);
    }

    #[test]
    fn test_token_replaced_at_every_occurrence() {
        let pattern = Pattern::parse("{{word}}-{{word}}.{{domain}}");
        let out: Vec<String> = pattern
            .expand("cyble.com", &list(&["abc"]), &[], &[])
            .collect();
        assert_eq!(out, vec!["abc-abc.cyble.com"]);
    }

    // ── Expansion ───────────────────────────────────────────────────

    #[test]
    fn test_expand_word_domain() {
        let pattern = Pattern::parse("{{word}}.{{domain}}");
        let words = list(&["abc", "mail"]);
        let out: Vec<String> = pattern.expand("cyble.com", &words, &[], &[]).collect();
        assert_eq!(out, vec!["abc.cyble.com", "mail.cyble.com"]);
    }

    #[test]
    fn test_unreferenced_empty_lists_do_not_suppress() {
        // numbers and regions are empty but unreferenced: exactly one pass.
        let pattern = Pattern::parse("{{word}}.{{domain}}");
        let words = list(&["abc"]);
        let out: Vec<String> = pattern.expand("cyble.com", &words, &[], &[]).collect();
        assert_eq!(out, vec!["abc.cyble.com"]);
    }

    #[test]
    fn test_referenced_empty_list_collapses_product() {
        let pattern = Pattern::parse("{{word}}{{number}}.{{domain}}");
        let words = list(&["abc"]);
        let out: Vec<String> = pattern.expand("cyble.com", &words, &[], &[]).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_full_product_cardinality() {
        let pattern = Pattern::parse("{{word}}{{number}}.{{region}}.{{domain}}");
        let words = list(&["a", "b", "c"]);
        let numbers = list(&["1", "2"]);
        let regions = list(&["us", "eu"]);
        let out: Vec<String> = pattern
            .expand("cyble.com", &words, &numbers, &regions)
            .collect();
        assert_eq!(out.len(), 3 * 2 * 2);
    }

    #[test]
    fn test_nesting_order_words_numbers_regions() {
        let pattern = Pattern::parse("{{word}}{{number}}{{region}}.{{domain}}");
        let words = list(&["a", "b"]);
        let numbers = list(&["1", "2"]);
        let regions = list(&["x", "y"]);
        let out: Vec<String> = pattern
            .expand("d.com", &words, &numbers, &regions)
            .collect();
        // Regions vary fastest, then numbers, then words.
        assert_eq!(
            out,
            vec![
                "a1x.d.com", "a1y.d.com", "a2x.d.com", "a2y.d.com",
                "b1x.d.com", "b1y.d.com", "b2x.d.com", "b2y.d.com",
            ]
        );
    }

    #[test]
    fn test_literal_pattern_yields_single_pass() {
        let pattern = Pattern::parse("www.{{domain}}");
        let words = list(&["a", "b", "c"]);
        let out: Vec<String> = pattern.expand("cyble.com", &words, &[], &[]).collect();
        // No dimension referenced: one candidate, not one per word.
        assert_eq!(out, vec!["www.cyble.com"]);
    }

    // ── Combination counting ────────────────────────────────────────

    #[test]
    fn test_combination_count() {
        let pattern = Pattern::parse("{{word}}{{number}}.{{region}}.{{domain}}");
        assert_eq!(pattern.combination_count(10, 5, 3), 150);

        let pattern = Pattern::parse("{{word}}.{{domain}}");
        assert_eq!(pattern.combination_count(10, 0, 0), 10);

        let pattern = Pattern::parse("www.{{domain}}");
        assert_eq!(pattern.combination_count(0, 0, 0), 1);
    }

    #[test]
    fn test_combination_count_collapses_on_referenced_empty() {
        let pattern = Pattern::parse("{{word}}{{number}}.{{domain}}");
        assert_eq!(pattern.combination_count(10, 0, 7), 0);
    }

    #[test]
    fn test_combination_count_saturates() {
        let pattern = Pattern::parse("{{word}}{{number}}.{{region}}.{{domain}}");
        assert_eq!(
            pattern.combination_count(usize::MAX, usize::MAX, 2),
            usize::MAX
        );
    }

    // ── Cartesian product ───────────────────────────────────────────

    #[test]
    fn test_product_two_axes() {
        let a = list(&["1", "2"]);
        let b = list(&["x", "y", "z"]);
        let combos: Vec<Vec<&str>> =
            CartesianProduct::new(vec![a.as_slice(), b.as_slice()]).collect();
        assert_eq!(combos.len(), 6);
        assert_eq!(combos[0], vec!["1", "x"]);
        assert_eq!(combos[1], vec!["1", "y"]);
        assert_eq!(combos[5], vec!["2", "z"]);
    }

    #[test]
    fn test_product_empty_axis_collapses() {
        let a = list(&["1", "2"]);
        let empty: Vec<String> = Vec::new();
        let combos: Vec<Vec<&str>> =
            CartesianProduct::new(vec![a.as_slice(), empty.as_slice()]).collect();
        assert!(combos.is_empty());
    }

    #[test]
    fn test_product_no_axes_yields_one_empty_tuple() {
        let combos: Vec<Vec<&str>> = CartesianProduct::new(Vec::new()).collect();
        assert_eq!(combos, vec![Vec::<&str>::new()]);
    }

    #[test]
    fn test_product_single_axis() {
        let a = list(&["only"]);
        let combos: Vec<Vec<&str>> = CartesianProduct::new(vec![a.as_slice()]).collect();
        assert_eq!(combos, vec![vec!["only"]]);
    }
}
