// file: src/extractor/patterns.rs
// description: compiled regex patterns for the missing-document report format
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Three labelled lines, in order:
    //   Inicio da Nota Fiscal ......: 100
    //   Fim da Nota Fiscal .........: 105
    //   Qtde. de Notas Faltantes no Levantamento: 4
    // `\d` is Unicode-aware here; non-ASCII digits are caught when parsing.
    pub static ref MISSING_RANGE: Regex = Regex::new(concat!(
        r"(?i)",
        r"in[ií]cio\s+d[ao]\s+nota\s+fiscal[\s.]*:\s*(?P<start>\d+)",
        r"\s*",
        r"fim\s+d[ao]\s+nota\s+fiscal[\s.]*:\s*(?P<end>\d+)",
        r"\s*",
        r"(?:qtd|qtde|quantidade)\.?\s+(?:de\s+)?notas\s+faltantes\s+no\s+levantamento[\s.]*:\s*(?P<declared>\d+)",
    ))
    .expect("MISSING_RANGE regex is valid");

    pub static ref RANGE_START_LABEL: Regex = Regex::new(
        r"(?i)in[ií]cio\s+d[ao]\s+nota\s+fiscal"
    ).expect("RANGE_START_LABEL regex is valid");
}

/// Cheap pre-check: does the text mention the start label at all?
pub fn mentions_range_start(text: &str) -> bool {
    RANGE_START_LABEL.is_match(text)
}
