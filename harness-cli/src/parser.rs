//! Adapters over the external CSS libraries.
//!
//! The harness only needs to know whether a parse succeeded. Stylesheet
//! parsing goes through the [`CssParser`] capability so another parser can be
//! measured without touching the runner. Token walking uses `cssparser`
//! directly.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

/// Opaque summary of a parsed stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSheet {
    /// Number of top-level rules
    pub rules: usize,
}

pub trait CssParser {
    fn parse(&self, text: &str) -> anyhow::Result<ParsedSheet>;
}

/// The lightningcss stylesheet parser, with error recovery disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct LightningCss;

impl CssParser for LightningCss {
    fn parse(&self, text: &str) -> anyhow::Result<ParsedSheet> {
        let sheet = StyleSheet::parse(text, ParserOptions::default())
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(ParsedSheet {
            rules: sheet.rules.0.len(),
        })
    }
}

/// Parse, minify and print a stylesheet. Returns the minified text.
pub fn minify(text: &str) -> anyhow::Result<String> {
    let mut sheet = StyleSheet::parse(text, ParserOptions::default())
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let out = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(out.code)
}

/// Deepest block nesting [`count_tokens`] descends into.
pub const MAX_NESTING: usize = 256;

/// Count every token of `text`, including whitespace, comments and the
/// contents of nested blocks. Fails on blocks nested deeper than
/// [`MAX_NESTING`].
pub fn count_tokens(text: &str) -> anyhow::Result<usize> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    walk_tokens(&mut parser, 0).map_err(|e| match e.kind {
        ParseErrorKind::Custom(()) => anyhow::anyhow!("nesting deeper than {MAX_NESTING}"),
        kind => anyhow::anyhow!("{kind:?}"),
    })
}

fn walk_tokens<'i>(
    parser: &mut Parser<'i, '_>,
    depth: usize,
) -> Result<usize, ParseError<'i, ()>> {
    if depth > MAX_NESTING {
        return Err(parser.new_custom_error(()));
    }
    let mut count = 0;
    loop {
        let opens_block = match parser.next_including_whitespace_and_comments() {
            Ok(token) => matches!(
                token,
                Token::Function(_)
                    | Token::ParenthesisBlock
                    | Token::SquareBracketBlock
                    | Token::CurlyBracketBlock
            ),
            // End of input
            Err(_) => return Ok(count),
        };
        count += 1;
        if opens_block {
            count += parser.parse_nested_block(|nested| walk_tokens(nested, depth + 1))?;
        }
    }
}
