use cssbench_harness::{
    black_box, Benchmark, BenchmarkCase, BenchmarkRunner, HarnessError, Payload,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    config::{CaseKind, Config},
    parser::{self, CssParser},
};

/// Words per generated token stream.
pub const STREAM_WORDS: usize = 1001;
/// Characters per generated word.
pub const WORD_LEN: usize = 10;

pub const IDENT_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";
pub const NUMBER_CHARSET: &[u8] = b"123456789";

fn random_word(rng: &mut impl Rng, charset: &[u8]) -> String {
    (0..WORD_LEN)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Space-separated random words drawn from `charset`.
pub fn random_words(seed: u64, charset: &[u8]) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..STREAM_WORDS)
        .map(|_| random_word(&mut rng, charset))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full stylesheet parse of the payload.
pub struct Parse<'a> {
    parser: &'a dyn CssParser,
    text: &'a str,
    rules: Option<usize>,
}

impl<'a> Parse<'a> {
    pub fn new(parser: &'a dyn CssParser, text: &'a str) -> Self {
        Self {
            parser,
            text,
            rules: None,
        }
    }

    /// Top-level rules seen by the last iteration, if it succeeded.
    pub fn rules(&self) -> Option<usize> {
        self.rules
    }
}

impl Benchmark for Parse<'_> {
    fn iter(&mut self) -> anyhow::Result<()> {
        self.rules = None;
        let sheet = self.parser.parse(black_box(self.text))?;
        self.rules = Some(black_box(sheet).rules);
        Ok(())
    }

    fn epilogue(&mut self) {
        if let Some(rules) = self.rules {
            log::info!("rules: {rules}");
        }
    }
}

/// Parse, minify and print the payload.
pub struct Minify<'a> {
    text: &'a str,
    output_len: Option<usize>,
}

impl<'a> Minify<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            output_len: None,
        }
    }

    /// Minified size of the last iteration, if it succeeded.
    pub fn output_len(&self) -> Option<usize> {
        self.output_len
    }
}

impl Benchmark for Minify<'_> {
    fn iter(&mut self) -> anyhow::Result<()> {
        self.output_len = None;
        let out = parser::minify(black_box(self.text))?;
        self.output_len = Some(black_box(out).len());
        Ok(())
    }

    fn epilogue(&mut self) {
        if let Some(len) = self.output_len {
            log::info!("minified size: {len} bytes");
        }
    }
}

/// Token walk over the payload.
pub struct Tokenize<'a> {
    text: &'a str,
    tokens: Option<usize>,
}

impl<'a> Tokenize<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, tokens: None }
    }

    /// Tokens counted by the last iteration, if it succeeded.
    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }
}

impl Benchmark for Tokenize<'_> {
    fn iter(&mut self) -> anyhow::Result<()> {
        self.tokens = None;
        self.tokens = Some(black_box(parser::count_tokens(black_box(self.text))?));
        Ok(())
    }

    fn epilogue(&mut self) {
        if let Some(tokens) = self.tokens {
            log::info!("tokens: {tokens}");
        }
    }
}

/// Token walk over a generated stream of random words.
pub struct TokenStream {
    seed: u64,
    charset: &'static [u8],
    text: String,
    tokens: Option<usize>,
}

impl TokenStream {
    pub fn new(seed: u64, charset: &'static [u8]) -> Self {
        Self {
            seed,
            charset,
            text: String::new(),
            tokens: None,
        }
    }

    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }
}

impl Benchmark for TokenStream {
    fn prologue(&mut self) {
        self.text = random_words(self.seed, self.charset);
    }

    fn iter(&mut self) -> anyhow::Result<()> {
        self.tokens = None;
        self.tokens = Some(black_box(parser::count_tokens(black_box(&self.text))?));
        Ok(())
    }

    fn epilogue(&mut self) {
        if let Some(tokens) = self.tokens {
            log::info!("tokens: {tokens}");
        }
        self.text = String::new();
    }
}

/// Register every configured case, in config order.
pub fn register_cases<'a>(
    runner: &mut BenchmarkRunner<'a>,
    config: &Config,
    payload: &'a Payload,
    css: &'a dyn CssParser,
) -> Result<(), HarnessError> {
    for case in &config.cases {
        let name = case.name().to_owned();
        let text = payload.as_str();
        let benchmark = match case.kind {
            CaseKind::Parse => BenchmarkCase::new(name, case.iterations, Parse::new(css, text)),
            CaseKind::Minify => BenchmarkCase::new(name, case.iterations, Minify::new(text)),
            CaseKind::Tokenize => BenchmarkCase::new(name, case.iterations, Tokenize::new(text)),
            CaseKind::IdentStream => BenchmarkCase::new(
                name,
                case.iterations,
                TokenStream::new(config.seed, IDENT_CHARSET),
            ),
            CaseKind::NumberStream => BenchmarkCase::new(
                name,
                case.iterations,
                TokenStream::new(config.seed, NUMBER_CHARSET),
            ),
        };
        runner.add(benchmark.with_warmup(case.warmup))?;
    }
    Ok(())
}
