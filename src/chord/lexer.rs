/// Token types for the alteration part of a chord symbol
#[derive(Debug, Clone, PartialEq)]
pub enum AltToken {
    Sharp,          // #
    Flat,           // b
    Add,            // add (any case)
    Maj,            // maj (any case)
    Major,          // M
    Sus,            // sus (any case)
    Number(u32),    // 5, 9, 11, 13, ...
    Text(String),   // anything else, kept for error reporting
}

impl AltToken {
    /// Tokens that may open an alteration.
    pub fn is_delimiter(&self) -> bool {
        !matches!(self, AltToken::Number(_) | AltToken::Text(_))
    }
}

impl std::fmt::Display for AltToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AltToken::Sharp => write!(f, "#"),
            AltToken::Flat => write!(f, "b"),
            AltToken::Add => write!(f, "add"),
            AltToken::Maj => write!(f, "maj"),
            AltToken::Major => write!(f, "M"),
            AltToken::Sus => write!(f, "sus"),
            AltToken::Number(n) => write!(f, "{}", n),
            AltToken::Text(text) => write!(f, "{}", text),
        }
    }
}

const WORDS: [(&str, AltToken); 3] = [
    ("add", AltToken::Add),
    ("maj", AltToken::Maj),
    ("sus", AltToken::Sus),
];

/// Lexer for the alterations following a chord's quality and extension
pub struct AltLexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
}

impl<'a> AltLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Word delimiter at the current position, compared case-insensitively.
    fn check_word(&self) -> Option<(usize, AltToken)> {
        let remaining = &self.input[self.position..];
        WORDS.iter().find_map(|(word, token)| {
            remaining
                .get(..word.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(word))
                .map(|_| (word.len(), token.clone()))
        })
    }

    fn at_token_start(&mut self) -> bool {
        if self.check_word().is_some() {
            return true;
        }
        matches!(self.peek(), Some(&c) if c == '#' || c == 'b' || c == 'M' || c.is_ascii_digit())
    }

    pub fn tokenize(&mut self) -> Vec<AltToken> {
        let mut tokens = Vec::new();

        while let Some(&c) = self.peek() {
            // Words first so "maj" wins over "M"
            if let Some((len, token)) = self.check_word() {
                for _ in 0..len {
                    self.advance();
                }
                tokens.push(token);
                continue;
            }

            let token = match c {
                '#' => {
                    self.advance();
                    AltToken::Sharp
                }
                'b' => {
                    self.advance();
                    AltToken::Flat
                }
                'M' => {
                    self.advance();
                    AltToken::Major
                }
                '0'..='9' => {
                    let start = self.position;
                    while let Some(&d) = self.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        self.advance();
                    }
                    let digits = &self.input[start..self.position];
                    match digits.parse() {
                        Ok(n) => AltToken::Number(n),
                        // Only overflow lands here
                        Err(_) => AltToken::Text(digits.to_string()),
                    }
                }
                _ => {
                    let start = self.position;
                    self.advance();
                    while self.peek().is_some() && !self.at_token_start() {
                        self.advance();
                    }
                    AltToken::Text(self.input[start..self.position].to_string())
                }
            };
            tokens.push(token);
        }

        log::trace!("alteration tokens for '{}': {:?}", self.input, tokens);
        tokens
    }
}
