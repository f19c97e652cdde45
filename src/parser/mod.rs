use std::collections::VecDeque;

use errors::{invalid_number, unclosed_block, unexpected_character, unmatched_close, Error, Span};

pub mod kind;
pub mod static_field;
pub mod token_utils;

pub trait TokenExtracter<T> {
    fn extract(&mut self) -> Result<T, Error>;
}

pub trait TokenParser<T> {
    fn parse(self) -> Result<T, Error>;
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Equals(Span),
    SemiColon(Span),
    Literal(Span, String),
    Keyword(Span, Keyword),
    Number(Span, i32),
    TypeName(Span, String),
    Block(Span, VecDeque<Token>),
    Comment(Span, String),
}

impl Token {
    pub fn span(&self) -> &Span {
        match self {
            Token::Equals(span)
            | Token::SemiColon(span)
            | Token::Literal(span, _)
            | Token::Keyword(span, _)
            | Token::Number(span, _)
            | Token::TypeName(span, _)
            | Token::Block(span, _)
            | Token::Comment(span, _) => span,
        }
    }

    /// Short rendering used in "found ..." labels.
    pub fn describe(&self) -> String {
        match self {
            Token::Equals(_) => "=".to_owned(),
            Token::SemiColon(_) => ";".to_owned(),
            Token::Literal(_, a) | Token::TypeName(_, a) => a.clone(),
            Token::Keyword(_, k) => k.as_str().to_owned(),
            Token::Number(_, n) => n.to_string(),
            Token::Block(..) => "{ ... }".to_owned(),
            Token::Comment(..) => "comment".to_owned(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Kind,
    Static,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Kind => "kind",
            Keyword::Static => "static",
        }
    }
}

fn validate(span: Span, word: String) -> Token {
    match word.as_str() {
        "kind" => Token::Keyword(span, Keyword::Kind),
        "static" => Token::Keyword(span, Keyword::Static),
        _ if word.starts_with(|c: char| c.is_ascii_uppercase()) => Token::TypeName(span, word),
        _ => Token::Literal(span, word),
    }
}

fn take_while(first: char, chars: &mut VecDeque<char>, accept: impl Fn(char) -> bool) -> String {
    let mut word = first.to_string();
    while let Some(&c) = chars.front() {
        if !accept(c) {
            break;
        }
        word.push(c);
        chars.pop_front();
    }
    word
}

/// Tokenizes `chars` into `token_map` until the input ends or a `}` closes the
/// current level, in which case the span of that brace is returned.
pub fn parse(
    token_map: &mut VecDeque<Token>,
    chars: &mut VecDeque<char>,
    total: usize,
    file: &str,
) -> Result<Option<Span>, Error> {
    let span = |start: usize, chars: &VecDeque<char>| {
        Span::new(file.to_owned(), start, total - chars.len())
    };
    while let Some(c) = chars.pop_front() {
        let start = total - chars.len() - 1;
        match c {
            '/' if chars.front() == Some(&'/') => {
                chars.pop_front();
                let mut comment = String::new();
                while let Some(c) = chars.pop_front() {
                    if c == '\n' {
                        break;
                    }
                    comment.push(c);
                }
                token_map.push_back(Token::Comment(span(start, chars), comment));
            }
            '{' => {
                let open = span(start, chars);
                let mut inside = VecDeque::new();
                match parse(&mut inside, chars, total, file)? {
                    Some(close) => token_map.push_back(Token::Block(open.merge(&close), inside)),
                    None => return Err(unclosed_block(&open)),
                }
            }
            '}' => return Ok(Some(span(start, chars))),
            ';' => token_map.push_back(Token::SemiColon(span(start, chars))),
            '=' => token_map.push_back(Token::Equals(span(start, chars))),
            'A'..='Z' | 'a'..='z' | '_' => {
                let word = take_while(c, chars, |c| c.is_ascii_alphanumeric() || c == '_');
                token_map.push_back(validate(span(start, chars), word));
            }
            '0'..='9' | '-' => {
                let literal = take_while(c, chars, |c| c.is_ascii_digit());
                let at = span(start, chars);
                let number = literal
                    .parse::<i32>()
                    .map_err(|_| invalid_number(&at, &literal))?;
                token_map.push_back(Token::Number(at, number));
            }
            c if c.is_whitespace() => (),
            c => return Err(unexpected_character(&span(start, chars), c)),
        }
    }
    Ok(None)
}

pub fn tokenize(source: &str, file: &str) -> Result<VecDeque<Token>, Error> {
    let mut chars: VecDeque<char> = source.chars().collect();
    let total = chars.len();
    let mut tokens = VecDeque::new();
    if let Some(close) = parse(&mut tokens, &mut chars, total, file)? {
        return Err(unmatched_close(&close));
    }
    Ok(tokens)
}
