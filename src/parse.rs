use std::io::BufRead;

use logos::{Lexer, Logos};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {lineno}: parse error: {msg}")]
    Parse { lineno: usize, msg: String },

    #[error("missing package header")]
    MissingHeader,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// 生成済みファイルを読み戻したもの。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    pub package: String,
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Logos)]
enum Token {
    #[token("package")]
    KeywordPackage,

    #[token(":=")]
    Define,

    #[token("[]byte")]
    ByteSlice,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u8>())]
    Number(u8),

    #[error]
    #[regex(r"[ \t\r]+", logos::skip)]
    Error,
}

/// `bundle` が書き出した形式のファイルを解析する。
///
/// 変数名は識別子の文法に従っている必要がある (strict モードで生成したものは常に読める)。
pub fn parse<R: BufRead>(rdr: R) -> ParseResult<Document> {
    let mut package = None;
    let mut entries = vec![];

    for (i, line) in rdr.lines().enumerate() {
        let lineno = i + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut lex = Token::lexer(line.as_str());
        let lex = &mut lex;

        if package.is_none() {
            expect_package(lineno, lex)?;
            let name = expect_identifier(lineno, lex)?;
            expect_end(lineno, lex)?;
            package = Some(name);
        } else {
            entries.push(parse_entry(lineno, lex)?);
        }
    }

    let package = package.ok_or(ParseError::MissingHeader)?;

    Ok(Document { package, entries })
}

fn parse_entry(lineno: usize, lex: &mut Lexer<Token>) -> ParseResult<Entry> {
    let name = expect_identifier(lineno, lex)?;
    expect(lineno, lex, "':='", |t| matches!(t, Token::Define))?;
    expect(lineno, lex, "'[]byte'", |t| matches!(t, Token::ByteSlice))?;
    expect(lineno, lex, "'{'", |t| matches!(t, Token::BraceOpen))?;

    let mut bytes = vec![];
    match lex.next() {
        Some(Token::BraceClose) => {}
        Some(Token::Number(b)) => {
            bytes.push(b);
            loop {
                match lex.next() {
                    Some(Token::Comma) => bytes.push(expect_number(lineno, lex)?),
                    Some(Token::BraceClose) => break,
                    _ => return Err(unexpected(lineno, lex, "',' or '}'")),
                }
            }
        }
        _ => return Err(unexpected(lineno, lex, "number or '}'")),
    }

    expect_end(lineno, lex)?;

    Ok(Entry { name, bytes })
}

fn expect_package(lineno: usize, lex: &mut Lexer<Token>) -> ParseResult<()> {
    if let Some(Token::KeywordPackage) = lex.next() {
        Ok(())
    } else {
        Err(unexpected(lineno, lex, "'package'"))
    }
}

fn expect_identifier(lineno: usize, lex: &mut Lexer<Token>) -> ParseResult<String> {
    if let Some(Token::Identifier(name)) = lex.next() {
        Ok(name)
    } else {
        Err(unexpected(lineno, lex, "identifier"))
    }
}

fn expect_number(lineno: usize, lex: &mut Lexer<Token>) -> ParseResult<u8> {
    if let Some(Token::Number(b)) = lex.next() {
        Ok(b)
    } else {
        Err(unexpected(lineno, lex, "number (0..=255)"))
    }
}

fn expect(
    lineno: usize,
    lex: &mut Lexer<Token>,
    what: &str,
    pred: impl Fn(&Token) -> bool,
) -> ParseResult<()> {
    match lex.next() {
        Some(ref token) if pred(token) => Ok(()),
        _ => Err(unexpected(lineno, lex, what)),
    }
}

fn expect_end(lineno: usize, lex: &mut Lexer<Token>) -> ParseResult<()> {
    if lex.next().is_none() {
        Ok(())
    } else {
        Err(unexpected(lineno, lex, "end of line"))
    }
}

fn unexpected(lineno: usize, lex: &Lexer<Token>, what: &str) -> ParseError {
    let got = if lex.slice().is_empty() {
        "end of line"
    } else {
        lex.slice()
    };

    ParseError::Parse {
        lineno,
        msg: format!("expected {}, but got: {}", what, got),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_document() {
        let src = "package assets\nicon := []byte{0,255,16}\nfont := []byte{1}\nx := []byte{}\n";
        let doc = parse(src.as_bytes()).unwrap();

        assert_eq!(doc.package, "assets");
        assert_eq!(
            doc.entries,
            vec![
                Entry {
                    name: "icon".to_owned(),
                    bytes: vec![0, 255, 16],
                },
                Entry {
                    name: "font".to_owned(),
                    bytes: vec![1],
                },
                Entry {
                    name: "x".to_owned(),
                    bytes: vec![],
                },
            ]
        );
    }

    #[test]
    fn header_only() {
        let doc = parse("package assets\n".as_bytes()).unwrap();
        assert_eq!(doc.package, "assets");
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn missing_header() {
        assert!(matches!(parse("".as_bytes()), Err(ParseError::MissingHeader)));
        assert!(matches!(
            parse("icon := []byte{1}\n".as_bytes()),
            Err(ParseError::Parse { lineno: 1, .. })
        ));
    }

    #[test]
    fn byte_out_of_range() {
        let err = parse("package assets\nx := []byte{256}\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Parse { lineno: 2, .. }));
    }

    #[test]
    fn trailing_comma() {
        let err = parse("package assets\nx := []byte{1,}\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Parse { lineno: 2, .. }));
    }

    #[test]
    fn trailing_garbage() {
        let err = parse("package assets\nx := []byte{1} y\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Parse { lineno: 2, .. }));
    }
}
