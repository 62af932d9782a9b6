use logos::Logos;

#[derive(Debug, Logos)]
enum Token {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[error]
    Error,
}

// 生成先の言語 (Odin) の予約語。変数名として使うとコンパイルが通らない。
const KEYWORDS: &[&str] = &[
    "asm",
    "auto_cast",
    "bit_field",
    "bit_set",
    "break",
    "case",
    "cast",
    "context",
    "continue",
    "defer",
    "distinct",
    "do",
    "dynamic",
    "else",
    "enum",
    "fallthrough",
    "for",
    "foreign",
    "if",
    "import",
    "in",
    "map",
    "matrix",
    "not_in",
    "or_break",
    "or_continue",
    "or_else",
    "or_return",
    "package",
    "proc",
    "return",
    "struct",
    "switch",
    "transmute",
    "typeid",
    "union",
    "using",
    "when",
    "where",
];

/// 変数名として埋め込んでよい識別子かどうかを返す。
///
/// 文字列全体が単一の識別子トークンで、かつ予約語でない場合に限り true。
pub fn is_identifier(s: &str) -> bool {
    let mut lex = Token::lexer(s);

    let whole = matches!(lex.next(), Some(Token::Identifier)) && lex.span() == (0..s.len());

    whole && lex.next().is_none() && !KEYWORDS.contains(&s)
}
