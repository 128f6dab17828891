use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("val")]
    Val,
    #[terminal("def")]
    Def,
    #[terminal("data")]
    Data,
    #[terminal("fun")]
    Fun,
    #[terminal("let")]
    Let,
    #[terminal("in")]
    In,
    #[terminal("match")]
    MatchKeyword,
    #[terminal("with")]
    With,
    #[terminal("end")]
    End,
    #[terminal("if")]
    If,
    #[terminal("then")]
    Then,
    #[terminal("else")]
    Else,
    #[terminal("true")]
    True,
    #[terminal("false")]
    False,
    #[terminal("unit")]
    UnitKeyword,
    #[literal("[a-zA-Z_][a-zA-Z0-9_']*")]
    Ident,
    #[literal("[0-9]+")]
    Integer,
    #[literal(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[terminal("=>")]
    FatArrow,
    #[terminal("->")]
    ThinArrow,
    #[terminal("=")]
    Equals,
    #[terminal(":")]
    Colon,
    #[terminal(";")]
    Semicolon,
    #[terminal("|")]
    Pipe,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Val(inner) => inner.position.clone(),
            Token::Def(inner) => inner.position.clone(),
            Token::Data(inner) => inner.position.clone(),
            Token::Fun(inner) => inner.position.clone(),
            Token::Let(inner) => inner.position.clone(),
            Token::In(inner) => inner.position.clone(),
            Token::MatchKeyword(inner) => inner.position.clone(),
            Token::With(inner) => inner.position.clone(),
            Token::End(inner) => inner.position.clone(),
            Token::If(inner) => inner.position.clone(),
            Token::Then(inner) => inner.position.clone(),
            Token::Else(inner) => inner.position.clone(),
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::UnitKeyword(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Integer(inner) => inner.position.clone(),
            Token::StringLiteral(inner) => inner.position.clone(),
            Token::FatArrow(inner) => inner.position.clone(),
            Token::ThinArrow(inner) => inner.position.clone(),
            Token::Equals(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
            Token::Semicolon(inner) => inner.position.clone(),
            Token::Pipe(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Val(_) => "'val'".to_string(),
            Token::Def(_) => "'def'".to_string(),
            Token::Data(_) => "'data'".to_string(),
            Token::Fun(_) => "'fun'".to_string(),
            Token::Let(_) => "'let'".to_string(),
            Token::In(_) => "'in'".to_string(),
            Token::MatchKeyword(_) => "'match'".to_string(),
            Token::With(_) => "'with'".to_string(),
            Token::End(_) => "'end'".to_string(),
            Token::If(_) => "'if'".to_string(),
            Token::Then(_) => "'then'".to_string(),
            Token::Else(_) => "'else'".to_string(),
            Token::True(_) => "'true'".to_string(),
            Token::False(_) => "'false'".to_string(),
            Token::UnitKeyword(_) => "'unit'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Integer(inner) => format!("integer '{}'", inner.value),
            Token::StringLiteral(inner) => format!("string {}", inner.value),
            Token::FatArrow(_) => "'=>'".to_string(),
            Token::ThinArrow(_) => "'->'".to_string(),
            Token::Equals(_) => "'='".to_string(),
            Token::Colon(_) => "':'".to_string(),
            Token::Semicolon(_) => "';'".to_string(),
            Token::Pipe(_) => "'|'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}

/// Blank out `#` line comments, keeping newlines so spans stay on the right line.
///
/// A `#` inside a string literal is left alone.
pub fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut in_string = false;
    let mut in_comment = false;
    let mut escaped = false;

    for ch in source.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                result.push('\n');
            } else {
                result.push(' ');
            }
            continue;
        }

        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            result.push(ch);
            continue;
        }

        match ch {
            '#' => {
                in_comment = true;
                result.push(' ');
            }
            '"' => {
                in_string = true;
                result.push(ch);
            }
            _ => result.push(ch),
        }
    }

    result
}
