use errors::{Error, SpannedObject};

use super::{
    token_utils::{unexpected, TokenStream},
    Keyword, Token, TokenExtracter,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StaticDeclaration {
    pub name: SpannedObject<String>,
    pub value: SpannedObject<i32>,
}

impl TokenExtracter<StaticDeclaration> for TokenStream {
    fn extract(&mut self) -> Result<StaticDeclaration, Error> {
        match self.expect_token("keyword static")? {
            Token::Keyword(_, Keyword::Static) => (),
            e => return Err(unexpected(&e, "keyword static")),
        }
        let name = match self.expect_token("static name")? {
            Token::Literal(span, name) => SpannedObject(span, name),
            e => return Err(unexpected(&e, "static name")),
        };
        let value = match self.expect_token("= or ;")? {
            // Uninitialized statics start at zero.
            Token::SemiColon(_) => {
                return Ok(StaticDeclaration {
                    value: SpannedObject(name.0.clone(), 0),
                    name,
                })
            }
            Token::Equals(_) => match self.expect_token("number")? {
                Token::Number(span, n) => SpannedObject(span, n),
                e => return Err(unexpected(&e, "number")),
            },
            e => return Err(unexpected(&e, "= or ;")),
        };
        match self.expect_token(";")? {
            Token::SemiColon(_) => Ok(StaticDeclaration { name, value }),
            e => Err(unexpected(&e, ";")),
        }
    }
}
