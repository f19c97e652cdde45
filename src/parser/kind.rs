use errors::{Error, Span, SpannedObject};

use super::{
    static_field::StaticDeclaration,
    token_utils::{unexpected, TokenStream},
    Keyword, Token, TokenExtracter, TokenParser,
};

#[derive(Debug, Clone, PartialEq)]
pub struct KindDeclaration {
    pub name: SpannedObject<String>,
    pub statics: Vec<StaticDeclaration>,
}

impl TokenExtracter<KindDeclaration> for TokenStream {
    fn extract(&mut self) -> Result<KindDeclaration, Error> {
        match self.expect_token("keyword kind")? {
            Token::Keyword(_, Keyword::Kind) => (),
            e => return Err(unexpected(&e, "keyword kind")),
        }
        let name = match self.expect_token("kind name")? {
            Token::TypeName(span, name) => SpannedObject(span, name),
            e => return Err(unexpected(&e, "kind name")),
        };
        let (span, inside) = match self.expect_token("{")? {
            Token::Block(span, inside) => (span, inside),
            e => return Err(unexpected(&e, "{")),
        };
        let mut body = TokenStream::new(inside, Span::new(span.file, span.end - 1, span.end));
        let mut statics: Vec<StaticDeclaration> = Vec::new();
        while !body.at_end() {
            statics.push(body.extract()?);
        }
        Ok(KindDeclaration { name, statics })
    }
}

impl TokenParser<Vec<KindDeclaration>> for TokenStream {
    fn parse(mut self) -> Result<Vec<KindDeclaration>, Error> {
        let mut kinds: Vec<KindDeclaration> = Vec::new();
        while !self.at_end() {
            kinds.push(self.extract()?);
        }
        Ok(kinds)
    }
}
