use std::{collections::HashMap, rc::Rc};

use errors::{already_declared, already_loaded, report_similar, Error, Span, SpannedObject};
use log::debug;

use crate::parser::{
    kind::KindDeclaration, token_utils::TokenStream, tokenize, TokenParser,
};

use super::kind::{Instance, Kind};

/// Registry of every loaded kind, keyed by name. Kinds are shared through
/// `Rc`, so every instance and every lookup reaches the same statics.
#[derive(Debug, Default)]
pub struct KindLoader {
    kinds: Vec<Rc<Kind>>,
    sources: HashMap<String, String>,
}

impl KindLoader {
    pub fn new() -> KindLoader {
        KindLoader::default()
    }

    /// Loads every kind declared in `source`. Nothing is registered unless
    /// the whole file loads.
    pub fn load_string(&mut self, source: &str, filename: &str) -> Result<(), Error> {
        if self.sources.contains_key(filename) {
            return Err(already_loaded(&Span::new(filename.to_owned(), 0, 0)));
        }
        let total = source.chars().count();
        let tokens = tokenize(source, filename)?;
        let declarations: Vec<KindDeclaration> =
            TokenStream::new(tokens, Span::new(filename.to_owned(), total, total)).parse()?;
        let mut batch: Vec<Rc<Kind>> = Vec::new();
        for declaration in declarations {
            let kind = self.build(declaration, &batch)?;
            batch.push(Rc::new(kind));
        }
        self.sources
            .insert(filename.to_owned(), source.to_owned());
        for kind in batch {
            self.register(kind);
        }
        Ok(())
    }

    #[allow(dead_code)]
    pub fn load(&mut self, declaration: KindDeclaration) -> Result<(), Error> {
        let kind = self.build(declaration, &[])?;
        self.register(Rc::new(kind));
        Ok(())
    }

    fn build(&self, declaration: KindDeclaration, pending: &[Rc<Kind>]) -> Result<Kind, Error> {
        if let Some(first) = self
            .kinds
            .iter()
            .chain(pending.iter())
            .find(|k| k.name.1 == declaration.name.1)
        {
            return Err(already_declared(
                "kind",
                &first.name.0,
                &declaration.name.0,
                &declaration.name.1,
            ));
        }
        Kind::from_declaration(declaration)
    }

    fn register(&mut self, kind: Rc<Kind>) {
        debug!(
            "loaded kind {} with statics [{}]",
            kind.name.1,
            kind.statics()
                .iter()
                .map(|x| format!("{} = {}", x.name.1, x.get()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.kinds.push(kind);
    }

    pub fn get_native(&self, name: &str) -> Result<Rc<Kind>, Error> {
        self.get(&SpannedObject::native(name.to_owned()))
    }

    pub fn get(&self, name: &SpannedObject<String>) -> Result<Rc<Kind>, Error> {
        self.kinds
            .iter()
            .find(|k| k.name.1 == name.1)
            .cloned()
            .ok_or_else(|| {
                report_similar(
                    "kind",
                    "kinds",
                    &name.0,
                    &name.1,
                    &self
                        .kinds
                        .iter()
                        .map(|k| k.name.1.clone())
                        .collect::<Vec<_>>(),
                    11,
                )
            })
    }

    pub fn instantiate(&self, name: &SpannedObject<String>) -> Result<Instance, Error> {
        let instance = Instance::new(self.get(name)?);
        debug!("new instance of {}", name.1);
        Ok(instance)
    }

    /// Source texts by file name, for rendering diagnostics.
    pub fn sources(&self) -> &HashMap<String, String> {
        &self.sources
    }
}
