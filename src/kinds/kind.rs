use std::{cell::Cell, rc::Rc};

use either::Either;
use errors::{already_declared, report_similar, Error, SpannedObject};
use log::trace;

use crate::parser::kind::KindDeclaration;

/// A static field. The cell lives in the owning [`Kind`], so there is one
/// value per kind no matter how many instances exist.
#[derive(Debug)]
pub struct StaticField {
    pub name: SpannedObject<String>,
    value: Cell<i32>,
}

impl StaticField {
    pub fn new(name: SpannedObject<String>, value: i32) -> Self {
        Self {
            name,
            value: Cell::new(value),
        }
    }

    pub fn get(&self) -> i32 {
        self.value.get()
    }

    /// `field++`: stores the successor and yields the previous value.
    pub fn post_increment(&self) -> i32 {
        let old = self.value.get();
        self.value.set(old.wrapping_add(1));
        old
    }
}

#[derive(Debug)]
pub struct Kind {
    pub name: SpannedObject<String>,
    statics: Vec<StaticField>,
}

impl Kind {
    pub fn from_declaration(declaration: KindDeclaration) -> Result<Kind, Error> {
        let mut statics: Vec<StaticField> = Vec::new();
        for field in declaration.statics {
            if let Some(first) = statics.iter().find(|x| x.name.1 == field.name.1) {
                return Err(already_declared(
                    "static",
                    &first.name.0,
                    &field.name.0,
                    &field.name.1,
                ));
            }
            statics.push(StaticField::new(field.name, field.value.1));
        }
        Ok(Kind {
            name: declaration.name,
            statics,
        })
    }

    pub fn statics(&self) -> &[StaticField] {
        &self.statics
    }

    #[allow(dead_code)]
    pub fn get_static_native(&self, name: &str) -> Result<&StaticField, Error> {
        self.get_static(&SpannedObject::native(name.to_owned()))
    }

    pub fn get_static(&self, name: &SpannedObject<String>) -> Result<&StaticField, Error> {
        self.statics
            .iter()
            .find(|x| x.name.1 == name.1)
            .ok_or_else(|| {
                report_similar(
                    "static",
                    "statics",
                    &name.0,
                    &name.1,
                    &self
                        .statics
                        .iter()
                        .map(|x| x.name.1.clone())
                        .collect::<Vec<_>>(),
                    12,
                )
            })
    }
}

/// A handle on a kind. It owns nothing but the shared kind itself.
#[derive(Debug, Clone)]
pub struct Instance {
    kind: Rc<Kind>,
}

impl Instance {
    pub fn new(kind: Rc<Kind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }
}

/// Target of a static access: `instance.field` or `Kind.field`.
pub type Receiver<'a> = Either<&'a Instance, &'a Kind>;

fn resolve(receiver: Receiver<'_>) -> &Kind {
    receiver.either(Instance::kind, |kind| kind)
}

pub fn read(receiver: Receiver<'_>, name: &SpannedObject<String>) -> Result<i32, Error> {
    Ok(resolve(receiver).get_static(name)?.get())
}

pub fn post_increment(receiver: Receiver<'_>, name: &SpannedObject<String>) -> Result<i32, Error> {
    let kind = resolve(receiver);
    let old = kind.get_static(name)?.post_increment();
    trace!(
        "{}.{}++ through {}: {} -> {}",
        kind.name.1,
        name.1,
        if receiver.is_left() { "instance" } else { "kind" },
        old,
        old.wrapping_add(1)
    );
    Ok(old)
}
