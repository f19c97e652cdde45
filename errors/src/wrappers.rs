use std::ops::Deref;

use crate::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedObject<T>(pub Span, pub T);

impl<T> SpannedObject<T> {
    pub fn native(t: T) -> Self {
        Self(Span::default(), t)
    }
}

impl<T> Deref for SpannedObject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.1
    }
}
