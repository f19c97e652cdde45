pub mod kind;
pub mod kind_loader;
