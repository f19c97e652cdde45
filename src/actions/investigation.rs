use either::Either;
use errors::{Error, SpannedObject};
use log::debug;

use crate::kinds::{
    kind::{post_increment, read, Instance},
    kind_loader::KindLoader,
};

use super::run_context::RunContext;

pub const KIND_NAME: &str = "StaticDemo";
pub const FIELD_NAME: &str = "i";
pub const INSTANCE_COUNT: usize = 3;

/// Prints the shared static through three instances, bumps it through the
/// second instance, prints again, bumps it through the kind, prints again.
pub fn investigate(cl: &KindLoader, ctx: &mut impl RunContext) -> Result<(), Error> {
    let kind_name = SpannedObject::native(KIND_NAME.to_owned());
    let field = SpannedObject::native(FIELD_NAME.to_owned());

    let instances = (0..INSTANCE_COUNT)
        .map(|_| cl.instantiate(&kind_name))
        .collect::<Result<Vec<_>, _>>()?;
    print_all(&instances, &field, ctx)?;

    let old = post_increment(Either::Left(&instances[1]), &field)?;
    debug!("incremented through instance 2, was {}", old);
    print_all(&instances, &field, ctx)?;

    let kind = cl.get_native(KIND_NAME)?;
    let old = post_increment(Either::Right(&*kind), &field)?;
    debug!("incremented through {}, was {}", KIND_NAME, old);
    print_all(&instances, &field, ctx)
}

fn print_all(
    instances: &[Instance],
    field: &SpannedObject<String>,
    ctx: &mut impl RunContext,
) -> Result<(), Error> {
    for (label, instance) in instances.iter().enumerate() {
        ctx.print(&format!(
            "Static {} {}:{}",
            label + 1,
            field.1,
            read(Either::Left(instance), field)?
        ));
    }
    Ok(())
}
