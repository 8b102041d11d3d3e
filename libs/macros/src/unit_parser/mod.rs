mod attribute;
mod entry;
mod section;
mod type_transform;
mod unit;

pub(crate) use entry::gen_entry_derives;
pub(crate) use section::gen_section_derives;
pub(crate) use unit::gen_unit_derives;
