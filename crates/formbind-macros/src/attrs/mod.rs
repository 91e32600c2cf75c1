mod container;
mod field;
mod rename_all;

pub use container::ContainerAttrs;
pub use field::FieldAttrs;
pub use rename_all::RenameAll;
