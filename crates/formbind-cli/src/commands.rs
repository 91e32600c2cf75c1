pub mod join;
pub mod split;
pub mod tree;
