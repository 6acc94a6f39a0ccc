pub mod add;
pub mod collect;
pub mod list;
