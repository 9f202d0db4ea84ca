//! Row to entity mappers

mod reaction;

pub use reaction::kind_from_column;
