pub mod gen;
pub mod hwinfo;
pub mod inspect;
pub mod ops;
