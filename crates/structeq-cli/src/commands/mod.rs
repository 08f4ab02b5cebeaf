pub mod canonical;
pub mod compare;
