mod operations;
pub(crate) mod support;
