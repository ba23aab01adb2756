#[macro_use]
pub(crate) mod model;
