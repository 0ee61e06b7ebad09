pub(crate) mod driver;
pub(crate) mod opts;
mod passes;
mod ring;
