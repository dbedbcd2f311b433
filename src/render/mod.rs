pub(crate) mod kernel;
pub(crate) mod pipeline;
