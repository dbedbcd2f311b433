pub(crate) mod buffers;
pub(crate) mod plane;
