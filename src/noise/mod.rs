pub(crate) mod hash;
