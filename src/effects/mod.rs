pub(crate) mod composite;
pub(crate) mod edge;
pub(crate) mod kuwahara;
pub(crate) mod posterize;
pub(crate) mod shadow;
pub(crate) mod sketch;
pub(crate) mod sobel;
pub(crate) mod watercolor;
