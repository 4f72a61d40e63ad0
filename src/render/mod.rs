pub(crate) mod compare;
pub(crate) mod cpu;
pub(crate) mod font;
pub(crate) mod raster;
