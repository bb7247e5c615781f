pub mod luma_model;
pub mod pixel;
