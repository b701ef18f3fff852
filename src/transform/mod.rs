pub mod affine;
pub mod vector;
pub mod zoom;
