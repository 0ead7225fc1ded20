mod coordinates;

pub use coordinates::*;
