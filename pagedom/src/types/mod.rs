mod enums;

pub use enums::Display;
