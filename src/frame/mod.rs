pub mod capturer;
pub mod object;
