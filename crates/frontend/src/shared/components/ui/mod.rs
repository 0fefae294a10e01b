pub mod input;
pub mod radio;

pub use input::FormInput;
pub use radio::RowRadio;
