pub mod radio;
pub mod select;
pub mod slider;

pub use radio::RadioGroup;
pub use select::Select;
pub use slider::Slider;
