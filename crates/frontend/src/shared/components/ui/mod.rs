pub mod button;
pub mod range_slider;
pub mod textarea;

pub use button::Button;
pub use range_slider::RangeSlider;
pub use textarea::Textarea;
