pub mod input_area;
pub mod status_bar;
pub mod transport_bar;
pub mod voice_bar;
