mod carousel;
mod indicators;
mod status_bar;

pub use carousel::{slide_columns, CarouselWidget};
pub use indicators::IndicatorsWidget;
pub use status_bar::StatusBarWidget;
