pub mod carousel;
pub mod config;
pub mod error;
pub mod slides;

pub use carousel::{
    CarouselController, CarouselEvent, CarouselSettings, CarouselSurface, HeadlessSurface,
    ManualTimer, PageSize, TokioTimer,
};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use slides::{Slide, SlideDeck};
