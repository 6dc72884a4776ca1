//! Responsive multi-item carousel
//!
//! The carousel shows one, two or three slides at a time depending on the
//! viewport width, tracks the index of the leftmost visible slide and
//! advances on its own every few seconds when left alone.
//!
//! # Layers
//!
//! - `layout` - Pure paging math (page size, bounds, offsets, labels)
//! - `surface` - Rendering target the controller writes to
//! - `timer` - Cancellable recurring auto-advance schedule
//! - `controller` - State owner combining the three
//!
//! # Usage
//!
//! ```ignore
//! use marquee_core::carousel::{CarouselController, CarouselSettings, HeadlessSurface, ManualTimer};
//!
//! let mut carousel = CarouselController::new(
//!     7,
//!     1280,
//!     CarouselSettings::default(),
//!     HeadlessSurface::new(),
//!     ManualTimer::new(),
//! );
//! carousel.go_next();
//! assert_eq!(carousel.current_index(), 1);
//! ```

pub mod controller;
pub mod layout;
pub mod surface;
pub mod timer;

pub use controller::{CarouselController, CarouselEvent, CarouselSettings};
pub use layout::{Breakpoints, PageSize};
pub use surface::{CarouselSurface, HeadlessSurface, Indicator};
pub use timer::{AutoAdvanceTimer, ManualTimer, TokioTimer};
