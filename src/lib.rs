#![forbid(unsafe_code)]

pub mod carousel;
pub mod catalog;
pub mod display;
pub mod ease;
pub mod error;
pub mod scene;
pub mod texture;
pub mod tween;

pub use carousel::{
    AUX_FADE_DURATION, CarouselController, CarouselPhase, CompletionSink, Direction, LinkArt,
    LinkOpener,
};
pub use catalog::{CatalogConfig, EntryConfig, GalleryCatalog, GalleryEntry};
pub use display::{CROSSFADE_DURATION, CrossfadeDisplay, DisplayUniforms};
pub use ease::Ease;
pub use error::{VitrineError, VitrineResult};
pub use scene::{AttachSet, Plane, PlaneId, Slot};
pub use texture::{TextureHandle, TextureLibrary};
pub use tween::{Progress, Tween};
