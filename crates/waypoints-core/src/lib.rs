//! Waypoints Core Library
//!
//! A persisted collection of user-placed map markers addressed in projected
//! (fixed-point Mercator) coordinates, with proximity deletion, area clearing
//! and render enumeration for a map view.

pub mod codec;
pub mod config;
pub mod coord;
pub mod marker;
pub mod render;
pub mod storage;
pub mod store;

pub use codec::CodecError;
pub use config::{ConfigError, StoreConfig, DEFAULT_FILE_NAME};
pub use coord::{ProjectedCoord, ScreenPoint, ScreenTransform, Viewport};
pub use marker::Marker;
pub use render::{DrawCommand, MarkerCanvas, MarkerColor, MarkerStyle};
pub use storage::{FileStorage, MarkerStorage, MemoryStorage, StorageError, StorageResult};
pub use store::WaypointStore;
