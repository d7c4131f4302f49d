// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod nhtsa;

pub use clock::SystemClock;
pub use nhtsa::NhtsaCatalog;
