pub mod cpu;
pub mod machine;

pub use cpu::{Bus8080, Cpu8080, CpuError, Flags};
pub use machine::{CabinetInput, DipConfig, Machine, RomError};

/// Logical screen width in pixels (Space Invaders is 224x256, rotated).
pub const SCREEN_WIDTH: usize = 224;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
