use anyhow::{bail, Context, Result};
use invaders_core::Machine;

/// Frames to run when no count is given: one minute of emulated time.
const DEFAULT_FRAMES: u32 = 3600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        bail!("usage: invaders <rom-image> [frames]");
    };
    let frames = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid frame count {arg:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM image {rom_path}"))?;

    let mut machine = Machine::new();
    machine.load_rom(&rom)?;

    let mut total_cycles: u64 = 0;
    for frame in 0..frames {
        let cycles = machine
            .run_frame()
            .with_context(|| format!("emulation aborted in frame {frame}"))?;
        total_cycles += u64::from(cycles);

        if frame % 60 == 59 {
            log::info!(
                "frame {}: pc={:04x} sp={:04x} cycles={}",
                frame + 1,
                machine.cpu().pc,
                machine.cpu().sp,
                total_cycles
            );
        }
    }

    log::info!("ran {frames} frames ({total_cycles} cycles)");
    Ok(())
}
