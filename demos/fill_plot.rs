use std::error::Error;

use gnuplot::*;
use slot_ring::RingBuffer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // -----------------------
    // 1. Set up parameters
    // -----------------------
    let capacity = 16;
    let ticks = 400;
    // The producer writes a burst every tick, the consumer drains at a fixed rate.
    let burst = |tick: usize| if (tick / 50) % 2 == 0 { 3 } else { 0 };
    let reads_per_tick = 2;

    let mut buf = RingBuffer::new(capacity)?;

    // Prepare containers for results
    let mut time_axis = Vec::with_capacity(ticks);
    let mut fill = Vec::with_capacity(ticks);
    let mut evicted = Vec::with_capacity(ticks);

    // --------------------------------
    // 2. Run producer and consumer
    // --------------------------------
    let mut produced = 0u64;
    let mut consumed = 0u64;
    let mut total_evicted = 0u64;
    for tick in 0..ticks {
        for _ in 0..burst(tick) {
            if buf.is_full() {
                total_evicted += 1;
            }
            buf.force_write(produced);
            produced += 1;
        }

        for _ in 0..reads_per_tick {
            match buf.read() {
                Ok(_) => consumed += 1,
                Err(_) => break,
            }
        }

        time_axis.push(tick as f64);
        fill.push(buf.len() as f64);
        evicted.push(total_evicted as f64);
    }

    info!(produced, consumed, evicted = total_evicted, "simulation finished");
    if produced != consumed + total_evicted + buf.len() as u64 {
        warn!("value accounting does not add up");
    }

    // --------------
    // 3. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Ring buffer occupancy under forced writes", &[]);
        axes.set_x_label("Tick", &[]);
        axes.set_y_label("Values", &[]);
        axes.lines(&time_axis, &fill, &[Color("blue"), Caption("Occupied slots")]);
        axes.lines(&time_axis, &evicted, &[Color("red"), Caption("Evicted (cumulative)")]);
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!("Plot generated for {ticks} ticks at capacity {capacity}.");
    Ok(())
}
