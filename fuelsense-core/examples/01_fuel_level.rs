//! Fuel Level Example
//!
//! Simulates a 10 L tank draining over two minutes while the fuel sender
//! sloshes, and shows how the low-pass filter hides the slosh from the
//! consumed figure.
//!
//! ## What You'll Learn
//!
//! - Building a configuration from named parameters
//! - Injecting an analog source and a clock
//! - Reading the monitor state and the per-cycle report
//! - What a dropped channel looks like
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_fuel_level
//! ```

use fuelsense_core::{
    AnalogSource, FuelLevelConfig, FuelLevelEstimator, MockClock, MonitorBackend,
};

/// Sender on a draining tank with slosh on top
struct SimulatedSender {
    level: f32,
    tick: u32,
    connected: bool,
}

impl SimulatedSender {
    const EMPTY_V: f32 = 0.5;
    const FULL_V: f32 = 2.5;

    fn voltage(&self) -> f32 {
        let slosh = 0.15 * ((self.tick as f32) * 1.7).sin();
        Self::EMPTY_V + self.level * (Self::FULL_V - Self::EMPTY_V) + slosh
    }
}

impl AnalogSource for SimulatedSender {
    fn select_channel(&mut self, _pin: i16) -> bool {
        self.connected
    }

    fn voltage_average(&mut self) -> f32 {
        self.voltage()
    }
}

fn main() {
    println!("FuelSense Fuel Level Example");
    println!("============================\n");

    let mut config = FuelLevelConfig::default();
    let params = [
        ("FL_PIN", 14.0),
        ("FL_VLT_MIN", SimulatedSender::EMPTY_V),
        ("FL_V_MULT", 1.0 / (SimulatedSender::FULL_V - SimulatedSender::EMPTY_V)),
        ("FL_FLTR", 0.3),
        ("CAPACITY", 10_000.0),
    ];
    for (name, value) in params {
        if let Err(e) = config.set(name, value) {
            println!("  rejected {} = {}: {}", name, value, e);
        }
    }

    println!("Configuration:");
    println!("  Pin: {}", config.pin);
    println!("  Empty voltage: {:.2} V", config.empty_voltage);
    println!("  Multiplier: {:.2}", config.voltage_mult);
    println!("  Filter: {:.2} Hz", config.filter_hz);
    println!("  Capacity: {:.0} mL\n", config.capacity);

    let clock = MockClock::new(0);
    let sender = SimulatedSender { level: 1.0, tick: 0, connected: true };
    let mut estimator = FuelLevelEstimator::new(config, sender, &clock);

    println!("{:>6} {:>8} {:>8} {:>10} {:>6}", "t(s)", "raw V", "filt V", "used mL", "left%");

    // 10 Hz for two minutes
    for tick in 0..1200u32 {
        {
            let sender = estimator.analog_mut();
            sender.tick = tick;
            sender.level = 1.0 - tick as f32 / 1500.0;
            // Unplug the sender for a couple of seconds
            sender.connected = !(600..620).contains(&tick);
        }

        estimator.read();

        if tick % 100 == 0 || tick == 605 {
            let state = estimator.state();
            let raw = estimator.last_report().map(|r| r.raw_voltage).unwrap_or(0.0);
            let left = estimator
                .capacity_remaining_pct()
                .map(|pct| pct.to_string())
                .unwrap_or_else(|| "--".to_string());
            println!(
                "{:>6.1} {:>8.3} {:>8.3} {:>10.0} {:>6} {}",
                tick as f32 / 10.0,
                raw,
                state.voltage,
                state.consumed_mah(),
                left,
                if state.healthy { "" } else { "(sensor lost)" },
            );
        }

        clock.advance_ms(100);
    }

    println!("\nFinal consumed: {:.0} mL", estimator.state().consumed_mah());
}
