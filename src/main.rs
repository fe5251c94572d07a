//! Clock Radio Main Application
//!
//! Entry point for the STM32G474-based clock radio.
//! Initializes hardware, spawns one task per front-panel button and runs
//! the one-second control loop.
//!
//! | Signal              | Pin        | Notes                  |
//! |---------------------|------------|------------------------|
//! | Buttons A to D      | PC0 to PC3 | active low, pull-up    |
//! | Direction switch    | PC4        | high selects decrease  |
//! | Tuner SCL / SDA     | PB8 / PB9  | I2C1                   |
//! | Display SCL / SDA   | PA9 / PA8  | I2C2                   |

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Pull};
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use clock_radio::drivers::display::Display;
use clock_radio::hal::i2c::I2cBus;
use clock_radio::prelude::*;
use clock_radio::tuner::controller::{TunerController, TunerError};

/// Presses recorded by the button tasks, drained once per tick
static BUTTONS: ButtonLatch = ButtonLatch::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Clock Radio Firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // I2C1 for the tuner: PB8 = SCL, PB9 = SDA
    let tuner_i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8,
        p.PB9,
        Hertz(TUNER_I2C_FREQUENCY_HZ),
        Default::default(),
    );

    // I2C2 for the OLED: PA9 = SCL, PA8 = SDA
    let display_i2c = I2c::new_blocking(
        p.I2C2,
        p.PA9,
        p.PA8,
        Hertz(DISPLAY_I2C_FREQUENCY_HZ),
        Default::default(),
    );

    // Buttons are active low, direction switch high = decrease
    let button_a = ExtiInput::new(p.PC0, p.EXTI0, Pull::Up);
    let button_b = ExtiInput::new(p.PC1, p.EXTI1, Pull::Up);
    let button_c = ExtiInput::new(p.PC2, p.EXTI2, Pull::Up);
    let button_d = ExtiInput::new(p.PC3, p.EXTI3, Pull::Up);
    let direction_switch = Input::new(p.PC4, Pull::Down);

    spawner.spawn(button_task(button_a, Button::A)).unwrap();
    spawner.spawn(button_task(button_b, Button::B)).unwrap();
    spawner.spawn(button_task(button_c, Button::C)).unwrap();
    spawner.spawn(button_task(button_d, Button::D)).unwrap();

    let mut tuner = TunerController::new(I2cBus::new(tuner_i2c), Delay);
    if tuner.program().is_err() {
        warn!("tuner not responding at boot, retrying on the next tick");
    }

    let mut display = Display::new(display_i2c);
    if display.init().is_err() {
        warn!("display init failed");
    }

    let mut radio = ClockRadio::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    info!("Entering control loop");

    loop {
        ticker.next().await;

        let direction = Direction::from_switch(direction_switch.is_high());
        if let Err(TunerError::Transport { attempts, .. }) =
            radio.tick(BUTTONS.take(), direction, &mut tuner)
        {
            error!("tuner write failed after {} attempts", attempts);
        }

        let view = radio.view(direction, &tuner.state());
        if display.show(&view).is_err() {
            warn!("display update failed");
        }
    }
}

/// Latch presses of one button, debounced
#[embassy_executor::task(pool_size = 4)]
async fn button_task(mut input: ExtiInput<'static>, button: Button) {
    loop {
        input.wait_for_falling_edge().await;
        BUTTONS.press(button);
        trace!("{} pressed", button);
        Timer::after_millis(BUTTON_DEBOUNCE_MS).await;
        input.wait_for_high().await;
    }
}
