//! ToneSweepMeter - firmware entry point.
//!
//! Wires the control loop to the classic ESP32: button on a pulled-up
//! GPIO, microphone on ADC1 at 10-bit width, tone on the 8-bit DAC fed
//! by a render task on the second core, reports on a TX-only UART.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use core::ffi::c_void;
    use core::ptr;

    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::UartTxDriver;
    use esp_idf_svc::sys as esp;
    use esp_idf_svc::sys::{esp, EspError};

    use tone_sweep_meter::config::{
        BASE_FREQ_HZ, BUILTIN_LED_GPIO, BUTTON_GPIO, INDICATOR_GPIO, MIC_ADC1_CHANNEL,
        RENDER_BLOCK_SAMPLES, SAMPLE_RATE_HZ,
    };
    use tone_sweep_meter::{meter, serial, Sketch, SineOsc, ToneParams};
    use tone_sweep_meter::{Board, LOG_QUEUE};

    /// Oscillator command block shared between the loop and the render
    /// task. The loop writes, the render task reads, nothing comes back.
    static TONE: ToneParams = ToneParams::new(BASE_FREQ_HZ);

    /// Microseconds between DAC samples. Pacing is a spin delay inside
    /// the render task; the second core has nothing else to do.
    const US_PER_SAMPLE: u32 = 1_000_000 / SAMPLE_RATE_HZ;

    struct EspBoard<'d> {
        uart: UartTxDriver<'d>,
    }

    impl Board for EspBoard<'_> {
        fn millis(&self) -> u32 {
            // SAFETY: esp_timer_get_time is always safe to call.
            (unsafe { esp::esp_timer_get_time() } / 1000) as u32
        }

        fn read_mic(&mut self) -> u16 {
            let raw = unsafe { esp::adc1_get_raw(MIC_ADC1_CHANNEL) };
            meter::adc_sample(raw)
        }

        fn button_pressed(&mut self) -> bool {
            unsafe { esp::gpio_get_level(BUTTON_GPIO) == 0 }
        }

        fn set_indicator(&mut self, on: bool) {
            unsafe {
                esp::gpio_set_level(INDICATOR_GPIO, on as u32);
            }
        }

        fn set_builtin_led(&mut self, on: bool) {
            unsafe {
                esp::gpio_set_level(BUILTIN_LED_GPIO, on as u32);
            }
        }

        fn delay_ms(&mut self, ms: u32) {
            unsafe {
                esp::esp_rom_delay_us(ms * 1000);
            }
        }

        fn report(&mut self, peak_to_peak: u32) {
            serial::write_report(&mut self.uart, peak_to_peak);
        }
    }

    /// Configure button, LEDs, ADC width/attenuation and the DAC.
    fn configure_pins() -> Result<(), EspError> {
        unsafe {
            esp!(esp::gpio_set_direction(
                BUTTON_GPIO,
                esp::gpio_mode_t_GPIO_MODE_INPUT
            ))?;
            esp!(esp::gpio_set_pull_mode(
                BUTTON_GPIO,
                esp::gpio_pull_mode_t_GPIO_PULLUP_ONLY
            ))?;

            esp!(esp::gpio_set_direction(
                INDICATOR_GPIO,
                esp::gpio_mode_t_GPIO_MODE_OUTPUT
            ))?;
            esp!(esp::gpio_set_direction(
                BUILTIN_LED_GPIO,
                esp::gpio_mode_t_GPIO_MODE_OUTPUT
            ))?;

            esp!(esp::adc1_config_width(
                esp::adc_bits_width_t_ADC_WIDTH_BIT_10
            ))?;
            esp!(esp::adc1_config_channel_atten(
                MIC_ADC1_CHANNEL,
                esp::adc_atten_t_ADC_ATTEN_DB_11
            ))?;

            esp!(esp::dac_output_enable(esp::dac_channel_t_DAC_CHANNEL_1))?;
        }
        Ok(())
    }

    /// Tone render task, pinned to core 1.
    ///
    /// Fills blocks from the shared command state and pushes them to
    /// the DAC one sample at a time. Runs forever.
    extern "C" fn render_task(_arg: *mut c_void) {
        let mut osc = SineOsc::new(BASE_FREQ_HZ, SAMPLE_RATE_HZ);
        let mut block = [0i16; RENDER_BLOCK_SAMPLES];

        loop {
            osc.fill(&TONE, &mut block);
            for &sample in block.iter() {
                // i16 -> unsigned 8-bit DAC code, midpoint at 128
                let code = (((sample as i32) >> 8) + 128) as u8;
                unsafe {
                    esp::dac_output_voltage(esp::dac_channel_t_DAC_CHANNEL_1, code);
                    esp::esp_rom_delay_us(US_PER_SAMPLE);
                }
            }
        }
    }

    fn spawn_render_task() {
        unsafe {
            esp::xTaskCreatePinnedToCore(
                Some(render_task),
                b"tone_render\0".as_ptr().cast(),
                4096,
                ptr::null_mut(),
                5,
                ptr::null_mut(),
                1,
            );
        }
    }

    /// Init failure signal: there is no console yet, so flash the
    /// builtin LED forever.
    fn halt_blinking() -> ! {
        loop {
            unsafe {
                esp::gpio_set_level(BUILTIN_LED_GPIO, 1);
                esp::esp_rom_delay_us(100_000);
                esp::gpio_set_level(BUILTIN_LED_GPIO, 0);
                esp::esp_rom_delay_us(100_000);
            }
        }
    }

    #[no_mangle]
    fn main() {
        esp_idf_svc::sys::link_patches();

        if configure_pins().is_err() {
            halt_blinking();
        }

        let peripherals = match Peripherals::take() {
            Ok(p) => p,
            Err(_) => halt_blinking(),
        };

        let uart = match serial::init_serial(peripherals.uart1, peripherals.pins.gpio17) {
            Ok(uart) => uart,
            Err(_) => halt_blinking(),
        };

        spawn_render_task();

        let mut board = EspBoard { uart };
        let mut sketch = Sketch::setup(&mut board, &TONE, &LOG_QUEUE);

        loop {
            sketch.loop_iter(&mut board, &TONE);
            serial::drain_logs(&mut board.uart, &LOG_QUEUE);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("tone-sweep-meter is device firmware; build for the espidf target");
}
