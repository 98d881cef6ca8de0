//! Simulated hardware adapter — bridges the peripheral models to
//! [`ActuatorPort`].
//!
//! Owns the status-LED timer channel and alarm port D.  This is the only
//! module that touches (simulated) registers.

use embedded_hal::pwm::SetDutyCycle;
use log::trace;

use crate::app::ports::ActuatorPort;
use crate::config::SimConfig;
use crate::drivers::gpio_port::GpioPort;
use crate::drivers::pwm::SimPwmChannel;

pub struct SimHardware {
    status_pwm: SimPwmChannel,
    alarm_port: GpioPort,
}

impl SimHardware {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            status_pwm: SimPwmChannel::new(config.timer_reload),
            alarm_port: GpioPort::new('D'),
        }
    }

    pub fn status_pwm(&self) -> &SimPwmChannel {
        &self.status_pwm
    }

    pub fn alarm_port(&self) -> &GpioPort {
        &self.alarm_port
    }
}

impl ActuatorPort for SimHardware {
    fn set_status_ccr(&mut self, ccr: u16) {
        self.status_pwm
            .set_duty_cycle(ccr)
            .unwrap_or_else(|never| match never {});
        trace!("TIM CCR <- {}", ccr);
    }

    fn set_alarm_odr(&mut self, odr: u16) {
        self.alarm_port.write_odr(odr);
        trace!("GPIO{} ODR <- 0x{:04X}", self.alarm_port.name(), odr);
    }

    fn all_off(&mut self) {
        self.status_pwm
            .set_duty_cycle_fully_off()
            .unwrap_or_else(|never| match never {});
        self.alarm_port.clear();
    }
}
