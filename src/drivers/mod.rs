//! Peripheral models: status-LED PWM and the alarm GPIO port.

pub mod gpio_port;
pub mod pwm;
