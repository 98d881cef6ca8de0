//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements    | Connects to                  |
//! |----------------|---------------|------------------------------|
//! | `csv_source`   | SamplePort    | `patient_data.csv` on disk   |
//! | `console_sink` | StatusSink    | stdout                       |
//! | `sim_hardware` | ActuatorPort  | simulated TIM channel, GPIOD |

pub mod console_sink;
pub mod csv_source;
pub mod sim_hardware;
