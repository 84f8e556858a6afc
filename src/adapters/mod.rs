//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements             | Connects to                 |
//! |---------------|------------------------|-----------------------------|
//! | `console`     | DisplayPort, LightPort | Simulated drivers           |
//! |               | HeatingElementPort     |                             |
//! |               | TimerPort              |                             |
//! | `stdout`      | OutputPort             | Process standard output     |
//! | `log_sink`    | EventSink              | `log` facade                |
//! | `config_file` | ConfigPort             | JSON file on disk           |

pub mod config_file;
pub mod console;
pub mod log_sink;
pub mod stdout;
