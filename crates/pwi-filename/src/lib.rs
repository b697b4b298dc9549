pub use filename::{DISTRIBUTIONS, WheelFilename, WheelFilenameError};
pub use wheel::{Wheel, WheelError, parse_wheel_filenames};

mod filename;
mod wheel;
