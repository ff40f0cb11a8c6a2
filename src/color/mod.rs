mod hsv;
mod utils;

use smart_leds::RGB8;

pub use hsv::{Hsv, hsv2rgb, rgb2hsv};
pub use utils::{BLACK, peak, scale_color};

pub type Rgb = RGB8;
