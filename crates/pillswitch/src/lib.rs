//! Pillswitch: a styleable, animated two-state toggle switch.
//!
//! ```
//! use pillswitch::prelude::*;
//!
//! let mut switch = ToggleSwitch::new().label("Wi-Fi");
//! switch.layout(Rect::new(0.0, 0.0, 120.0, 32.0));
//! assert_eq!(switch.toggle(), Some(Toggled { on: true }));
//!
//! let mut canvas = RecordingCanvas::new();
//! while switch.advance_frame(&mut canvas) {}
//! assert_eq!(switch.animation().current(), 21.0);
//! ```

pub use pillswitch_core::*;
pub use pillswitch_widgets as widgets;

/// Commonly used types.
pub mod prelude {
    pub use pillswitch_core::{
        Canvas, Color, Constraints, DrawCommand, Easing, Event, MouseButton, Point,
        RecordingCanvas, Rect, Size, Widget,
    };
    pub use pillswitch_widgets::{
        ConfigError, StyleChanged, StyleError, ToggleConfig, ToggleStyle, ToggleSwitch, Toggled,
    };
}
