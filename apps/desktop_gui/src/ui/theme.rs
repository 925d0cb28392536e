use eframe::egui::Color32;
use shared::domain::CounterTier;

pub const COUNTER_NORMAL: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const COUNTER_WARNING: Color32 = Color32::from_rgb(0xdd, 0x6b, 0x20);
pub const COUNTER_ALERT: Color32 = Color32::from_rgb(0xe5, 0x3e, 0x3e);

pub const ACCENT: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);
pub const COPIED: Color32 = Color32::from_rgb(0x48, 0xbb, 0x78);

pub const ERROR_FILL: Color32 = Color32::from_rgb(0xfe, 0xd7, 0xd7);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(0xe5, 0x3e, 0x3e);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0x9b, 0x2c, 0x2c);

pub const SAMPLE_FILL: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);
pub const SAMPLE_TEXT: Color32 = Color32::from_rgb(0x4a, 0x55, 0x68);

pub fn counter_color(tier: CounterTier) -> Color32 {
    match tier {
        CounterTier::Normal => COUNTER_NORMAL,
        CounterTier::Warning => COUNTER_WARNING,
        CounterTier::Alert => COUNTER_ALERT,
    }
}

pub fn copy_button_fill(copied: bool) -> Color32 {
    if copied {
        COPIED
    } else {
        ACCENT
    }
}
