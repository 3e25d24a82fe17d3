//! Native title bar colours through the Desktop Window Manager

use std::{ffi::c_void, mem::size_of};

use windows_sys::Win32::{
    Foundation::HWND,
    Graphics::Dwm::{DwmSetWindowAttribute, DWMWA_CAPTION_COLOR, DWMWA_USE_IMMERSIVE_DARK_MODE},
    System::Console::GetConsoleWindow,
};

use super::{PlatformError, TitleBarTint};
use crate::tasks::flash::TitleColor;

/// Attribute id used for dark mode before Windows 10 20H1
const DWMWA_USE_IMMERSIVE_DARK_MODE_LEGACY: i32 = 19;

pub struct DwmTitleBar {
    hwnd: HWND,
}

impl DwmTitleBar {
    /// Tint the console window hosting this process
    pub fn for_console() -> Self {
        let hwnd = unsafe { GetConsoleWindow() };
        Self { hwnd }
    }

    fn set_attribute<T>(&self, attribute: i32, value: &T) -> Result<(), PlatformError> {
        if self.hwnd.is_null() {
            return Err(PlatformError::NoWindow);
        }
        let hr = unsafe {
            DwmSetWindowAttribute(
                self.hwnd,
                attribute,
                value as *const T as *const c_void,
                size_of::<T>() as u32,
            )
        };
        if hr < 0 {
            return Err(PlatformError::Call {
                api: "DwmSetWindowAttribute",
                code: hr,
            });
        }
        Ok(())
    }
}

impl TitleBarTint for DwmTitleBar {
    fn name(&self) -> &'static str {
        "dwm"
    }

    fn enable(&mut self) -> Result<(), PlatformError> {
        let on: u32 = 1;
        self.set_attribute(DWMWA_USE_IMMERSIVE_DARK_MODE as i32, &on)
            .or_else(|_| self.set_attribute(DWMWA_USE_IMMERSIVE_DARK_MODE_LEGACY, &on))
    }

    fn tint(&mut self, color: TitleColor) -> Result<(), PlatformError> {
        let (r, g, b) = color.rgb();
        // COLORREF is 0x00BBGGRR
        let colorref: u32 = (r as u32) | ((g as u32) << 8) | ((b as u32) << 16);
        self.set_attribute(DWMWA_CAPTION_COLOR as i32, &colorref)
    }
}
