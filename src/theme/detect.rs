//! 系统主题检测

use std::process::Command;

/// 检测系统是否为深色模式
///
/// macOS reads `AppleInterfaceStyle`; elsewhere the terminal's `COLORFGBG`
/// hint is used. With no hint at all the terminal is assumed dark.
pub fn detect_system_theme() -> bool {
    if cfg!(target_os = "macos") {
        // AppleInterfaceStyle 不存在（命令失败）即为浅色模式
        return Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false);
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| colorfgbg_is_dark(&v))
        .unwrap_or(true)
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"); ANSI background
/// 0-6 and 8 are dark
fn colorfgbg_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_system_theme() {
        // 只是确保函数不会 panic
        let _is_dark = detect_system_theme();
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(colorfgbg_is_dark("15;0"), Some(true));
        assert_eq!(colorfgbg_is_dark("0;15"), Some(false));
        assert_eq!(colorfgbg_is_dark("15;default;0"), Some(true));
        assert_eq!(colorfgbg_is_dark("garbage"), None);
    }
}
