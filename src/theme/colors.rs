//! 主题颜色定义
//!
//! `category_*` arrays are indexed by `Category::builtin_index()`:
//! Personal, Work, Urgent.

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(3, 102, 214),
        highlight: Color::Rgb(88, 166, 255), // 蓝色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(88, 166, 255),
        info: Color::Rgb(100, 181, 246),   // 蓝色
        warning: Color::Rgb(255, 213, 79), // 黄色
        error: Color::Rgb(255, 85, 85),    // 红色
        category_accents: [
            Color::Rgb(120, 175, 225), // sky
            Color::Rgb(185, 148, 225), // lavender
            Color::Rgb(235, 130, 130), // coral
        ],
        category_backgrounds: [
            Color::Rgb(28, 34, 45), // navy tint
            Color::Rgb(36, 28, 44), // purple tint
            Color::Rgb(45, 28, 28), // red tint
        ],
    }
}

/// 浅色主题
///
/// Row backgrounds: pale blue, lavender and pink per category.
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(240, 242, 245),           // #f0f2f5
        bg_secondary: Color::Rgb(241, 248, 255), // #f1f8ff 选中行
        logo: Color::Rgb(3, 102, 214),           // #0366d6
        highlight: Color::Rgb(3, 102, 214),
        text: Color::Rgb(26, 26, 26), // #1a1a1a
        muted: Color::Rgb(102, 102, 102),
        border: Color::Rgb(225, 228, 232), // #e1e4e8
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(3, 102, 214),
        info: Color::Rgb(33, 150, 243),   // 蓝色
        warning: Color::Rgb(255, 152, 0), // 橙黄色
        error: Color::Rgb(220, 53, 69),   // #dc3545
        category_accents: [
            Color::Rgb(25, 118, 210), // blue
            Color::Rgb(123, 31, 162), // purple
            Color::Rgb(211, 47, 47),  // red
        ],
        category_backgrounds: [
            Color::Rgb(227, 242, 253), // #e3f2fd
            Color::Rgb(243, 229, 245), // #f3e5f5
            Color::Rgb(255, 235, 238), // #ffebee
        ],
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),
        tab_active_fg: Color::Rgb(40, 42, 54),
        tab_active_bg: Color::Rgb(255, 121, 198),
        info: Color::Rgb(139, 233, 253),    // cyan
        warning: Color::Rgb(241, 250, 140), // yellow
        error: Color::Rgb(255, 85, 85),     // red
        category_accents: [
            Color::Rgb(139, 233, 253), // cyan
            Color::Rgb(189, 147, 249), // purple
            Color::Rgb(255, 85, 85),   // red
        ],
        category_backgrounds: [
            Color::Rgb(40, 46, 62), // cyan tint
            Color::Rgb(48, 42, 58), // purple tint
            Color::Rgb(56, 40, 46), // red tint
        ],
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        logo: Color::Rgb(136, 192, 208),      // frost
        highlight: Color::Rgb(129, 161, 193), // frost darker
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        tab_active_fg: Color::Rgb(46, 52, 64),
        tab_active_bg: Color::Rgb(136, 192, 208),
        info: Color::Rgb(136, 192, 208),    // frost
        warning: Color::Rgb(235, 203, 139), // aurora yellow
        error: Color::Rgb(191, 97, 106),    // aurora red
        category_accents: [
            Color::Rgb(136, 192, 208), // frost
            Color::Rgb(180, 142, 173), // aurora purple
            Color::Rgb(191, 97, 106),  // aurora red
        ],
        category_backgrounds: [
            Color::Rgb(48, 56, 66), // frost tint
            Color::Rgb(54, 50, 62), // purple tint
            Color::Rgb(58, 50, 56), // red tint
        ],
    }
}
