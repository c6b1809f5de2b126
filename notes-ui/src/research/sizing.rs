/// Height rules for an auto-growing textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingProfile {
    pub min_height_px: i32,
    /// Added below the content so the last line stays visible.
    pub extra_px: i32,
}

impl SizingProfile {
    /// 2.5rem at a 16px root font.
    pub const REQUIREMENT: Self = Self {
        min_height_px: 40,
        extra_px: 0,
    };

    pub const OUTPUT: Self = Self {
        min_height_px: 200,
        extra_px: 20,
    };

    pub const NOTE: Self = Self {
        min_height_px: 0,
        extra_px: 0,
    };
}

pub fn fit_height(scroll_height: i32, profile: SizingProfile) -> i32 {
    (scroll_height + profile.extra_px).max(profile.min_height_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_never_shrinks_below_one_row() {
        assert_eq!(fit_height(0, SizingProfile::REQUIREMENT), 40);
        assert_eq!(fit_height(24, SizingProfile::REQUIREMENT), 40);
        assert_eq!(fit_height(96, SizingProfile::REQUIREMENT), 96);
    }

    #[test]
    fn output_keeps_bottom_padding() {
        assert_eq!(fit_height(0, SizingProfile::OUTPUT), 200);
        assert_eq!(fit_height(180, SizingProfile::OUTPUT), 200);
        assert_eq!(fit_height(600, SizingProfile::OUTPUT), 620);
    }

    #[test]
    fn note_follows_content() {
        assert_eq!(fit_height(18, SizingProfile::NOTE), 18);
    }
}
