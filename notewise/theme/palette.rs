use crate::Mode;

/// Tailwind class tokens for one mode. Components pick from here instead of
/// branching on the mode inline.
#[derive(Debug, Eq, PartialEq)]
pub struct Palette {
    pub page: &'static str,
    pub surface: &'static str,
    pub raised: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub link: &'static str,
}

pub static DARK_PALETTE: Palette = Palette {
    page: "bg-slate-950 text-slate-100",
    surface: "bg-slate-900",
    raised: "bg-slate-800",
    text: "text-slate-100",
    muted: "text-slate-400",
    border: "border-slate-700",
    accent: "bg-indigo-500 hover:bg-indigo-400",
    accent_text: "text-indigo-300",
    link: "text-slate-300 hover:text-white",
};

pub static LIGHT_PALETTE: Palette = Palette {
    page: "bg-white text-slate-900",
    surface: "bg-slate-50",
    raised: "bg-white",
    text: "text-slate-900",
    muted: "text-slate-600",
    border: "border-slate-200",
    accent: "bg-indigo-600 hover:bg-indigo-500",
    accent_text: "text-indigo-600",
    link: "text-slate-600 hover:text-slate-900",
};

pub fn palette(mode: Mode) -> &'static Palette {
    match mode {
        Mode::Dark => &DARK_PALETTE,
        Mode::Light => &LIGHT_PALETTE,
    }
}

#[cfg(test)]
mod test {
    use crate::{palette, Mode, DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_lookup() {
        assert_eq!(palette(Mode::Dark), &DARK_PALETTE);
        assert_eq!(palette(Mode::Light), &LIGHT_PALETTE);
        assert_ne!(palette(Mode::Dark), palette(Mode::Light));
    }
}
