/// An in-page anchor shown in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        href: "#home",
    },
    NavItem {
        label: "About",
        href: "#about",
    },
    NavItem {
        label: "Skills",
        href: "#skills",
    },
    NavItem {
        label: "Projects",
        href: "#projects",
    },
    NavItem {
        label: "Contact",
        href: "#contact",
    },
];

pub const RESUME_HREF: &str = "/Resume.pdf";
pub const RESUME_FILE_NAME: &str = "Resume.pdf";

/// Look up the nav item pointing at `href`.
pub fn item_for_href(href: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.href == href)
}

/// Open/closed state of the collapsible (mobile) menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Glyph for the menu button.
    pub fn button_label(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}
