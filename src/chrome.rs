//! Page chrome state: scroll-aware header, mobile menu and section scrolling.

/// Viewport width at which the desktop nav replaces the mobile menu (`md`).
pub const DESKTOP_BREAKPOINT: f64 = 768.0;
/// How far above the bottom of the hero the header turns solid.
pub const HERO_SCROLL_BUFFER: f64 = 80.0;
/// Threshold used before the hero has been measured.
pub const FALLBACK_SCROLL_THRESHOLD: f64 = 50.0;
pub const FALLBACK_NAV_HEIGHT: f64 = 64.0;
pub const SECTION_EXTRA_OFFSET: f64 = 20.0;
/// Delay before scrolling so the mobile menu can collapse first.
pub const MOBILE_SCROLL_DELAY_MS: u64 = 50;

pub fn is_scrolled(scroll_y: f64, hero_height: Option<f64>) -> bool {
    match hero_height {
        Some(h) => scroll_y > h - HERO_SCROLL_BUFFER,
        None => scroll_y > FALLBACK_SCROLL_THRESHOLD,
    }
}

/// Document offset to scroll to so a section lands just below the fixed nav.
pub fn section_scroll_top(element_top: f64, page_offset: f64, nav_height: Option<f64>) -> f64 {
    element_top + page_offset - nav_height.unwrap_or(FALLBACK_NAV_HEIGHT) - SECTION_EXTRA_OFFSET
}

/// Strips the leading `#` from an in-page link, ignoring bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn on_resize(&mut self, width: f64) {
        if width >= DESKTOP_BREAKPOINT && self.is_open() {
            log::debug!("viewport {width}px is desktop width, collapsing mobile menu");
            self.close();
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        href: "#about",
        label: "About",
    },
    NavItem {
        href: "#skills",
        label: "Skills",
    },
    NavItem {
        href: "#projects",
        label: "Projects",
    },
    NavItem {
        href: "#achievements",
        label: "Achievements",
    },
    NavItem {
        href: "#contact",
        label: "Contact",
    },
];
