use log::Level;

pub const COMPANY_NAME: &str = "Red Fox";
pub const PAGE_TITLE: &str = "Red Fox Team";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkItem {
    pub title: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[LinkItem] = &[
    LinkItem { title: "Home", href: "/" },
    LinkItem { title: "About", href: "/about" },
    LinkItem { title: "Contact", href: "/contact" },
];

/// Which header dropdown a menu entry drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dropdown {
    Products,
    Solutions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMenu {
    pub dropdown: Dropdown,
    pub label: &'static str,
    pub href: &'static str,
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub const NAV_MENUS: &[NavMenu] = &[
    NavMenu {
        dropdown: Dropdown::Products,
        label: "Products",
        href: "/products",
        heading: "Red Fox Products",
        items: &["AI Platform", "GPT Framework", "LLM Solutions"],
    },
    NavMenu {
        dropdown: Dropdown::Solutions,
        label: "Solutions",
        href: "/solutions",
        heading: "Red Fox Solutions",
        items: &["Automated Content Generation", "Virtual Assistants", "Data Analysis"],
    },
];

pub struct SectionCopy {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const WHO_WE_ARE: SectionCopy = SectionCopy {
    heading: "Who We Are",
    body: "Red Fox Team is a company specialized in AI, GPT, and LLM technologies. We are dedicated to creating innovative solutions and pushing the boundaries of whats possible in the world of AI.",
};

pub const OUR_DIFFERENTIALS: SectionCopy = SectionCopy {
    heading: "Our Differentials",
    body: "At Red Fox, we stand out from the rest of the companies because of our unique approach to AI. We focus not only on the technology but also on its impact on peoples lives. Our team is made up of experts in AI, as well as in the fields of psychology, ethics, and design. This interdisciplinary approach allows us to create AI solutions that are not only efficient but also ethical, empathetic, and user-friendly. We believe that AI should serve people, not the other way around, and we work tirelessly to make that a reality.",
};

pub const OUR_APPROACH: SectionCopy = SectionCopy {
    heading: "Our Approach",
    body: "At Red Fox, we take a human-centered approach to AI. We believe that AI should serve people, not the other way around. Thats why we work closely with experts in psychology, ethics, and design to create AI solutions that are not only efficient but also ethical, empathetic, and user-friendly.",
};

pub mod theme {
    pub const BRAND_RED: &str = "#7c0e0e";
    pub const PAGE_BACKGROUND: &str = "#0e0e0e";
    pub const ACCENT: &str = "#FF7F50";
    pub const BLACK_LIGHTRED_GRADIENT: &str =
        "linear-gradient(to bottom, #000000, #120606 90%, #750e0e)";
    /// Wireframe stroke colour as RGB.
    pub const WIREFRAME: (u8, u8, u8) = (255, 255, 255);
}

pub mod scene {
    pub const STAR_COUNT: usize = 100;
    pub const STAR_SIZE: f64 = 0.05;
    pub const STAR_DISTANCE: (f64, f64) = (2.0, 3.5);
    /// Polar angle bounds in degrees.
    pub const STAR_POLAR_DEGREES: (f64, f64) = (80.0, 100.0);

    pub const ICOSAHEDRON_RADIUS: f64 = 1.0;
    pub const ICOSAHEDRON_TILT: f64 = 0.35;

    /// Camera distance at scroll progress 0 and 1.
    pub const CAMERA_DISTANCE: (f64, f64) = (10.0, 3.0);
    /// Camera polar angle at scroll progress 0 and 1, in radians.
    pub const CAMERA_POLAR: (f64, f64) = (0.001, std::f64::consts::PI);
    /// Radians of azimuth per elapsed millisecond.
    pub const CAMERA_TIME_SCALE: f64 = 0.0005;
    pub const CAMERA_FOV_DEGREES: f64 = 75.0;
    pub const CAMERA_NEAR: f64 = 0.1;
    pub const CAMERA_FAR: f64 = 1000.0;

    /// Drawing buffer size relative to the canvas CSS size.
    pub const PIXEL_RATIO: f64 = 0.3;
}

pub mod motion {
    pub const CONTAINER_FADE_SECS: f64 = 0.3;
    pub const DELAY_CHILDREN_SECS: f64 = 0.8;
    pub const STAGGER_CHILDREN_SECS: f64 = 0.4;
    pub const ITEM_OFFSET_PX: f64 = 20.0;

    pub const SPRING_STIFFNESS: f64 = 100.0;
    pub const SPRING_DAMPING: f64 = 20.0;
    pub const SPRING_MASS: f64 = 1.0;

    pub const DROPDOWN_SECS: f64 = 0.3;
    pub const DROPDOWN_OFFSET_PX: f64 = -10.0;
    pub const FOOTER_SECS: f64 = 0.5;
    pub const FOOTER_OFFSET_PX: f64 = 50.0;

    /// Fraction of a section that must be on screen before it reveals.
    pub const REVEAL_THRESHOLD: f64 = 0.5;
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
