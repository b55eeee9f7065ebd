//! Static page content. Nothing here is mutated at runtime.

/// Named page sections, in document order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    Menu,
    About,
    Photos,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Menu,
        SectionId::About,
        SectionId::Photos,
        SectionId::Contact,
    ];

    /// Element id / anchor fragment.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Menu => "menu",
            Self::About => "about",
            Self::Photos => "photos",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub desc: &'static str,
    pub price: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Hours {
    pub days: &'static str,
    pub open: &'static str,
}

pub const BRAND: &str = "Joe's Pizza";
pub const BRAND_MARK: &str = "🍕";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        section: SectionId::Home,
    },
    NavItem {
        label: "Menu",
        section: SectionId::Menu,
    },
    NavItem {
        label: "About",
        section: SectionId::About,
    },
    NavItem {
        label: "Photos",
        section: SectionId::Photos,
    },
    NavItem {
        label: "Contact",
        section: SectionId::Contact,
    },
];

pub const ORDER_BUTTON_LABEL: &str = "Order Now";
pub const CART_BUTTON_LABEL: &str = "View Order";

pub const HERO_BADGE: &str = "NYC Classic • Est. 1998";
pub const HERO_TITLE: &str = "Stone‑Fired. Thin Crust. Big Flavor.";
pub const HERO_BODY: &str = "48‑hour cold‑fermented dough, San Marzano tomatoes, and fior di latte. Grab a slice or a whole pie.";
pub const HERO_HIGHLIGHTS: [&str; 3] = ["🔥 Stone‑fired", "🌿 Veg‑friendly", "🚴 Delivery"];
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1541745537413-b804bfa0f7da?q=80&w=1974&auto=format&fit=crop";

pub const MARQUEE_TEXT: &str =
    "🔥 Summer Special: 2 Large Pies + Knots — $29.99 · $1 off slices 3–5pm · Free delivery over $25";
pub const MARQUEE_REPEATS: usize = 6;

pub const MENU_TITLE: &str = "Menu Favorites";
pub const MENU_SUBTITLE: &str = "Classic pies, crisp salads, and slice‑shop staples.";
pub const MENU_CARD_IMAGE: &str = "https://images.unsplash.com/photo-1513104890138-7c749659a591?q=80&w=1974&auto=format&fit=crop";

pub const MENU: [MenuItem; 6] = [
    MenuItem {
        name: "Margherita",
        desc: "San Marzano, fior di latte, basil",
        price: "$16",
        tags: &["V"],
    },
    MenuItem {
        name: "Pepperoni",
        desc: "Cup & char pepperoni, house mozz",
        price: "$18",
        tags: &[],
    },
    MenuItem {
        name: "Hot Honey",
        desc: "Spicy soppressata, chilies, honey",
        price: "$19",
        tags: &["🔥"],
    },
    MenuItem {
        name: "Truffle Funghi",
        desc: "Cremini, porcini oil, pecorino",
        price: "$20",
        tags: &["V"],
    },
    MenuItem {
        name: "BBQ Chicken",
        desc: "BBQ sauce, chicken, red onion",
        price: "$21",
        tags: &[],
    },
    MenuItem {
        name: "Grandma Slice",
        desc: "Crisp square, garlicky tomato",
        price: "$4.75",
        tags: &["V"],
    },
];

pub const ABOUT_TITLE: &str = "Our Story";
pub const ABOUT_BODY: &str = "Joe opened his first shop in 1998 with a deck oven and a simple mission: do the classics perfectly. Our dough ferments for 48 hours; our sauce is San Marzano tomatoes, hand‑crushed; our cheese is fior di latte.";
pub const ABOUT_POINTS: [&str; 4] = [
    "🔥 Stone‑fired deck ovens",
    "🌿 Vegetarian‑friendly options",
    "⭐ Neighborhood favorite",
    "🚴 Fast delivery",
];

pub const GALLERY_TITLE: &str = "Gallery";
pub const GALLERY_HINT: &str = "Swipe / scroll horizontally";
pub const GALLERY: [&str; 5] = [
    "https://images.unsplash.com/photo-1542831371-29b0f74f9713?q=80&w=1974&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1571997478779-2adcbbe9ab2a?q=80&w=1974&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1548365328-9f547fb0950c?q=80&w=1974&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1566843972141-86a47df4fea9?q=80&w=1974&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1513104890138-7c749659a591?q=80&w=1974&auto=format&fit=crop",
];

pub const CONTACT_TITLE: &str = "Contact & Catering";
pub const CONTACT: ContactDetails = ContactDetails {
    phone: "(555) 987-6543",
    email: "contact@joespizza.com",
    address: "456 Pizza Lane, Flavor Town",
};

pub const HOURS: [Hours; 3] = [
    Hours {
        days: "Mon–Thu",
        open: "11am–10pm",
    },
    Hours {
        days: "Fri–Sat",
        open: "11am–12am",
    },
    Hours {
        days: "Sun",
        open: "12pm–9pm",
    },
];

pub const FORM_ACK_MESSAGE: &str = "Form submitted (demo)";

pub fn footer_text(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

#[cfg(test)]
#[path = "../tests/unit/content.rs"]
mod tests;
