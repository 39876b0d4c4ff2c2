//! Planet scene content: subjects, icon placement and copy

/// Pixel size of the orbit container
pub const ORBIT_SIZE: (u32, u32) = (463, 505);

/// Rotation origin of the orbit container, in pixels from its top-left corner
pub const ORBIT_ORIGIN: (u32, u32) = (276, 245);

/// Edge length of an orbiting icon in pixels
pub const ICON_SIZE: u32 = 116;

/// Background illustration asset
pub const PLANET_IMAGE: &str = "ecosystem";

/// Viewport heights the planet stage stays pinned for
pub const PIN_VIEWPORTS: u32 = 3;

/// The three audiences highlighted in turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    Brands,
    Shoppers,
    Employers,
}

impl Subject {
    /// Emphasis order
    pub const ALL: [Subject; 3] = [Subject::Brands, Subject::Shoppers, Subject::Employers];

    pub fn index(&self) -> usize {
        match self {
            Subject::Brands => 0,
            Subject::Shoppers => 1,
            Subject::Employers => 2,
        }
    }

    /// Icon asset name under `/images`
    pub fn icon(&self) -> &'static str {
        match self {
            Subject::Brands => "independent-brands",
            Subject::Shoppers => "social-shoppers",
            Subject::Employers => "employers-conscience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Brands => "Independent brands",
            Subject::Shoppers => "Social shoppers",
            Subject::Employers => "Employers with a conscience",
        }
    }

    /// Absolute offsets of the icon inside the orbit container
    pub fn placement(&self) -> IconPlacement {
        match self {
            Subject::Brands => IconPlacement {
                top: Some(185),
                right: Some(-75),
                ..IconPlacement::default()
            },
            Subject::Shoppers => IconPlacement {
                top: Some(15),
                left: Some(120),
                ..IconPlacement::default()
            },
            Subject::Employers => IconPlacement {
                bottom: Some(35),
                left: Some(120),
                ..IconPlacement::default()
            },
        }
    }

    pub fn text(&self) -> &'static TextBlock {
        &TEXT_BLOCKS[self.index()]
    }
}

/// Absolute position offsets in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IconPlacement {
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
}

impl IconPlacement {
    /// Inline style for the icon element
    pub fn style(&self) -> String {
        let mut style = format!("width: {ICON_SIZE}px; height: {ICON_SIZE}px;");
        for (edge, offset) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if let Some(px) = offset {
                style.push_str(&format!(" {edge}: {px}px;"));
            }
        }
        style
    }
}

/// Copy shown beside the planet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextBlock {
    pub heading: &'static str,
    pub body: &'static str,
    /// Absolutely positioned blocks overlap for a crossfade; static blocks
    /// share one grid cell instead
    pub absolute: bool,
}

/// Text blocks in emphasis order
pub const TEXT_BLOCKS: [TextBlock; 3] = [
    TextBlock {
        heading: "Independent brands",
        body: "Reach people who care where things come from. List your products once and let the community carry your story further.",
        absolute: false,
    },
    TextBlock {
        heading: "Social shoppers",
        body: "Discover makers through friends, not ads. Every purchase you share sends support straight back to the brands you love.",
        absolute: false,
    },
    TextBlock {
        heading: "Employers with a conscience",
        body: "Give your team a perk that does good. Match staff spending with independent brands and watch the whole ecosystem grow.",
        absolute: false,
    },
];

/// Inline style of the orbit container
pub fn orbit_style() -> String {
    let (width, height) = ORBIT_SIZE;
    let (x, y) = ORBIT_ORIGIN;
    format!("width: {width}px; height: {height}px; transform-origin: {x}px {y}px;")
}
