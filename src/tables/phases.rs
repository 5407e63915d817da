//! Phase templates per project type.
//!
//! Proportions of one type sum to 1.0. A template with `overlap` starts that
//! fraction of the preceding phase's duration before the preceding phase ends
//! and is therefore off the critical path.

use crate::domain::ProjectType;

#[derive(Debug, Clone, Copy)]
pub struct PhaseTemplate {
    pub name: &'static str,
    pub proportion: f64,
    pub description: &'static str,
    pub subtasks: &'static [&'static str],
    pub resources: &'static [(&'static str, u32)],
    pub weather_sensitive: bool,
    pub dependencies: &'static [&'static str],
    pub overlap: Option<f64>,
}

const CONSTRUCTION: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "Site Preparation & Foundation",
        proportion: 0.15,
        description: "Site clearing, soil testing, excavation and foundation work",
        subtasks: &[
            "Site survey and soil testing",
            "Clearing and excavation",
            "Footing and foundation concrete",
            "Plinth beam and backfilling",
        ],
        resources: &[("Site engineer", 1), ("Mason", 4), ("Laborer", 10), ("Excavator operator", 1)],
        weather_sensitive: true,
        dependencies: &[],
        overlap: None,
    },
    PhaseTemplate {
        name: "Structural Work",
        proportion: 0.30,
        description: "Columns, beams, slabs and masonry for every floor",
        subtasks: &[
            "Column and beam reinforcement",
            "Slab shuttering and casting",
            "Curing",
            "Brick and block masonry",
        ],
        resources: &[("Structural engineer", 1), ("Mason", 6), ("Bar bender", 4), ("Laborer", 14)],
        weather_sensitive: true,
        dependencies: &["Site Preparation & Foundation"],
        overlap: None,
    },
    PhaseTemplate {
        name: "MEP Installation",
        proportion: 0.15,
        description: "Electrical conduits, plumbing lines and HVAC ducting",
        subtasks: &[
            "Electrical conduit and wiring",
            "Water supply and drainage lines",
            "HVAC ducting",
            "Pressure and continuity testing",
        ],
        resources: &[("Electrician", 3), ("Plumber", 3), ("HVAC technician", 2)],
        weather_sensitive: false,
        dependencies: &["Structural Work"],
        overlap: Some(0.50),
    },
    PhaseTemplate {
        name: "Finishing & Interiors",
        proportion: 0.25,
        description: "Plastering, flooring, joinery, fixtures and painting",
        subtasks: &[
            "Internal and external plastering",
            "Flooring and tiling",
            "Doors, windows and joinery",
            "Painting",
            "Sanitary and electrical fixtures",
        ],
        resources: &[("Site supervisor", 1), ("Tiler", 4), ("Carpenter", 3), ("Painter", 4)],
        weather_sensitive: false,
        dependencies: &["MEP Installation"],
        overlap: None,
    },
    PhaseTemplate {
        name: "External Development",
        proportion: 0.10,
        description: "Compound wall, paving, landscaping and drainage",
        subtasks: &[
            "Compound wall and gate",
            "Driveway and paving",
            "Storm water drainage",
            "Landscaping",
        ],
        resources: &[("Mason", 3), ("Landscaper", 2), ("Laborer", 6)],
        weather_sensitive: true,
        dependencies: &["Finishing & Interiors"],
        overlap: Some(0.30),
    },
    PhaseTemplate {
        name: "Handover & Inspection",
        proportion: 0.05,
        description: "Snagging, statutory inspections and handover",
        subtasks: &[
            "Snag list and rectification",
            "Occupancy certificate inspection",
            "Deep cleaning",
            "Handover documentation",
        ],
        resources: &[("Project manager", 1), ("Quality inspector", 1), ("Laborer", 4)],
        weather_sensitive: false,
        dependencies: &["Finishing & Interiors", "External Development"],
        overlap: None,
    },
];

const INTERIOR: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "Design & Planning",
        proportion: 0.15,
        description: "Concept, 3D visualisation, material selection and drawings",
        subtasks: &[
            "Site measurement",
            "Concept and mood boards",
            "3D renders",
            "Material and finish selection",
            "Working drawings",
        ],
        resources: &[("Interior designer", 1), ("Draughtsman", 1)],
        weather_sensitive: false,
        dependencies: &[],
        overlap: None,
    },
    PhaseTemplate {
        name: "Civil Work",
        proportion: 0.15,
        description: "Wall changes, demolition and surface preparation",
        subtasks: &[
            "Demolition and debris removal",
            "Partition walls",
            "Surface levelling",
        ],
        resources: &[("Mason", 2), ("Laborer", 4)],
        weather_sensitive: false,
        dependencies: &["Design & Planning"],
        overlap: None,
    },
    PhaseTemplate {
        name: "MEP Installation",
        proportion: 0.20,
        description: "Electrical rewiring, lighting points and plumbing changes",
        subtasks: &[
            "Electrical rewiring and points",
            "Lighting layout",
            "Plumbing changes",
            "Appliance provisions",
        ],
        resources: &[("Electrician", 2), ("Plumber", 1)],
        weather_sensitive: false,
        dependencies: &["Civil Work"],
        overlap: Some(0.50),
    },
    PhaseTemplate {
        name: "Carpentry & Furniture",
        proportion: 0.25,
        description: "Modular furniture, wardrobes, kitchen and false ceiling",
        subtasks: &[
            "False ceiling",
            "Modular kitchen",
            "Wardrobes and storage",
            "Loose furniture installation",
        ],
        resources: &[("Carpenter", 4), ("Ceiling installer", 2), ("Helper", 3)],
        weather_sensitive: false,
        dependencies: &["MEP Installation"],
        overlap: None,
    },
    PhaseTemplate {
        name: "Painting & Finishing",
        proportion: 0.15,
        description: "Putty, paint, polish and wall finishes",
        subtasks: &["Wall putty and primer", "Painting", "Wood polish", "Wallpaper and cladding"],
        resources: &[("Painter", 3), ("Polisher", 1)],
        weather_sensitive: false,
        dependencies: &["Carpentry & Furniture"],
        overlap: None,
    },
    PhaseTemplate {
        name: "Styling & Handover",
        proportion: 0.10,
        description: "Soft furnishings, décor, cleaning and walkthrough",
        subtasks: &["Curtains and soft furnishings", "Décor and styling", "Deep cleaning", "Client walkthrough"],
        resources: &[("Interior designer", 1), ("Helper", 2)],
        weather_sensitive: false,
        dependencies: &["Painting & Finishing"],
        overlap: None,
    },
];

const RENOVATION: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "Assessment & Design",
        proportion: 0.10,
        description: "Condition survey, scope definition and design",
        subtasks: &["Condition survey", "Scope and budget", "Design and approvals"],
        resources: &[("Site engineer", 1), ("Designer", 1)],
        weather_sensitive: false,
        dependencies: &[],
        overlap: None,
    },
    PhaseTemplate {
        name: "Demolition & Strip-out",
        proportion: 0.15,
        description: "Removing old finishes, fixtures and debris",
        subtasks: &["Protect retained areas", "Strip fixtures and finishes", "Debris removal"],
        resources: &[("Laborer", 6), ("Supervisor", 1)],
        weather_sensitive: false,
        dependencies: &["Assessment & Design"],
        overlap: None,
    },
    PhaseTemplate {
        name: "Structural Repairs",
        proportion: 0.20,
        description: "Crack repair, waterproofing and structural strengthening",
        subtasks: &["Crack and spalling repair", "Waterproofing", "Strengthening where required"],
        resources: &[("Mason", 3), ("Waterproofing applicator", 2), ("Laborer", 4)],
        weather_sensitive: true,
        dependencies: &["Demolition & Strip-out"],
        overlap: None,
    },
    PhaseTemplate {
        name: "MEP Installation",
        proportion: 0.20,
        description: "Replacement wiring, plumbing and fixtures",
        subtasks: &["Rewiring", "Plumbing replacement", "Fixture provisions"],
        resources: &[("Electrician", 2), ("Plumber", 2)],
        weather_sensitive: false,
        dependencies: &["Structural Repairs"],
        overlap: Some(0.50),
    },
    PhaseTemplate {
        name: "Finishing & Restoration",
        proportion: 0.25,
        description: "Tiling, flooring, carpentry and painting",
        subtasks: &["Tiling and flooring", "Carpentry", "Painting", "Fixture installation"],
        resources: &[("Tiler", 2), ("Carpenter", 2), ("Painter", 2)],
        weather_sensitive: false,
        dependencies: &["MEP Installation"],
        overlap: None,
    },
    PhaseTemplate {
        name: "Cleanup & Handover",
        proportion: 0.10,
        description: "Snagging, cleaning and handover",
        subtasks: &["Snag rectification", "Deep cleaning", "Handover"],
        resources: &[("Supervisor", 1), ("Laborer", 2)],
        weather_sensitive: false,
        dependencies: &["Finishing & Restoration"],
        overlap: None,
    },
];

pub fn templates(project_type: ProjectType) -> &'static [PhaseTemplate] {
    match project_type {
        ProjectType::Construction => CONSTRUCTION,
        ProjectType::Interior => INTERIOR,
        ProjectType::Renovation => RENOVATION,
    }
}
