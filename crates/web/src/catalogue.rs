//! Brochure catalogue data.
//!
//! A fixed, hardcoded list of downloadable brochures. There is no dynamic
//! fetch behind the catalogue page; edit this table to publish a new
//! brochure.

/// A downloadable brochure entry.
#[derive(Debug, Clone)]
pub struct Brochure {
    /// Display title.
    pub title: &'static str,
    /// Secondary line under the title.
    pub subtitle: &'static str,
    /// External link to the hosted document.
    pub url: &'static str,
    /// Cover image path under `/static`.
    pub cover_path: &'static str,
    /// File type label shown on the card.
    pub file_type: &'static str,
    /// Human-readable file size shown on the card.
    pub file_size: &'static str,
}

/// The published brochures, in display order.
pub const BROCHURES: [Brochure; 6] = [
    Brochure {
        title: "Company Brochure",
        subtitle: "Complete Product Overview",
        url: "https://cdn.leaddesk.example/brochures/company.pdf",
        cover_path: "/static/brochures/company.png",
        file_type: "PDF",
        file_size: "44.5 MB",
    },
    Brochure {
        title: "Solar Brochure",
        subtitle: "Solar Mounting & Structures",
        url: "https://cdn.leaddesk.example/brochures/solar.pdf",
        cover_path: "/static/brochures/solar.png",
        file_type: "PDF",
        file_size: "31.5 MB",
    },
    Brochure {
        title: "Poles Brochure",
        subtitle: "Lighting & Pole Solutions",
        url: "https://cdn.leaddesk.example/brochures/poles.pdf",
        cover_path: "/static/brochures/poles.png",
        file_type: "PDF",
        file_size: "16.5 MB",
    },
    Brochure {
        title: "Crash Barrier Brochure",
        subtitle: "Highway Safety Crash Barrier",
        url: "https://cdn.leaddesk.example/brochures/crash-barrier.pdf",
        cover_path: "/static/brochures/crash-barrier.png",
        file_type: "PDF",
        file_size: "13.8 MB",
    },
    Brochure {
        title: "Pipes Brochure",
        subtitle: "Long Products & Sections",
        url: "https://cdn.leaddesk.example/brochures/pipes.pdf",
        cover_path: "/static/brochures/pipes.png",
        file_type: "PDF",
        file_size: "22.5 MB",
    },
    Brochure {
        title: "Structures Brochure",
        subtitle: "Railway & Transmission Structures",
        url: "https://cdn.leaddesk.example/brochures/structures.pdf",
        cover_path: "/static/brochures/structures.png",
        file_type: "PDF",
        file_size: "17.7 MB",
    },
];
