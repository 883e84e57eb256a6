//! Fixed name pools the generators draw from.

pub const PROJECT_NAMES: [&str; 15] = [
    "Elysian Towers",
    "Azure Residences",
    "Veridian Plaza",
    "Serene Gardens Villas",
    "Quantum Business Hub",
    "Celestial Apartments",
    "Pinnacle Heights",
    "Oasis Springs",
    "Terra Nova Complex",
    "Horizon Suites",
    "Starlight Towers",
    "Golden Gate Condos",
    "Silver Creek Estates",
    "Sapphire Business Park",
    "Emerald Greens",
];

pub const BUYER_NAMES: [&str; 20] = [
    "Alice Smith",
    "Bob Johnson",
    "Carol Williams",
    "David Brown",
    "Eve Jones",
    "Frank Garcia",
    "Grace Miller",
    "Henry Davis",
    "Ivy Rodriguez",
    "Jack Wilson",
    "Kate Martinez",
    "Liam Anderson",
    "Mia Thomas",
    "Noah Jackson",
    "Olivia White",
    "Peter Harris",
    "Quinn Martin",
    "Ryan Thompson",
    "Sophia Garcia",
    "Tyler Robinson",
];

pub const AGENT_NAMES: [&str; 8] = [
    "Agent Sinclair",
    "Agent Dubois",
    "Agent Al Fayed",
    "Agent Vanderbilt",
    "Agent Chen",
    "Supervisor Sterling",
    "Manager Hawthorne",
    "Director DeVere",
];

pub const TECHNICIAN_NAMES: [&str; 8] = [
    "Tech Alistair B.",
    "Tech Brenda C.",
    "Tech Carlos D.",
    "Tech Diana E.",
    "Tech Edward F.",
    "Lead Tech Priya S.",
    "Maintenance Team Alpha",
    "Service Pro Excellence",
];

pub const BROKER_AGENCIES: [&str; 5] = [
    "Global Realty Partners",
    "Prestige Properties Inc.",
    "Cityscape Brokers United",
    "Prime Locations Ltd.",
    "Desert Homes Real Estate",
];

pub const MILESTONES: [&str; 8] = [
    "Foundation Complete",
    "Structure Level 1",
    "Structure Top-Out",
    "External Cladding 50%",
    "Internal Finishing Start",
    "Landscaping Phase 1",
    "Handover Process Start",
    "Project Completion",
];

pub const DOCUMENT_TYPES: [&str; 7] = [
    "NOC - Authority A",
    "Permit - Construction Phase 1",
    "Contract - Main Contractor",
    "Drawing - Architectural Floor Plan Set",
    "Compliance Certificate - Safety Audit",
    "Sales & Purchase Agreement Template",
    "Supplier Contract - HVAC",
];

/// Agents and technicians share sub-task assignments.
pub fn agents_and_technicians() -> Vec<&'static str> {
    AGENT_NAMES
        .iter()
        .chain(TECHNICIAN_NAMES.iter())
        .copied()
        .collect()
}
