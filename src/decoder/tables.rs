//! Static code tables for subsystems and release types

/// Subsystem selector used when no specific subsystem is requested
pub const TOTAL_SYSTEM: char = 'T';

/// Label returned for a subsystem code missing from [`SYSTEMS`]
pub const UNKNOWN_SYSTEM: &str = "Unknown System";

/// Label returned for a release type code missing from [`RELEASE_TYPES`]
pub const UNKNOWN_RELEASE_TYPE: &str = "Unknown Release Type";

/// Subsystem code to subsystem name
pub const SYSTEMS: [(char, &str); 9] = [
    ('H', "Head Server Management System"),
    ('C', "Core Web API"),
    ('E', "Unreal Engine 5 SDK"),
    ('U', "Unity SDK"),
    ('G', "Godot SDK"),
    ('D', "Data Server/Child Server System"),
    ('X', "External SDKs (C++ and .NET)"),
    ('I', "Internal System"),
    (TOTAL_SYSTEM, "Total System Version"),
];

/// Release type code to release type label
pub const RELEASE_TYPES: [(char, &str); 7] = [
    ('A', "Alpha"),
    ('B', "Beta"),
    ('I', "Internal"),
    ('R', "Major Release"),
    ('D', "Breaking Release"),
    ('S', "Security Release"),
    ('F', "Bug Fixes"),
];

/// Look up the subsystem name for a code
pub fn system_name(code: char) -> Option<&'static str> {
    lookup(&SYSTEMS, code)
}

/// Look up the release type label for a code
pub fn release_type_label(code: char) -> Option<&'static str> {
    lookup(&RELEASE_TYPES, code)
}

fn lookup(table: &[(char, &'static str)], code: char) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}
