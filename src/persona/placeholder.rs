// src/persona/placeholder.rs
// Reserved persona slots kept addressable so the chat service can wire
// experiments against them without a relay deploy.

use super::PersonaProfile;

pub const AGENT_B: PersonaProfile = PersonaProfile {
    display_name: "Agent B",
    role: "B",
    traits: "B",
    tone: "B",
    instructions: None,
};

pub const AGENT_C: PersonaProfile = PersonaProfile {
    display_name: "Agent C",
    role: "C",
    traits: "C",
    tone: "C",
    instructions: None,
};
