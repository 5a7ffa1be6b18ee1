// src/persona/mod.rs
// Persona catalog for the chat AI relay. The set is closed: the chat
// service selects a persona by key and an unrecognized key is rejected
// before any network call is made.

pub mod consulting;
pub mod placeholder;
pub mod refute;
pub mod spelling;
pub mod wayne;

/// Immutable metadata for one persona, loaded once at process start.
/// The prompt builder renders these fields into the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaProfile {
    pub display_name: &'static str,
    pub role: &'static str,
    pub traits: &'static str,
    pub tone: &'static str,
    /// Free-form behavioral instructions, rendered verbatim when present.
    pub instructions: Option<&'static str>,
}

/// The personas the chat service can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiPersona {
    WayneAi,
    ConsultingAi,
    SpellingAi,
    RefuteAi,
    AgentB,
    AgentC,
}

impl AiPersona {
    pub fn profile(&self) -> &'static PersonaProfile {
        match self {
            AiPersona::WayneAi => &wayne::WAYNE_AI,
            AiPersona::ConsultingAi => &consulting::CONSULTING_AI,
            AiPersona::SpellingAi => &spelling::SPELLING_AI,
            AiPersona::RefuteAi => &refute::REFUTE_AI,
            AiPersona::AgentB => &placeholder::AGENT_B,
            AiPersona::AgentC => &placeholder::AGENT_C,
        }
    }

    /// The key the chat service uses on the wire for this persona.
    pub fn key(&self) -> &'static str {
        match self {
            AiPersona::WayneAi => "wayneAI",
            AiPersona::ConsultingAi => "consultingAI",
            AiPersona::SpellingAi => "spellingAI",
            AiPersona::RefuteAi => "refuteAI",
            AiPersona::AgentB => "agentB",
            AiPersona::AgentC => "agentC",
        }
    }

    /// Whether finished responses from this persona are rewritten by the
    /// misspelling pipeline before delivery to the consumer.
    pub fn forces_misspelling(&self) -> bool {
        matches!(self, AiPersona::SpellingAi)
    }
}

impl std::fmt::Display for AiPersona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for AiPersona {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wayneAI" => Ok(AiPersona::WayneAi),
            "consultingAI" => Ok(AiPersona::ConsultingAi),
            "spellingAI" => Ok(AiPersona::SpellingAi),
            "refuteAI" => Ok(AiPersona::RefuteAi),
            "agentB" => Ok(AiPersona::AgentB),
            "agentC" => Ok(AiPersona::AgentC),
            _ => Err(()),
        }
    }
}
