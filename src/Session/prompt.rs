//! System prompt asking the backend for the response template the parser
//! understands, and assembly of the message list sent with each query.
use serde::{Deserialize, Serialize};

pub const CHEMISTRY_SYSTEM_PROMPT: &str = "You are a research chemist with expertise in materials science, organic synthesis and chemical engineering. For the given query, propose possible chemical syntheses and describe each one using exactly this format:

POSSIBILITY 1:
REACTION NAME:
[Short name of the reaction]

REACTION EQUATION:
[Balanced chemical equation with state symbols]

MECHANISM:
[Short step-by-step mechanism written as one paragraph]

THERMODYNAMICS:
ΔH: [value] kJ/mol
ΔS: [value] J/K·mol
ΔG: [value] kJ/mol
Equilibrium constant (Keq): [value]

REACTION CONDITIONS:
Temperature: [range in °C]
Pressure: [value in atm]
pH: [numerical range such as 6.5-8.2, never words like neutral or acidic]
Catalyst: [name, if required]

SYNTHESIS INSTRUCTIONS:
MATERIALS:
- [each reagent with purity or grade]

EQUIPMENT:
- [each piece of laboratory and safety equipment]

PROCEDURE:
1. [first step]
2. [second step]

SAFETY CONSIDERATIONS:
- [hazards and protective measures]

ALTERNATIVE SYNTHESIS ROUTES:
1. [alternative route]

Return plain text without markdown formatting and keep the answer short.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// one entry of the message list handed to the chat backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMessage {
    pub role: Role,
    pub content: String,
}

/// `[system prompt, user query]`
pub fn build_messages(user_input: &str) -> Vec<BackendMessage> {
    vec![
        BackendMessage {
            role: Role::System,
            content: CHEMISTRY_SYSTEM_PROMPT.to_string(),
        },
        BackendMessage {
            role: Role::User,
            content: user_input.trim().to_string(),
        },
    ]
}
