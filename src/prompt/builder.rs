// src/prompt/builder.rs

use crate::persona::{AiPersona, spelling};

/// Builds the complete system prompt for a persona: identity header,
/// answer-quality directives, then any persona-specific instruction blocks.
/// Pure and deterministic; the network layer never touches this.
pub fn build_system_prompt(persona: AiPersona) -> String {
    let profile = persona.profile();
    let mut prompt = String::new();

    // 1. Identity header: who the model is speaking as
    prompt.push_str(&format!("당신은 {}입니다.\n", profile.display_name));
    prompt.push_str(&format!("역할: {}\n", profile.role));
    prompt.push_str(&format!("특성: {}\n", profile.traits));
    prompt.push_str(&format!("톤: {}\n", profile.tone));
    prompt.push_str("\n");

    // 2. Generic answer-quality directives, shared by every persona
    prompt.push_str("답변 시 주의사항:\n");
    prompt.push_str("1. 명확하고 이해하기 쉬운 언어로 답변하세요.\n");
    prompt.push_str("2. 정확하지 않은 정보는 제공하지 마세요.\n");
    prompt.push_str("3. 필요한 경우 예시를 들어 설명하세요.\n");
    prompt.push_str(&format!("4. {}을 유지하세요.\n", profile.tone));

    // 3. Persona-specific behavioral instructions, numbered after the
    //    shared directives
    let mut directive = 5;
    if let Some(instructions) = profile.instructions {
        prompt.push_str(&format!("{}. {}\n", directive, instructions));
        directive += 1;
    }

    // 4. The spelling persona carries its mandatory misspelling patterns
    if persona.forces_misspelling() {
        prompt.push_str(&format!(
            "{}. {}\n",
            directive,
            spelling::MISSPELLING_DIRECTIVE
        ));
    }

    prompt
}
