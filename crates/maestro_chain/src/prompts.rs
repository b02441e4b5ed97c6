//! Role-prompt construction for the pipeline stages.
//!
//! Each builder threads the previous stage's output into the next stage's
//! prompt; the chain itself never interprets stage output beyond checking
//! that it is non-empty.

use crate::PerformanceTier;
use maestro_core::GenerationRequest;
use maestro_error::{ChainError, ChainErrorKind, ChainResult};

/// Serializes the caller's context payload for prompt embedding.
fn context_block(request: &GenerationRequest) -> ChainResult<String> {
    match request.context() {
        Some(context) => serde_json::to_string_pretty(context)
            .map_err(|e| ChainError::new(ChainErrorKind::ContextSerialization(e.to_string()))),
        None => Ok("(no context provided)".to_string()),
    }
}

/// Builds the analyzer prompt for a tier.
///
/// Flow asks for a quick pass over four elements; craft asks for a deep
/// five-section analysis. Both embed the serialized caller context and the
/// raw request.
pub(crate) fn analyzer(tier: PerformanceTier, request: &GenerationRequest) -> ChainResult<String> {
    let context = context_block(request)?;

    let instructions = match tier {
        PerformanceTier::Flow => {
            "Provide a quick analysis of the request below. Cover, concisely:\n\
             1. Intent: what the user wants done\n\
             2. Entities: the pages, posts, plugins, files, or settings involved\n\
             3. Requirements: what must hold for the result to be correct\n\
             4. Risks: what could break or be destructive"
        }
        PerformanceTier::Craft => {
            "Provide a deep analysis of the request below, in five sections:\n\
             1. Intent analysis: what the user wants and why\n\
             2. Technical scope: every component the change touches\n\
             3. Dependencies: what the change relies on or must coordinate with\n\
             4. Risk assessment: failure modes, security and data concerns\n\
             5. Complexity estimate: how involved the implementation will be"
        }
    };

    Ok(format!(
        "{instructions}\n\nSite context:\n{context}\n\nUser request:\n{prompt}",
        prompt = request.prompt(),
    ))
}

/// Builds the strategist prompt from the analyzer's output (craft only).
pub(crate) fn strategist(analysis: &str, request: &GenerationRequest) -> String {
    format!(
        "Based on the analysis below, produce a concrete implementation plan \
         covering: the architecture of the change, ordered implementation \
         steps, the file and code structure, integration points with the \
         existing site, a test strategy, and a rollback plan.\n\n\
         Analysis:\n{analysis}\n\nUser request:\n{prompt}",
        prompt = request.prompt(),
    )
}

/// Builds the implementer prompt from the preceding stage's output.
///
/// The basis is the analyzer output on flow and the strategist output on
/// craft. The required response shape is stated explicitly; the syntactic
/// validator later checks the embedded code, not this shape.
pub(crate) fn implementer(
    tier: PerformanceTier,
    basis: &str,
    request: &GenerationRequest,
) -> String {
    let basis_label = match tier {
        PerformanceTier::Flow => "Analysis",
        PerformanceTier::Craft => "Implementation plan",
    };

    format!(
        "Implement the user's request.\n\n{basis_label}:\n{basis}\n\n\
         User request:\n{prompt}\n\n\
         Respond with a single JSON object of the shape:\n\
         {{\n  \"intent\": \"<short machine-readable intent>\",\n  \
         \"confidence\": <0.0-1.0>,\n  \
         \"actions\": [<ordered operations to perform>],\n  \
         \"message\": \"<human-readable summary>\"\n}}",
        prompt = request.prompt(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_context() -> GenerationRequest {
        GenerationRequest::builder()
            .prompt("create a landing page")
            .context(Some(serde_json::json!({"site": "bakery", "theme": "astra"})))
            .build()
            .unwrap()
    }

    #[test]
    fn analyzer_embeds_context_and_request() {
        let prompt = analyzer(PerformanceTier::Flow, &request_with_context()).unwrap();
        assert!(prompt.contains("bakery"));
        assert!(prompt.contains("create a landing page"));
        assert!(prompt.contains("Risks"));
    }

    #[test]
    fn craft_analyzer_asks_for_five_sections() {
        let prompt = analyzer(PerformanceTier::Craft, &request_with_context()).unwrap();
        assert!(prompt.contains("Complexity estimate"));
    }

    #[test]
    fn strategist_threads_analysis() {
        let prompt = strategist("intent: create page", &request_with_context());
        assert!(prompt.contains("intent: create page"));
        assert!(prompt.contains("rollback plan"));
    }

    #[test]
    fn implementer_states_response_shape() {
        let prompt = implementer(
            PerformanceTier::Craft,
            "1. add page template",
            &request_with_context(),
        );
        assert!(prompt.contains("Implementation plan"));
        assert!(prompt.contains("\"confidence\""));
        assert!(prompt.contains("\"actions\""));
    }
}
