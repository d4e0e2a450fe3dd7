//! Beach status prompt definition.

use rmcp::model::PromptArgument;

use super::PromptDefinition;

/// Prompt asking for the current status of a named beach.
pub struct BeachStatusPrompt;

impl PromptDefinition for BeachStatusPrompt {
    const NAME: &'static str = "beach_status_prompt";
    const DESCRIPTION: &'static str =
        "Prompt to request the current status of a beach in Massachusetts.";

    fn template() -> &'static str {
        "Please help provide me with the current status of the beach named \
         '{{beach_name}}' in Massachusetts."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "beach_name".to_string(),
            title: None,
            description: Some("The beach to ask about".to_string()),
            required: Some(true),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beach_status_prompt_metadata() {
        assert_eq!(BeachStatusPrompt::NAME, "beach_status_prompt");
        assert!(!BeachStatusPrompt::DESCRIPTION.is_empty());
        assert!(BeachStatusPrompt::template().contains("{{beach_name}}"));

        let args = BeachStatusPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "beach_name");
        assert_eq!(args[0].required, Some(true));
    }
}
