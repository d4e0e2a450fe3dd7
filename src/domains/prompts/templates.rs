//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the placeholder
//! substitution used to render prompts. Placeholders use a `{{variable}}`
//! syntax; placeholders left unfilled by optional arguments are removed.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    ///
    /// Each `{{variable}}` is replaced with the matching argument value;
    /// placeholders with no matching argument are removed. Required-argument
    /// validation happens in the service before rendering.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        strip_unmatched_placeholders(&result)
    }
}

/// Remove any `{{...}}` placeholders that survived substitution.
fn strip_unmatched_placeholders(template: &str) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        match rest[start..].find("}}") {
            Some(end) => {
                result.push_str(&rest[..start]);
                rest = &rest[start + end + 2..];
            }
            None => break,
        }
    }
    result.push_str(rest);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &str) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: vec![],
            template: text.to_string(),
        }
    }

    #[test]
    fn test_simple_substitution() {
        let mut args = HashMap::new();
        args.insert("name".to_string(), "Carson Beach".to_string());

        let result = template("Status of '{{name}}'?").render(&args);
        assert_eq!(result, "Status of 'Carson Beach'?");
    }

    #[test]
    fn test_repeated_placeholder() {
        let mut args = HashMap::new();
        args.insert("name".to_string(), "X".to_string());

        let result = template("{{name}} and {{name}}").render(&args);
        assert_eq!(result, "X and X");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let result = template("Hello{{extra}}!").render(&HashMap::new());
        assert_eq!(result, "Hello!");
    }

    #[test]
    fn test_unterminated_placeholder_kept() {
        let result = template("Hello {{oops").render(&HashMap::new());
        assert_eq!(result, "Hello {{oops");
    }
}
