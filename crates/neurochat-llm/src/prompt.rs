use neurochat_core::{Message, Role};

/// Render the outbound prompt: optional `System:` line, the windowed
/// history with `Human:`/`Assistant:` prefixes, the new user line, and a
/// trailing `Assistant:` cue for the model to complete.
pub fn build_prompt(system_prompt: &str, window: &[Message], user_text: &str) -> String {
    let mut lines = Vec::with_capacity(window.len() + 2);

    if !system_prompt.is_empty() {
        lines.push(format!("System: {}\n", system_prompt));
    }

    for message in window {
        let prefix = match message.role {
            Role::User => "Human:",
            Role::Assistant => "Assistant:",
        };
        lines.push(format!("{} {}", prefix, message.content));
    }

    lines.push(format!("Human: {}", user_text));
    lines.join("\n") + "\nAssistant:"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_sends_only_the_new_message() {
        let prompt = build_prompt("", &[], "hi");
        assert_eq!(prompt, "Human: hi\nAssistant:");
    }

    #[test]
    fn system_line_comes_first_with_a_blank_separator() {
        let prompt = build_prompt("be terse", &[], "hi");
        assert_eq!(prompt, "System: be terse\n\nHuman: hi\nAssistant:");
    }

    #[test]
    fn window_is_rendered_oldest_first_with_role_prefixes() {
        let window = vec![Message::user("how are you"), Message::assistant("fine")];
        let prompt = build_prompt("", &window, "bye");
        assert_eq!(
            prompt,
            "Human: how are you\nAssistant: fine\nHuman: bye\nAssistant:"
        );
    }
}
