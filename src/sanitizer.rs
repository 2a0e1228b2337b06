use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD_STARS: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC_STAR: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref ITALIC_UNDERSCORE: Regex = Regex::new(r"_(.*?)_").unwrap();
    static ref BOLD_UNDERSCORES: Regex = Regex::new(r"__(.*?)__").unwrap();
    static ref HEADER: Regex = Regex::new(r"(?m)^#+\s*").unwrap();
    static ref CODE_BLOCK: Regex = Regex::new(r"```[\s\S]*?```").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref EXTRA_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Strips markdown from a model reply, keeping the text it decorated.
///
/// Rules run in a fixed order and each sees the previous rule's output:
/// emphasis, headers, fenced blocks, inline code, links, blank-line runs, trim.
/// Nested or unbalanced markup can survive partially.
pub fn clean_response(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = BOLD_STARS.replace_all(text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORES.replace_all(&text, "$1");

    let text = HEADER.replace_all(&text, "");

    let text = CODE_BLOCK.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");

    let text = LINK.replace_all(&text, "$1");

    let text = EXTRA_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emphasis() {
        assert_eq!(clean_response("**Hello** _world_"), "Hello world");
        assert_eq!(clean_response("*one* and __two__"), "one and two");
    }

    #[test]
    fn strips_headers_and_inline_code() {
        assert_eq!(clean_response("# Title\n\nSome `code` here"), "Title\n\nSome code here");
        assert_eq!(clean_response("### A. Summary\n- item"), "A. Summary\n- item");
    }

    #[test]
    fn drops_fenced_blocks_with_contents() {
        assert_eq!(clean_response("```\nblock\n```\nAfter"), "After");
        assert_eq!(clean_response("Before\n```json\n{\"a\": 1}\n```"), "Before");
    }

    #[test]
    fn unwraps_links() {
        assert_eq!(clean_response("[link](http://x.com) text"), "link text");
    }

    #[test]
    fn collapses_newline_runs() {
        assert_eq!(clean_response("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean_response("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn bold_is_removed_before_italic() {
        assert_eq!(clean_response("**_x_**"), "x");
    }

    #[test]
    fn empty_and_plain_input() {
        assert_eq!(clean_response(""), "");
        assert_eq!(clean_response("  plain text \n"), "plain text");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let inputs = [
            "**Hello** _world_",
            "# Title\n\nSome `code` here",
            "```\nblock\n```\nAfter",
            "[link](http://x.com) text",
            "A. Plain-Language Summary\n\n\n\n- **CK** is *elevated*\n\nD. Disclaimer",
        ];
        for input in inputs {
            let once = clean_response(input);
            assert_eq!(clean_response(&once), once, "input: {:?}", input);
        }
    }
}
