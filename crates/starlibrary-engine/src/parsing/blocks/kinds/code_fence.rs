pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True when the line, ignoring surrounding whitespace, opens or closes a
    /// fenced block. Anything after the backticks (an info string) is ignored.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_fence("```"));
        assert!(CodeFence::is_fence("```rust"));
    }

    #[test]
    fn indented_fence_still_counts() {
        assert!(CodeFence::is_fence("   ```  "));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_fence("hello"));
        assert!(!CodeFence::is_fence("``"));
        assert!(!CodeFence::is_fence("~~~"));
    }
}
