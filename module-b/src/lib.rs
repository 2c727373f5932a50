use log::trace;

/// The text identifying module B.
pub const MESSAGE: &str = "Hello from ModuleB";

/// Builds the message for module B.
///
/// Returns a new owned `String` on each call.
///
/// # Examples
///
/// ```
/// assert_eq!(module_b::build_message(), module_b::MESSAGE);
/// ```
pub fn build_message() -> String {
    trace!("module-b: building message");
    MESSAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_message() {
        let message = build_message();
        assert_eq!(message, "Hello from ModuleB");
        assert!(!message.is_empty());
    }

    #[test]
    fn test_build_message_returns_owned_copies() {
        let mut first = build_message();
        first.push('!');
        assert_eq!(build_message(), MESSAGE);
    }
}
