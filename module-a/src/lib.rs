use log::trace;

/// The text identifying module A.
pub const MESSAGE: &str = "Hello from ModuleA";

/// Builds the message for module A.
///
/// Every call returns a freshly owned copy of [`MESSAGE`].
///
/// # Examples
///
/// ```
/// let message = module_a::build_message();
/// assert_eq!(message, "Hello from ModuleA");
/// ```
pub fn build_message() -> String {
    trace!("module-a: building message");
    MESSAGE.to_string()
}
