pub trait Validate {
    /// Returns a human-readable reason when the value is out of range.
    fn validate(&self) -> Result<(), String>;
}
