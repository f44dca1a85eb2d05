//! GenerationStatus - Where the page is in a generate action

/// Generation status shown on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl GenerationStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_is_busy() {
        assert!(GenerationStatus::Loading.is_loading());
        assert!(!GenerationStatus::Idle.is_loading());
        assert!(!GenerationStatus::Ready.is_loading());
        assert!(!GenerationStatus::Failed("boom".to_string()).is_loading());
    }
}
