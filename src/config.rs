/// Session-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Expose the type of `fix` to the type checker.
    pub fixpoint: bool,
    /// Nesting limit for evaluation before `RecursionLimit` is raised.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 4000;

impl Default for Config {
    fn default() -> Self {
        Config {
            fixpoint: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Defaults, with `fixpoint` switched on when `ENABLE_FIXPOINT` is set.
    pub fn from_env() -> Self {
        Config {
            fixpoint: std::env::var_os("ENABLE_FIXPOINT").is_some(),
            ..Config::default()
        }
    }

    pub fn with_fixpoint(mut self, fixpoint: bool) -> Self {
        self.fixpoint = fixpoint;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.fixpoint);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builders() {
        let config = Config::default().with_fixpoint(true).with_max_depth(10);
        assert!(config.fixpoint);
        assert_eq!(config.max_depth, 10);
    }
}
