use crate::cmd::{commands, Application};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for looking up applications by name
pub struct ApplicationRegistry {
    applications: HashMap<&'static str, Arc<dyn Application>>,
}

impl ApplicationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            applications: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in application
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for application in commands::builtins() {
            registry.register(application);
        }
        registry
    }

    /// Register an application, replacing any with the same name
    pub fn register(&mut self, application: Box<dyn Application>) {
        self.applications
            .insert(application.name(), Arc::from(application));
    }

    /// Get a registered application by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Application>> {
        self.applications.get(name).cloned()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.applications.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Usage line of every application, sorted by name
    pub fn usages(&self) -> Vec<&'static str> {
        self.names()
            .into_iter()
            .filter_map(|name| self.applications.get(name))
            .map(|application| application.usage())
            .collect()
    }
}

impl Default for ApplicationRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = ApplicationRegistry::with_builtins();
        for name in [
            "cat", "cd", "cut", "echo", "exit", "grep", "ls", "mkdir", "mv", "paste", "pwd",
            "rm", "sort", "tee", "uniq", "wc",
        ] {
            assert!(registry.get(name).is_some(), "{} missing", name);
        }
        assert!(registry.get("cp").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let names = ApplicationRegistry::with_builtins().names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_usages_start_with_name() {
        let registry = ApplicationRegistry::with_builtins();
        for (name, usage) in registry.names().into_iter().zip(registry.usages()) {
            assert!(usage.starts_with(name), "{}", usage);
        }
    }
}
