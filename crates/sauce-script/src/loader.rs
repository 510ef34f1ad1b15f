//! RON action file loader

use crate::error::{Error, Result};
use indexmap::IndexMap;
use sauce_core::{create_actions, ActionConfig, ActionCreator, Actions, ExtraProps, Options, Value};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One RON action document
#[derive(Debug, Clone, Deserialize)]
pub struct ActionFile {
    /// Type prefix for every action in the document; empty for none
    #[serde(default)]
    pub prefix: String,
    /// Bare action name to field declaration
    pub actions: IndexMap<String, Value>,
}

/// Loader for RON action files
///
/// Collects declarations from any number of documents, then compiles them
/// with [`Loader::build`].
pub struct Loader {
    config: ActionConfig,
    prefix: Option<String>,
    options: Option<Options>,
    creators: IndexMap<String, ActionCreator>,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config: ActionConfig::new(),
            prefix: None,
            options: None,
            creators: IndexMap::new(),
        }
    }

    /// Use these options instead of any prefix found in the documents
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Register a hand-written creator, replacing the file's declaration of `name`
    pub fn with_creator(mut self, name: impl Into<String>, creator: ActionCreator) -> Self {
        self.creators.insert(name.into(), creator);
        self
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading action file");
        self.load_str(&content)
    }

    /// Load all `.ron` files from a directory, recursively
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for file_path in entries {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Load actions from a RON string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let file: ActionFile = ron::from_str(content)?;

        if !file.prefix.is_empty() {
            let prefix = file.prefix;
            match &self.prefix {
                Some(existing) if *existing != prefix => {
                    return Err(Error::InvalidSchema(format!(
                        "conflicting prefixes: {:?} and {:?}",
                        existing, prefix
                    )));
                }
                _ => self.prefix = Some(prefix),
            }
        }

        for (name, decl) in file.actions {
            if self.config.contains(&name) {
                return Err(Error::DuplicateDefinition(name));
            }
            let props = ExtraProps::try_from(decl)?;
            self.config.insert(name, props);
        }
        Ok(())
    }

    /// Number of actions declared so far, hand-written creators excluded
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Check if no actions were declared
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    /// Compile everything loaded into types and creators
    pub fn build(self) -> Result<Actions> {
        let options = match (self.options, self.prefix) {
            (Some(options), _) => options,
            (None, Some(prefix)) => Options::with_prefix(prefix),
            (None, None) => Options::default(),
        };

        let mut config = self.config;
        for (name, creator) in self.creators {
            config.insert(name, creator);
        }

        Ok(create_actions(config, &options)?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sauce_core::Action;

    const TODOS: &str = r#"
    (
        prefix: "todos/",
        actions: {
            "addTodo": ["text", { "done": false }],
            "setFilter": { "filter": "all" },
            "clearDone": (),
        },
    )
    "#;

    #[test]
    fn test_load_actions() {
        let mut loader = Loader::new();
        loader.load_str(TODOS).unwrap();
        assert_eq!(loader.len(), 3);

        let actions = loader.build().unwrap();
        assert_eq!(actions.type_of("addTodo"), Some("todos/ADD_TODO"));
        assert_eq!(actions.types.get("CLEAR_DONE"), Some("todos/CLEAR_DONE"));

        let add = actions.create("addTodo", &["buy milk".into()]).unwrap();
        assert_eq!(
            add,
            Action::new("todos/ADD_TODO")
                .with("done", false)
                .with("text", "buy milk")
        );

        let filter = actions.create("setFilter", &[]).unwrap();
        assert_eq!(filter.get("filter"), Some(&Value::from("all")));
    }

    #[test]
    fn test_options_override_file_prefix() {
        let mut loader = Loader::new().with_options(Options::with_prefix("app/"));
        loader.load_str(TODOS).unwrap();

        let actions = loader.build().unwrap();
        assert_eq!(actions.type_of("clearDone"), Some("app/CLEAR_DONE"));
    }

    #[test]
    fn test_hand_written_creator_wins() {
        let mut loader = Loader::new().with_creator(
            "clearDone",
            ActionCreator::from_fn(|_| Action::new("todos/CLEAR_DONE").with("all", true)),
        );
        loader.load_str(TODOS).unwrap();

        let actions = loader.build().unwrap();
        let clear = actions.create("clearDone", &[]).unwrap();
        assert_eq!(clear.get("all"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_duplicate_actions() {
        let mut loader = Loader::new();
        loader.load_str(TODOS).unwrap();

        let result = loader.load_str(r#"(actions: { "addTodo": () })"#);
        assert!(matches!(result, Err(Error::DuplicateDefinition(name)) if name == "addTodo"));
    }

    #[test]
    fn test_conflicting_prefixes() {
        let mut loader = Loader::new();
        loader.load_str(TODOS).unwrap();

        let result = loader.load_str(r#"(prefix: "other/", actions: { "undo": () })"#);
        assert!(matches!(result, Err(Error::InvalidSchema(_))));
    }

    #[test]
    fn test_malformed_declaration() {
        let mut loader = Loader::new();
        let result = loader.load_str(r#"(actions: { "broken": 42 })"#);
        assert!(matches!(
            result,
            Err(Error::Core(sauce_core::Error::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_empty_document() {
        let mut loader = Loader::new();
        loader.load_str("(actions: {})").unwrap();
        assert!(loader.is_empty());
        assert!(matches!(loader.build(), Err(Error::Core(_))));
    }

    #[test]
    fn test_missing_file() {
        let mut loader = Loader::new();
        let result = loader.load_file("does/not/exist.ron");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
