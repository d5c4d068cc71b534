use tree_sitter::Language;

/// Languages whose imports feed the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Python,
}

impl Lang {
    /// Maps a recorded extension (with or without the leading dot).
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.') {
            "py" => Some(Self::Python),
            _ => None,
        }
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Python => tree_sitter_python::language(),
        }
    }

    /// Extension of module files, leading dot included.
    #[must_use]
    pub fn module_ext(self) -> &'static str {
        match self {
            Self::Python => ".py",
        }
    }

    /// File whose presence makes a directory an importable package.
    #[must_use]
    pub fn package_marker(self) -> &'static str {
        match self {
            Self::Python => "__init__.py",
        }
    }
}
