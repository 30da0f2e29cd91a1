//! Static language table used by the `--languages` filter

/// A named language and the file extensions that belong to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    /// Extensions with their leading dot, as compared against file paths
    pub extensions: &'static [&'static str],
}

pub const LANGUAGES: &[Language] = &[
    Language { name: "Bash", extensions: &[".sh", ".bash", ".zsh"] },
    Language { name: "C", extensions: &[".c", ".h"] },
    Language { name: "C#", extensions: &[".cs"] },
    Language { name: "C++", extensions: &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx", ".h++"] },
    Language { name: "CSS", extensions: &[".css"] },
    Language { name: "Dockerfile", extensions: &[".dockerfile"] },
    Language { name: "Go", extensions: &[".go"] },
    Language { name: "Haskell", extensions: &[".hs", ".lhs"] },
    Language { name: "HTML", extensions: &[".html", ".htm", ".xhtml"] },
    Language { name: "Java", extensions: &[".java"] },
    Language { name: "JavaScript", extensions: &[".js", ".mjs", ".cjs", ".jsx"] },
    Language { name: "JSON", extensions: &[".json"] },
    Language { name: "Kotlin", extensions: &[".kt", ".kts"] },
    Language { name: "Lua", extensions: &[".lua"] },
    Language { name: "Makefile", extensions: &[".mk", ".mak"] },
    Language { name: "Markdown", extensions: &[".md", ".markdown"] },
    Language { name: "Perl", extensions: &[".pl", ".pm"] },
    Language { name: "PHP", extensions: &[".php"] },
    Language { name: "Protocol Buffer", extensions: &[".proto"] },
    Language { name: "Python", extensions: &[".py", ".pyi"] },
    Language { name: "Ruby", extensions: &[".rb"] },
    Language { name: "Rust", extensions: &[".rs"] },
    Language { name: "Scala", extensions: &[".scala", ".sc"] },
    Language { name: "SQL", extensions: &[".sql"] },
    Language { name: "Swift", extensions: &[".swift"] },
    Language { name: "TOML", extensions: &[".toml"] },
    Language { name: "TypeScript", extensions: &[".ts", ".tsx", ".mts", ".cts"] },
    Language { name: "XML", extensions: &[".xml", ".xsd", ".xsl"] },
    Language { name: "YAML", extensions: &[".yaml", ".yml"] },
];

/// Look up a language by name, ignoring case
pub fn find_language(name: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|lang| lang.name.eq_ignore_ascii_case(name.trim()))
}

/// Union of extensions for the named languages
///
/// Unknown names are skipped with a warning.
pub fn extensions_for(names: &[String]) -> Vec<String> {
    let mut extensions = Vec::new();
    for name in names {
        match find_language(name) {
            Some(lang) => extensions.extend(lang.extensions.iter().map(|e| e.to_string())),
            None => tracing::warn!("Unknown language '{}' ignored", name),
        }
    }
    extensions
}
