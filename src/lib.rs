pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod theme;

#[cfg(test)]
mod tests {
    use std::path::Path;

    fn collect_sources(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                collect_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push(path);
            }
        }
    }

    #[test]
    fn test_source_lines_fit_rustfmt_width() {
        let mut files = Vec::new();
        collect_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
        assert!(!files.is_empty());

        let mut long = Vec::new();
        for file in files {
            let text = std::fs::read_to_string(&file).unwrap();
            for (n, line) in text.lines().enumerate() {
                if line.chars().count() > 100 {
                    long.push(format!("{}:{}", file.display(), n + 1));
                }
            }
        }
        assert!(long.is_empty(), "lines over 100 columns: {long:?}");
    }
}
