#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use birkenbihl::config;
    use birkenbihl::formatting::Identity;
    use birkenbihl::layout::{self, Monospace};
    use birkenbihl::parsing;
    use birkenbihl::rendering;
    use birkenbihl::visibility::{self, VisibilityOptions};

    fn sample_files() -> Vec<PathBuf> {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in samples directory");

        files
    }

    #[test]
    fn ensure_samples_parse() {
        let mut failures = Vec::new();

        for file in &sample_files() {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&content);

            let empty = document
                .blocks
                .is_empty()
                || document
                    .blocks
                    .iter()
                    .any(|block| block.tokens.is_empty());

            if empty {
                println!("File {:?} has no tokens", file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse into blocks, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_samples_render() {
        let content =
            fs::read_to_string("tests/samples/tags.json").expect("Failed to read tag configuration");
        let rules = config::load_rules(Some(&content)).expect("Sample tag configuration invalid");
        let measure = Monospace::default();

        for file in &sample_files() {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
            let document = parsing::parse(&content);

            let blocks =
                visibility::apply_visibility(&document.blocks, &rules, &VisibilityOptions::default());
            let placements = layout::lay_out(&layout::line_records(&blocks, &measure));
            assert_eq!(placements.len(), blocks.len());

            let result = rendering::render(&Identity, &blocks, &placements, &measure);
            assert!(result.ends_with('\n'), "for {:?}", file);

            // every source line and one line per language, blank lines between blocks
            let expected: usize = blocks
                .iter()
                .map(|block| 1 + block.translations.len())
                .sum::<usize>()
                + blocks.len()
                - 1;
            assert_eq!(
                result
                    .lines()
                    .count(),
                expected,
                "for {:?}",
                file
            );
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/nonexistent.txt"));
        match result {
            Err(error) => assert_eq!(error.problem, "File not found"),
            Ok(_) => panic!("loading a missing file should fail"),
        }
    }
}
