use include_dir::{Dir, DirEntry, include_dir};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Embedded instruction template (name relative to `src/assets/prompts`).
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplateFile {
    pub name: &'static str,
    pub content: &'static str,
}

/// All embedded `.j2` templates, sorted by name.
pub fn prompt_template_files() -> Vec<PromptTemplateFile> {
    let mut files = Vec::new();
    collect_files(&PROMPTS_DIR, &mut files);
    files.sort_by(|a, b| a.name.cmp(b.name));
    files
}

fn collect_files(dir: &'static Dir<'static>, files: &mut Vec<PromptTemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8()
                    && let Some(name) = file.path().to_str()
                    && name.ends_with(".j2")
                {
                    files.push(PromptTemplateFile { name, content });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}
