//! Filesystem side of site generation: static asset copying and page output.

use markdown_sitegen_engine::{ConvertError, Escaping, TitleError, extract_title, markdown_to_html_with};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

use crate::template::fill_template;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {path}: {source}")]
    Convert { path: PathBuf, source: ConvertError },
    #[error("Failed to extract title from {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
    #[error("Content directory not found: {0}")]
    MissingContentDir(PathBuf),
    #[error("Invalid content path: {0}")]
    InvalidContentPath(PathBuf),
}

/// Rebuilds `output_dir` from scratch and mirrors `static_dir` into it.
///
/// A missing static directory only leaves the output directory empty.
/// Returns the number of files copied.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize, SiteError> {
    if output_dir.exists() {
        log::info!("Removing {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|source| SiteError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }
    create_dir_all(output_dir)?;

    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found, nothing to copy",
            static_dir.display()
        );
        return Ok(0);
    }
    copy_directory_recursive(static_dir, output_dir)
}

fn copy_directory_recursive(from_dir: &Path, to_dir: &Path) -> Result<usize, SiteError> {
    let entries = fs::read_dir(from_dir).map_err(|source| SiteError::Read {
        path: from_dir.to_path_buf(),
        source,
    })?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|source| SiteError::Read {
            path: from_dir.to_path_buf(),
            source,
        })?;
        let from = entry.path();
        let to = to_dir.join(entry.file_name());

        if from.is_dir() {
            create_dir_all(&to)?;
            copied += copy_directory_recursive(&from, &to)?;
        } else {
            log::info!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(|source| SiteError::Copy {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Renders one Markdown file through the page template into `dest_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    escaping: Escaping,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );
    let markdown = read_to_string(from_path)?;
    let template = read_to_string(template_path)?;

    let content =
        markdown_to_html_with(&markdown, escaping).map_err(|source| SiteError::Convert {
            path: from_path.to_path_buf(),
            source,
        })?;
    let title = extract_title(&markdown).map_err(|source| SiteError::Title {
        path: from_path.to_path_buf(),
        source,
    })?;

    let page = fill_template(&template, &title, &content);

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(dest_path, page).map_err(|source| SiteError::Write {
        path: dest_path.to_path_buf(),
        source,
    })
}

/// Generates a page for every `.md` file under `content_dir`.
///
/// `content/blog/post.md` is written to `<dest_dir>/blog/post.html`.
/// Returns the written paths in sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    escaping: Escaping,
) -> Result<Vec<PathBuf>, SiteError> {
    let sources = scan_markdown_files(content_dir)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let dest = output_path_for(content_dir, &source, dest_dir)?;
        generate_page(&source, template_path, &dest, escaping)?;
        written.push(dest);
    }
    Ok(written)
}

/// Maps a Markdown file under `content_dir` to its `.html` path under `dest_dir`.
pub fn output_path_for(
    content_dir: &Path,
    source: &Path,
    dest_dir: &Path,
) -> Result<PathBuf, SiteError> {
    let relative = source
        .strip_prefix(content_dir)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .ok_or_else(|| SiteError::InvalidContentPath(source.to_path_buf()))?;
    Ok(relative.with_extension("html").to_path(dest_dir))
}

/// Lists every `.md` file below `content_dir`, sorted.
pub fn scan_markdown_files(content_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingContentDir(content_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(|source| SiteError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| SiteError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

fn read_to_string(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir_all(path: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(path).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
