use crate::error::{RenameError, Result};
use photo_rename_common::format::is_accepted_extension;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageFile {
    /// 取り込み用に (バイト列, 元ファイル名) を読み込む
    pub fn read(&self) -> Result<(Vec<u8>, String)> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| RenameError::ImageLoad(format!("{}: {}", self.path.display(), e)))?;
        Ok((bytes, self.file_name.clone()))
    }
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageFile>> {
    if !folder.is_dir() {
        return Err(RenameError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let accepted = path
            .extension()
            .map(|ext| is_accepted_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if accepted {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            images.push(ImageFile {
                path: path.to_path_buf(),
                file_name,
            });
        }
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 画像を読み込む（読めなかったファイルは警告してスキップ）
pub fn read_images(images: &[ImageFile]) -> Vec<(Vec<u8>, String)> {
    images
        .iter()
        .filter_map(|img| match img.read() {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(RenameError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_images() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("test1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("test2.JPEG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("test3.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("readme.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(dir.path(), false).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].file_name, "test1.jpg");
        assert_eq!(result[1].file_name, "test2.JPEG");
        assert_eq!(result[2].file_name, "test3.png");
    }

    #[test]
    fn test_images_sorted_by_filename() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("c.jpg")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.jpg")).unwrap();

        let result = scan_folder(dir.path(), false).unwrap();
        let names: Vec<&str> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_recursive_scan() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        File::create(dir.path().join("top.jpg")).unwrap();
        File::create(sub.join("nested.png")).unwrap();

        assert_eq!(scan_folder(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_read_images() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"bytes").unwrap();

        let images = scan_folder(dir.path(), false).unwrap();
        let files = read_images(&images);
        assert_eq!(files, vec![(b"bytes".to_vec(), "a.jpg".to_string())]);
    }
}
