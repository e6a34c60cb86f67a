//! 画像形式の管理
//!
//! 受け付ける拡張子は jpg / jpeg / png。
//! jpeg は表示・命名用に jpg へ正規化し、保存時は JPEG で再エンコードする。

/// 受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 保存形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeFormat {
    Png,
    Jpeg,
}

impl EncodeFormat {
    /// MIMEタイプ
    pub fn mime_type(&self) -> &'static str {
        match self {
            EncodeFormat::Png => "image/png",
            EncodeFormat::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeFormat::Png => write!(f, "PNG"),
            EncodeFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// ファイル名から判定した形式情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFormat {
    /// 拡張子を除いたファイル名
    pub stem: String,
    /// 正規化済み拡張子（jpg / png）
    pub extension: String,
    pub encode_format: EncodeFormat,
}

impl FileFormat {
    /// ファイル名から形式を判定する（未対応の拡張子は None）
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        let extension = normalize_extension(ext)?;
        let encode_format = if extension == "png" {
            EncodeFormat::Png
        } else {
            EncodeFormat::Jpeg
        };

        Some(Self {
            stem: stem.to_string(),
            extension: extension.to_string(),
            encode_format,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.encode_format.mime_type()
    }
}

/// 拡張子を正規化（大文字小文字を無視、jpeg → jpg）
pub fn normalize_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("jpg"),
        "png" => Some("png"),
        _ => None,
    }
}

/// 対応する画像拡張子か
pub fn is_accepted_extension(ext: &str) -> bool {
    normalize_extension(ext).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("jpeg"), Some("jpg"));
        assert_eq!(normalize_extension("JPG"), Some("jpg"));
        assert_eq!(normalize_extension("PNG"), Some("png"));
        assert_eq!(normalize_extension("gif"), None);
    }

    #[test]
    fn test_is_accepted_extension() {
        for ext in ACCEPTED_EXTENSIONS {
            assert!(is_accepted_extension(ext));
        }
        assert!(!is_accepted_extension("txt"));
        assert!(!is_accepted_extension("webp"));
    }

    #[test]
    fn test_from_file_name_jpeg() {
        let format = FileFormat::from_file_name("IMG_0001.JPEG").unwrap();
        assert_eq!(format.stem, "IMG_0001");
        assert_eq!(format.extension, "jpg");
        assert_eq!(format.encode_format, EncodeFormat::Jpeg);
        assert_eq!(format.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_from_file_name_png() {
        let format = FileFormat::from_file_name("my.photo.png").unwrap();
        assert_eq!(format.stem, "my.photo");
        assert_eq!(format.extension, "png");
        assert_eq!(format.encode_format, EncodeFormat::Png);
        assert_eq!(format.mime_type(), "image/png");
    }

    #[test]
    fn test_from_file_name_unsupported() {
        assert!(FileFormat::from_file_name("notes.txt").is_none());
        assert!(FileFormat::from_file_name("no_extension").is_none());
    }
}
