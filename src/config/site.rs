// ABOUTME: Declarative site settings consumed when rendering pages and mounting assets
// ABOUTME: Output mode, accepted image encodings, and the remote image domain allow-list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use crate::constants::{defaults, env_keys};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};
use url::Url;

/// How the built server is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Self-contained: the server also serves the static asset directory
    #[default]
    Standalone,
    /// Assets are served by a fronting proxy or CDN
    External,
}

impl OutputMode {
    /// Parse an output mode name
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown modes
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "standalone" => Ok(Self::Standalone),
            "external" => Ok(Self::External),
            other => Err(AppError::config_invalid(
                env_keys::OUTPUT_MODE,
                format!("unknown output mode '{other}'"),
            )),
        }
    }

    /// Whether the server mounts the static asset directory itself
    #[must_use]
    pub const fn serves_static_assets(self) -> bool {
        matches!(self, Self::Standalone)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::External => write!(f, "external"),
        }
    }
}

/// Image encodings the site may emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Avif,
    Webp,
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Parse a short format name (`avif`, `webp`, `png`, `jpeg`/`jpg`) or a MIME type
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unrecognised formats
    pub fn parse(s: &str) -> AppResult<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.strip_prefix("image/").unwrap_or(&normalized) {
            "avif" => Ok(Self::Avif),
            "webp" => Ok(Self::Webp),
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            other => Err(AppError::config_invalid(
                env_keys::IMAGE_FORMATS,
                format!("unsupported image format '{other}'"),
            )),
        }
    }

    /// MIME type used in `<source type=...>`
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Avif => "image/avif",
            Self::Webp => "image/webp",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// File extension of pre-encoded variants
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Webp => "webp",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Image handling rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Accepted encodings, in preference order
    pub formats: Vec<ImageFormat>,
    /// Remote hosts images may be loaded from; empty means local images only
    pub domains: Vec<String>,
    /// Local image paths known to exist; `None` until the asset directory is scanned
    #[serde(skip)]
    pub available: Option<BTreeSet<String>>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            formats: vec![ImageFormat::Avif, ImageFormat::Webp],
            domains: Vec::new(),
            available: None,
        }
    }
}

impl ImageConfig {
    /// Build from comma-separated format and domain lists
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any format is unrecognised
    pub fn from_lists(formats: &str, domains: &str) -> AppResult<Self> {
        let formats = split_list(formats)
            .iter()
            .map(|f| ImageFormat::parse(f))
            .collect::<AppResult<Vec<_>>>()?;
        let domains = split_list(domains)
            .into_iter()
            .map(|d| d.to_lowercase())
            .collect();
        Ok(Self {
            formats,
            domains,
            available: None,
        })
    }

    /// Check that an image source may be rendered
    ///
    /// Local absolute paths are always allowed. Remote `http(s)` sources are
    /// allowed only when their host is on the domain allow-list.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for relative paths, unparsable URLs,
    /// non-http schemes, and hosts not on the allow-list
    pub fn check_src(&self, src: &str) -> AppResult<()> {
        if src.starts_with('/') && !src.starts_with("//") {
            return Ok(());
        }
        let url = Url::parse(src)
            .map_err(|e| AppError::invalid_input(format!("Invalid image source '{src}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::invalid_input(format!(
                "Image scheme '{}' is not allowed",
                url.scheme()
            )));
        }
        let host = url.host_str().unwrap_or_default().to_lowercase();
        if self.domains.iter().any(|d| *d == host) {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Remote image host '{host}' is not in the allowed domains"
            )))
        }
    }

    /// Pre-encoded variants of a local image, one per accepted format
    ///
    /// `/logo.png` with `[avif, webp]` yields `/logo.avif` and `/logo.webp`.
    /// Remote sources and sources without an extension have no variants.
    /// Once the asset directory has been scanned, variants without a file
    /// are omitted so browsers never pick a `<source>` that would 404.
    #[must_use]
    pub fn variants(&self, src: &str) -> Vec<(ImageFormat, String)> {
        if !src.starts_with('/') {
            return Vec::new();
        }
        let Some((stem, ext)) = src.rsplit_once('.') else {
            return Vec::new();
        };
        if stem.is_empty() || stem.ends_with('/') || ext.contains('/') {
            return Vec::new();
        }
        self.formats
            .iter()
            .map(|format| (*format, format!("{stem}.{}", format.extension())))
            .filter(|(_, variant)| variant != src)
            .filter(|(_, variant)| match &self.available {
                Some(available) => available.contains(variant),
                None => true,
            })
            .collect()
    }
}

/// Site/build settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Deployment output mode
    pub output_mode: OutputMode,
    /// Directory holding static assets such as `logo.png`
    pub static_dir: PathBuf,
    /// Image rules
    pub images: ImageConfig,
    /// Workspace packages compiled into the deployable bundle
    pub transpile_packages: Vec<String>,
}

impl SiteConfig {
    /// Record which top-level image files exist under `static_dir`
    ///
    /// Only meaningful in standalone mode; an unreadable directory leaves the
    /// image rules unchanged.
    pub fn scan_static_assets(&mut self) {
        if !self.output_mode.serves_static_assets() {
            return;
        }
        let entries = match std::fs::read_dir(&self.static_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(static_dir = %self.static_dir.display(), error = %e, "Cannot scan static assets");
                return;
            }
        };
        let available: BTreeSet<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .map(|name| format!("/{name}"))
            .collect();
        debug!(count = available.len(), "Static assets scanned");
        self.images.available = Some(available);
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::default(),
            static_dir: PathBuf::from(defaults::STATIC_DIR),
            images: ImageConfig::default(),
            transpile_packages: split_list(defaults::TRANSPILE_PACKAGES),
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empties
pub(crate) fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_config_blocks_remote_hosts() {
        let images = ImageConfig::default();

        assert_eq!(images.formats, vec![ImageFormat::Avif, ImageFormat::Webp]);
        assert!(images.domains.is_empty());
        assert!(images.check_src("/logo.png").is_ok());
        assert!(images.check_src("https://cdn.example.com/logo.png").is_err());
        assert!(images.check_src("//cdn.example.com/logo.png").is_err());
        assert!(images.check_src("logo.png").is_err());
    }

    #[test]
    fn test_allow_listed_domain() {
        let images = ImageConfig::from_lists("webp", "CDN.example.com").unwrap();

        assert!(images.check_src("https://cdn.example.com/a.png").is_ok());
        assert!(images.check_src("https://evil.example.com/a.png").is_err());
        assert!(images.check_src("ftp://cdn.example.com/a.png").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ImageFormat::parse("image/avif").unwrap(), ImageFormat::Avif);
        assert_eq!(ImageFormat::parse(" WEBP ").unwrap(), ImageFormat::Webp);
        assert_eq!(ImageFormat::parse("jpg").unwrap(), ImageFormat::Jpeg);
        assert!(ImageFormat::parse("gif").is_err());
        assert!(ImageConfig::from_lists("avif,tiff", "").is_err());
    }

    #[test]
    fn test_variants() {
        let images = ImageConfig::default();
        let variants = images.variants("/logo.png");

        assert_eq!(
            variants,
            vec![
                (ImageFormat::Avif, "/logo.avif".to_owned()),
                (ImageFormat::Webp, "/logo.webp".to_owned()),
            ]
        );
        assert!(images.variants("https://cdn.example.com/logo.png").is_empty());
        assert!(images.variants("/images/").is_empty());
    }

    #[test]
    fn test_scan_drops_missing_variants() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"png").unwrap();
        std::fs::write(dir.path().join("logo.webp"), b"webp").unwrap();
        let mut site = SiteConfig {
            static_dir: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };

        site.scan_static_assets();

        assert_eq!(
            site.images.variants("/logo.png"),
            vec![(ImageFormat::Webp, "/logo.webp".to_owned())]
        );
    }

    #[test]
    fn test_output_mode() {
        assert_eq!(OutputMode::parse("Standalone").unwrap(), OutputMode::Standalone);
        assert!(!OutputMode::parse("external").unwrap().serves_static_assets());
        assert!(OutputMode::parse("export").is_err());
    }
}
